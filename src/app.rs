use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use sportdev_core::services::AccountService;
use sportdev_core::watch::WatchHandle;
use sportdev_core::{
    AppConfig, ChatSession, GeminiCoach, OnboardingFlow, OnboardingStep, RoutinePlanner,
    SelectionSession, SupabaseAccount,
};

use crate::components::ai_chat::AiChat;
use crate::components::exercise_drawer::ExerciseDrawer;
use crate::components::sidebar::Sidebar;
use crate::context::{AppContext, Services};
use crate::pages::achievements::AchievementsPage;
use crate::pages::auth::AuthPage;
use crate::pages::community::CommunityPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::goals::GoalsPage;
use crate::pages::library::LibraryPage;
use crate::pages::onboarding::OnboardingPage;
use crate::pages::progress::ProgressPage;
use crate::pages::routines::RoutinesPage;
use crate::pages::wellness::WellnessPage;
use crate::pages::workout::WorkoutPage;
use crate::theme::apply_theme;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let services = Services {
        coach: Rc::new(GeminiCoach::new(config.coach).expect("coaching client")),
        account: Rc::new(SupabaseAccount::new(config.account).expect("account client")),
        chat: Rc::new(ChatSession::new()),
        selection: Rc::new(SelectionSession::new()),
        planner: Rc::new(RoutinePlanner::new()),
        onboarding: Rc::new(OnboardingFlow::new()),
    };

    let ctx = AppContext {
        services: StoredValue::new_local(services),
        session: RwSignal::new(None),
        selected: RwSignal::new(None),
        onboarding_step: RwSignal::new(OnboardingStep::Assessment),
    };
    provide_context(ctx);

    Effect::new(move |_| apply_theme("dark"));

    // Query the account session once at startup, then follow sign-in/out
    // transitions for as long as the shell is mounted. The handle outlives
    // the subscription closure so unmount releases it.
    Effect::new(move |_| {
        let account = ctx.services.with_value(|s| s.account.clone());
        spawn_local(async move {
            ctx.session.set(account.current_session().await);
        });
    });
    let watch_handle = StoredValue::new_local(None::<WatchHandle>);
    let handle = ctx
        .services
        .with_value(|s| s.account.clone())
        .on_session_change(Box::new(move |session| ctx.session.set(session.cloned())));
    watch_handle.set_value(Some(handle));
    on_cleanup(move || watch_handle.set_value(None));

    view! {
        <style>{include_str!("app.css")}</style>
        {move || match ctx.session.get() {
            None => view! { <AuthPage /> }.into_any(),
            Some(_) => view! { <MainShell /> }.into_any(),
        }}
    }
}

/// Signed-in shell: onboarding until completed, then the main app.
#[component]
fn MainShell() -> impl IntoView {
    let ctx = crate::context::use_app();
    view! {
        {move || {
            if ctx.onboarding_step.get() == OnboardingStep::Completed {
                view! { <AppShell /> }.into_any()
            } else {
                view! { <OnboardingPage /> }.into_any()
            }
        }}
    }
}

#[component]
fn AppShell() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <header class="topbar">
                        <input type="text" class="topbar-search" placeholder="Search training..." />
                        <div class="topbar-actions">
                            <button class="btn-upgrade">"Upgrade"</button>
                        </div>
                    </header>
                    <div class="page-scroll">
                        <Routes fallback=|| view! { <p class="empty-results">"Page not found"</p> }>
                            <Route path=path!("/") view=DashboardPage />
                            <Route path=path!("/library") view=LibraryPage />
                            <Route path=path!("/workout") view=WorkoutPage />
                            <Route path=path!("/progress") view=ProgressPage />
                            <Route path=path!("/goals") view=GoalsPage />
                            <Route path=path!("/achievements") view=AchievementsPage />
                            <Route path=path!("/community") view=CommunityPage />
                            <Route path=path!("/wellness") view=WellnessPage />
                            <Route path=path!("/routines") view=RoutinesPage />
                        </Routes>
                    </div>
                </main>
            </div>
            <ExerciseDrawer />
            <AiChat />
        </Router>
    }
}
