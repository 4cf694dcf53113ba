use std::rc::Rc;

use leptos::prelude::*;

use sportdev_core::{
    AuthSession, ChatSession, ExerciseRecord, GeminiCoach, OnboardingFlow, OnboardingStep,
    RoutinePlanner, SelectionSession, SupabaseAccount,
};

/// The service clients and session objects, one set per app instance.
/// Everything in here is single-threaded state, so the bundle lives behind a
/// local `StoredValue` and components reach in with `with_value`.
#[derive(Clone)]
pub struct Services {
    pub coach: Rc<GeminiCoach>,
    pub account: Rc<SupabaseAccount>,
    pub chat: Rc<ChatSession>,
    pub selection: Rc<SelectionSession>,
    pub planner: Rc<RoutinePlanner>,
    pub onboarding: Rc<OnboardingFlow>,
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub services: StoredValue<Services, LocalStorage>,
    /// Mirror of the account session. `None` keeps everything behind the
    /// account screen.
    pub session: RwSignal<Option<AuthSession>>,
    /// Mirror of the selection session. Drives the detail drawer.
    pub selected: RwSignal<Option<ExerciseRecord>>,
    /// Mirror of the onboarding flow step.
    pub onboarding_step: RwSignal<OnboardingStep>,
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext provided by App")
}
