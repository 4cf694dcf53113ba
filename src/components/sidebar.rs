use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use sportdev_core::services::AccountService;

use crate::context::use_app;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app();

    let sign_out = move |_| {
        let account = ctx.services.with_value(|s| s.account.clone());
        spawn_local(async move {
            account.sign_out().await;
        });
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"SportDev"</h1>
                <p class="sidebar-subtitle">"Elite Training"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Dashboard"</a>
                </li>
                <li class="nav-item">
                    <a href="/workout" class="nav-link">"Start Workout"</a>
                </li>
                <li class="nav-item">
                    <a href="/library" class="nav-link">"Exercise Library"</a>
                </li>
                <li class="nav-item">
                    <a href="/routines" class="nav-link">"My Routines"</a>
                </li>
                <li class="nav-item">
                    <a href="/progress" class="nav-link">"Progress Analytics"</a>
                </li>
                <li class="nav-item">
                    <a href="/goals" class="nav-link">"My Targets"</a>
                </li>
                <li class="nav-item">
                    <a href="/achievements" class="nav-link">"Achievements"</a>
                </li>
                <li class="nav-item">
                    <a href="/community" class="nav-link">"Community Feed"</a>
                </li>
                <li class="nav-item">
                    <a href="/wellness" class="nav-link">"Wellness & Recovery"</a>
                </li>
            </ul>
            <div class="sidebar-footer">
                {move || {
                    ctx.session
                        .get()
                        .map(|session| view! { <p class="sidebar-user">{session.email}</p> })
                }}
                <button class="btn btn-secondary sidebar-signout" on:click=sign_out>
                    "Sign Out"
                </button>
            </div>
        </nav>
    }
}
