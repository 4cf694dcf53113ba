//! Saved routines: list newest-first, create with a non-empty name.
//!
//! Creation goes through the core planner, which validates the name before
//! the service is called and re-fetches the list after a successful write.
//! Write failures surface as a blocking alert; listing failures as an inline
//! banner.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::context::use_app;

#[component]
pub fn RoutinesPage() -> impl IntoView {
    let ctx = use_app();
    let (routines, set_routines) = signal(ctx.services.with_value(|s| s.planner.routines()));
    let (routine_name, set_routine_name) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (is_saving, set_is_saving) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);

    // Fetch the list whenever the signed-in user changes.
    Effect::new(move |_| {
        let Some(owner) = ctx.session.get().map(|s| s.user_id) else {
            return;
        };
        let (planner, account) = ctx
            .services
            .with_value(|s| (s.planner.clone(), s.account.clone()));
        set_is_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            if let Err(fault) = planner.refresh(account.as_ref(), &owner).await {
                set_load_error.set(Some(String::from(fault)));
            }
            set_routines.set(planner.routines());
            set_is_loading.set(false);
        });
    });

    let create_routine = move |_| {
        let Some(owner) = ctx.session.get_untracked().map(|s| s.user_id) else {
            return;
        };
        let name = routine_name.get_untracked();
        if name.trim().is_empty() || is_saving.get_untracked() {
            return;
        }
        let (planner, account) = ctx
            .services
            .with_value(|s| (s.planner.clone(), s.account.clone()));
        set_is_saving.set(true);
        spawn_local(async move {
            match planner.create(account.as_ref(), &owner, &name).await {
                Ok(()) => set_routine_name.set(String::new()),
                Err(fault) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&String::from(fault));
                    }
                }
            }
            set_routines.set(planner.routines());
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page routines-page">
            <div class="page-header">
                <div>
                    <h2>"My Routines"</h2>
                    <p class="page-description">"Build and revisit your saved training days."</p>
                </div>
            </div>

            <div class="routine-form">
                <input
                    type="text"
                    class="input"
                    placeholder="Routine name, e.g. Leg Day"
                    prop:value=move || routine_name.get()
                    on:input=move |ev| set_routine_name.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
                <button
                    class="btn btn-primary"
                    on:click=create_routine
                    disabled=move || is_saving.get() || routine_name.get().trim().is_empty()
                >
                    {move || if is_saving.get() { "Saving..." } else { "Create Routine" }}
                </button>
            </div>

            {move || {
                load_error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="error-message">
                                <strong>"Error: "</strong>
                                {message}
                            </div>
                        }
                    })
            }}

            <Show when=move || is_loading.get()>
                <div class="loading-spinner">
                    <div class="spinner"></div>
                    <span>"Loading routines..."</span>
                </div>
            </Show>

            <div class="routine-list">
                <For
                    each=move || routines.get()
                    key=|routine| routine.id.clone()
                    children=move |routine| {
                        let created = routine.created_at.format("%b %d, %Y").to_string();
                        let count = routine.exercises.len();
                        view! {
                            <div class="routine-card">
                                <h3 class="routine-name">{routine.name}</h3>
                                <p class="routine-meta">
                                    {format!("{count} exercises • created {created}")}
                                </p>
                            </div>
                        }
                    }
                />
                <Show when=move || !is_loading.get() && routines.get().is_empty()>
                    <p class="empty-results">"No routines yet. Create your first one above."</p>
                </Show>
            </div>
        </div>
    }
}
