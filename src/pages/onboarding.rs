//! The four-step onboarding flow shown after sign-in.
//!
//! The generating step advances on a timer scheduled exactly once on entry
//! to that step; the timeout handle is kept so an early unmount cancels the
//! pending advance instead of leaving it to fire into a dead view.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use sportdev_core::session::GENERATING_DELAY_MS;
use sportdev_core::{OnboardingStep, TrainingGoal};

use crate::context::use_app;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let ctx = use_app();
    let step = ctx.onboarding_step;
    let timer_id = StoredValue::new(None::<i32>);

    Effect::new(move |previous: Option<OnboardingStep>| {
        let current = step.get();
        if current == OnboardingStep::Generating && previous != Some(OnboardingStep::Generating) {
            let callback = wasm_bindgen::closure::Closure::once(move || {
                timer_id.set_value(None);
                ctx.services.with_value(|s| s.onboarding.finish_generating());
                step.set(ctx.services.with_value(|s| s.onboarding.step()));
            });
            let id = web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    GENERATING_DELAY_MS,
                )
                .unwrap();
            callback.forget();
            timer_id.set_value(Some(id));
        }
        current
    });

    on_cleanup(move || {
        if let Some(id) = timer_id.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    });

    let choose_goal = move |goal: TrainingGoal| {
        ctx.services.with_value(|s| s.onboarding.choose_goal(goal));
        step.set(ctx.services.with_value(|s| s.onboarding.step()));
    };

    let start_training = move |_| {
        ctx.services.with_value(|s| s.onboarding.start_training());
        step.set(ctx.services.with_value(|s| s.onboarding.step()));
    };

    view! {
        <div class="onboarding">
            {move || match step.get() {
                OnboardingStep::Assessment => {
                    view! {
                        <div class="onboarding-step">
                            <span class="onboarding-kicker">"Initial Assessment"</span>
                            <h2 class="onboarding-title">"What is your primary training goal?"</h2>
                            <div class="goal-grid">
                                {TrainingGoal::ALL
                                    .into_iter()
                                    .map(|goal| {
                                        view! {
                                            <button class="goal-card" on:click=move |_| choose_goal(goal)>
                                                <h3>{goal.label()}</h3>
                                                <p>
                                                    {format!(
                                                        "Optimized plans for {} and overall health.",
                                                        goal.label().to_lowercase(),
                                                    )}
                                                </p>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
                OnboardingStep::Generating => {
                    view! {
                        <div class="onboarding-step onboarding-generating">
                            <div class="spinner spinner-large"></div>
                            <h2 class="onboarding-title">"Analyzing your profile..."</h2>
                            <p class="onboarding-hint">
                                "Our AI is crafting your personalized 12-week blueprint."
                            </p>
                        </div>
                    }
                        .into_any()
                }
                OnboardingStep::Ready => {
                    view! {
                        <div class="onboarding-step">
                            <h2 class="onboarding-title">"Your 12-Week Path is Ready!"</h2>
                            <div class="plan-summary">
                                <div class="plan-phase">
                                    <span class="plan-number">"01"</span>
                                    <div>
                                        <h4>"Base Phase: Stability & Form"</h4>
                                        <p>"Weeks 1-4 • 4 Sessions/week"</p>
                                    </div>
                                </div>
                                <div class="plan-phase plan-phase-locked">
                                    <span class="plan-number">"02"</span>
                                    <div>
                                        <h4>"Build Phase: Progressive Overload"</h4>
                                        <p>"Weeks 5-8 • 5 Sessions/week"</p>
                                    </div>
                                </div>
                            </div>
                            <button class="btn btn-primary onboarding-start" on:click=start_training>
                                "Start Your Transformation"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                OnboardingStep::Completed => view! { <div></div> }.into_any(),
            }}
        </div>
    }
}
