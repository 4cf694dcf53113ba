use leptos::prelude::*;

#[component]
pub fn WorkoutPage() -> impl IntoView {
    view! {
        <div class="page workout-page">
            <div class="page-header">
                <div>
                    <span class="page-kicker">"Active Session"</span>
                    <h2>"Barbell Bench Press"</h2>
                </div>
                <div class="workout-timer">
                    <p class="timer-value">"12:45"</p>
                    <p class="timer-label">"Workout Time"</p>
                </div>
            </div>

            <div class="workout-columns">
                <section class="set-log">
                    <h3>"Log Sets"</h3>
                    {(1..=4)
                        .map(|set| {
                            let active = set == 1;
                            view! {
                                <div class="set-row" class:set-row-active=move || active>
                                    <span class="set-number">{format!("0{set}")}</span>
                                    <div class="set-target">
                                        <p class="set-target-label">"Target"</p>
                                        <p class="set-target-value">"12 Reps • 60 kg"</p>
                                    </div>
                                    <button class="set-check">"✓"</button>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="workout-side">
                    <div class="form-tip">
                        <h4>"AI Form Tip"</h4>
                        <p class="form-tip-text">
                            "\"Keep your shoulder blades retracted and feet firmly planted for maximum power transfer during the press.\""
                        </p>
                    </div>
                    <div class="workout-actions">
                        <button class="btn btn-secondary">"Rest 90s"</button>
                        <button class="btn btn-primary">"Next Set"</button>
                    </div>
                </section>
            </div>
        </div>
    }
}
