use leptos::prelude::*;

#[component]
pub fn GoalsPage() -> impl IntoView {
    let goals: [(&str, f64, f64, &str); 3] = [
        ("100kg Squat", 85.0, 100.0, "kg"),
        ("75kg Body Weight", 78.0, 75.0, "kg"),
        ("5km Run", 4.2, 5.0, "km"),
    ];

    view! {
        <div class="page goals-page">
            <div class="page-header">
                <div>
                    <h2>"My Targets"</h2>
                    <p class="page-description">"SMART goals drive consistent results."</p>
                </div>
                <button class="btn btn-primary">"+ New Target"</button>
            </div>

            <div class="goal-list">
                {goals
                    .into_iter()
                    .map(|(name, current, target, unit)| {
                        let percent = ((current / target) * 100.0).min(100.0);
                        let width = format!("width: {percent:.0}%");
                        view! {
                            <div class="goal-row">
                                <div class="goal-row-header">
                                    <h3>{name}</h3>
                                    <p class="goal-progress">
                                        {format!("{current} / {target} {unit}")}
                                    </p>
                                </div>
                                <div class="meter-track meter-track-tall">
                                    <div class="meter-fill" style=width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
