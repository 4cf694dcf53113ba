use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = [
        ("Steps", "8,432"),
        ("Calories", "1,650"),
        ("Sleep", "7h 20m"),
        ("Water", "1.8L"),
    ];
    let days = ["M", "T", "W", "T", "F", "S", "S"];

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h2>"Welcome back, Alex"</h2>
                    <p class="page-description">"You're on day 14 of your streak. Keep it up!"</p>
                </div>
                <span class="streak-badge">"7-Day Streak"</span>
            </div>

            <div class="stat-grid">
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <p class="stat-label">{label}</p>
                                <p class="stat-value">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard-columns">
                <section class="dashboard-main">
                    <h3>"Next Session: Upper Body Power"</h3>
                    <div class="session-card">
                        <div>
                            <p class="session-duration">"45-60 Minutes"</p>
                            <p class="session-target">"Target: Chest, Shoulders, Triceps"</p>
                        </div>
                        <a href="/workout" class="btn btn-primary">"Start Now"</a>
                    </div>
                </section>
                <section class="dashboard-side">
                    <h3>"Weekly Calendar"</h3>
                    <div class="calendar-card">
                        {days
                            .into_iter()
                            .enumerate()
                            .map(|(index, day)| {
                                let done = index < 3;
                                view! {
                                    <div class="calendar-row">
                                        <span class="calendar-day">{day}</span>
                                        <div class="calendar-bar" class:calendar-bar-done=move || done></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
