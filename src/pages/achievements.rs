use leptos::prelude::*;

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let badges = [
        ("Early Bird", true),
        ("Iron Mind", true),
        ("Streak Master", true),
        ("Social Star", false),
        ("Beast Mode", false),
        ("Night Owl", false),
    ];

    view! {
        <div class="page achievements-page">
            <div class="page-header page-header-center">
                <div>
                    <h2>"Your Achievements"</h2>
                    <p class="page-description">"Unlock more by staying consistent."</p>
                </div>
            </div>

            <div class="badge-grid">
                {badges
                    .into_iter()
                    .map(|(label, unlocked)| {
                        view! {
                            <div class="badge-card" class:badge-locked=move || !unlocked>
                                <div class="badge-icon"></div>
                                <span class="badge-label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
