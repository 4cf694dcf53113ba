use leptos::prelude::*;

#[component]
pub fn WellnessPage() -> impl IntoView {
    let articles = [
        ("The Science of Sleep Phases", "Recovery", "6 min read"),
        ("Anti-Inflammatory Nutrition", "Diet", "6 min read"),
        ("Mobility Routine for Desk Workers", "Mobility", "6 min read"),
    ];

    view! {
        <div class="page wellness-page">
            <div class="page-header">
                <div>
                    <h2>"Holistic Wellness"</h2>
                    <p class="page-description">"Optimize your lifestyle for elite performance."</p>
                </div>
            </div>

            <div class="article-grid">
                {articles
                    .into_iter()
                    .map(|(title, category, read_time)| {
                        view! {
                            <div class="article-card">
                                <span class="article-category">{category}</span>
                                <h3 class="article-title">{title}</h3>
                                <p class="article-meta">{read_time}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
