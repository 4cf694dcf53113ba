use leptos::prelude::*;

#[component]
pub fn ProgressPage() -> impl IntoView {
    let cards = [
        ("Avg Intensity", "84%", "+4%"),
        ("Total Volume", "42.5 tons", "+1.2t"),
        ("Compliance", "98%", "Steady"),
    ];

    view! {
        <div class="page progress-page">
            <div class="page-header">
                <h2>"Progress Analytics"</h2>
            </div>

            <div class="stat-grid stat-grid-three">
                {cards
                    .into_iter()
                    .map(|(label, value, trend)| {
                        view! {
                            <div class="stat-card">
                                <p class="stat-label">{label}</p>
                                <p class="stat-value">{value}</p>
                                <p class="stat-trend">{trend}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="chart-card">
                <div class="chart-card-header">
                    <h3>"Weight Trend"</h3>
                    <p class="page-description">"Last 90 days"</p>
                </div>
                <svg class="trend-chart" viewBox="0 0 1000 400" preserveAspectRatio="none">
                    <defs>
                        <linearGradient id="trend-fill" x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" style="stop-color: #f97316; stop-opacity: 0.2" />
                            <stop offset="100%" style="stop-color: #f97316; stop-opacity: 0" />
                        </linearGradient>
                    </defs>
                    <path
                        d="M0,350 Q250,300 500,200 T1000,50 V400 H0 Z"
                        fill="url(#trend-fill)"
                    />
                    <path
                        d="M0,350 Q250,300 500,200 T1000,50"
                        fill="none"
                        stroke="#f97316"
                        stroke-width="6"
                    />
                </svg>
            </div>
        </div>
    }
}
