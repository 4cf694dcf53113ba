use leptos::prelude::*;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let posts = [
        ("Sarah Miller", "completed Leg Day", "2h ago", 24),
        ("David Chen", "earned \"Iron Mind\" Badge", "5h ago", 12),
    ];

    view! {
        <div class="page community-page">
            <div class="community-columns">
                <section class="community-feed">
                    <h2>"Community Feed"</h2>
                    {posts
                        .into_iter()
                        .map(|(user, action, time, likes)| {
                            view! {
                                <div class="post-card">
                                    <div class="post-header">
                                        <div class="post-avatar"></div>
                                        <div>
                                            <p class="post-user">{user}</p>
                                            <p class="post-meta">{format!("{action} • {time}")}</p>
                                        </div>
                                    </div>
                                    <div class="post-actions">
                                        <button class="post-action">{format!("♥ {likes}")}</button>
                                        <button class="post-action">"Comment"</button>
                                        <button class="post-action post-action-right">"Share"</button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <aside class="community-side">
                    <div class="challenge-card">
                        <h4>"Active Challenges"</h4>
                        <div class="challenge-row">
                            <span class="challenge-rank">"1"</span>
                            <div>
                                <p class="challenge-name">"Squat Heavy Challenge"</p>
                                <p class="challenge-meta">"240 participants"</p>
                            </div>
                        </div>
                        <button class="btn btn-primary challenge-cta">"View All"</button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
