use leptos::prelude::*;

use sportdev_core::{Difficulty, Equipment, FilterCriteria, Locale, MuscleGroup};

#[component]
pub fn FilterPanel(
    criteria: ReadSignal<FilterCriteria>,
    #[prop(into)] on_toggle_muscle: Callback<MuscleGroup>,
    #[prop(into)] on_toggle_equipment: Callback<Equipment>,
    #[prop(into)] on_set_difficulty: Callback<Option<Difficulty>>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="filter-panel">
            <div class="filter-group">
                <h3 class="filter-heading">"Muscles"</h3>
                <div class="filter-options">
                    {MuscleGroup::ALL
                        .into_iter()
                        .map(|group| {
                            view! {
                                <button
                                    class="filter-chip"
                                    class:filter-chip-active=move || {
                                        criteria.get().muscle_filter.contains(&group)
                                    }
                                    on:click=move |_| on_toggle_muscle.run(group)
                                >
                                    {group.label(Locale::En)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="filter-group">
                <h3 class="filter-heading">"Equipment"</h3>
                <div class="filter-options">
                    {Equipment::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="filter-chip"
                                    class:filter-chip-active=move || {
                                        criteria.get().equipment_filter.contains(&item)
                                    }
                                    on:click=move |_| on_toggle_equipment.run(item)
                                >
                                    {item.label(Locale::En)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="filter-group">
                <h3 class="filter-heading">"Difficulty"</h3>
                <div class="filter-options">
                    {Difficulty::ALL
                        .into_iter()
                        .map(|level| {
                            view! {
                                <button
                                    class="filter-chip"
                                    class:filter-chip-active=move || {
                                        criteria.get().difficulty_filter == Some(level)
                                    }
                                    on:click=move |_| {
                                        let next = if criteria.get_untracked().difficulty_filter
                                            == Some(level)
                                        {
                                            None
                                        } else {
                                            Some(level)
                                        };
                                        on_set_difficulty.run(next);
                                    }
                                >
                                    {level.label(Locale::En)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button class="btn btn-secondary filter-clear" on:click=move |_| on_clear.run(())>
                "Clear Filters"
            </button>
        </aside>
    }
}
