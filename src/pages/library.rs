use leptos::prelude::*;

use sportdev_core::{exercise_catalog, filter_exercises, ExerciseRecord, FilterCriteria};

use crate::components::exercise_card::ExerciseCard;
use crate::components::filter_panel::FilterPanel;
use crate::context::use_app;

#[component]
pub fn LibraryPage() -> impl IntoView {
    let ctx = use_app();
    let (criteria, set_criteria) = signal(FilterCriteria::default());

    // The catalog is small; recompute the whole result on every change.
    let filtered = Memo::new(move |_| {
        filter_exercises(exercise_catalog(), &criteria.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let open_exercise = Callback::new(move |record: ExerciseRecord| {
        ctx.services.with_value(|s| s.selection.select(&record));
        ctx.selected
            .set(ctx.services.with_value(|s| s.selection.selected()));
    });

    view! {
        <div class="page library-page">
            <style>{include_str!("library.css")}</style>

            <div class="library-header">
                <div>
                    <h2>"Exercise Library"</h2>
                    <p class="page-description">"Master your form and discover new movements."</p>
                </div>
                <div class="library-count">
                    <span class="count-number">{move || filtered.get().len()}</span>
                    " Exercises Found"
                </div>
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search exercises..."
                    prop:value=move || criteria.get().search_text
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_criteria.update(|c| c.search_text = value);
                    }
                />
            </div>

            <div class="library-layout">
                <FilterPanel
                    criteria=criteria
                    on_toggle_muscle=move |group| set_criteria.update(|c| c.toggle_muscle(group))
                    on_toggle_equipment=move |item| set_criteria.update(|c| c.toggle_equipment(item))
                    on_set_difficulty=move |level| {
                        set_criteria.update(|c| c.difficulty_filter = level)
                    }
                    on_clear=move |_| set_criteria.update(|c| c.clear())
                />

                <div class="exercise-grid">
                    <For
                        each=move || filtered.get()
                        key=|record| record.id.clone()
                        children=move |record| {
                            view! { <ExerciseCard exercise=record on_select=open_exercise /> }
                        }
                    />
                    <Show when=move || filtered.get().is_empty()>
                        <p class="empty-results">"No exercises match the current filters."</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
