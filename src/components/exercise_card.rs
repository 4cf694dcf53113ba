use leptos::prelude::*;

use sportdev_core::{ExerciseRecord, Locale};

#[component]
pub fn ExerciseCard(
    exercise: ExerciseRecord,
    #[prop(into)] on_select: Callback<ExerciseRecord>,
) -> impl IntoView {
    let category = exercise.category.label(Locale::En);
    let difficulty = exercise.difficulty.label(Locale::En);
    let muscles: Vec<&'static str> = exercise
        .muscle_groups
        .iter()
        .take(2)
        .map(|group| group.label(Locale::En))
        .collect();
    let equipment: Vec<&'static str> = exercise
        .equipment
        .iter()
        .take(1)
        .map(|item| item.label(Locale::En))
        .collect();

    let name = exercise.name.clone();
    let image = exercise.media_url.clone();
    let record = exercise;

    view! {
        <div class="exercise-card" on:click=move |_| on_select.run(record.clone())>
            <div class="exercise-card-media">
                <img src=image alt=name.clone() />
                <span class="exercise-card-category">{category}</span>
            </div>
            <div class="exercise-card-body">
                <h3 class="exercise-card-name">{name}</h3>
                <div class="exercise-card-tags">
                    {muscles
                        .into_iter()
                        .map(|label| view! { <span class="tag">{label}</span> })
                        .collect_view()}
                    {equipment
                        .into_iter()
                        .map(|label| view! { <span class="tag">{label}</span> })
                        .collect_view()}
                    <span class="tag tag-difficulty">{difficulty}</span>
                </div>
            </div>
        </div>
    }
}
