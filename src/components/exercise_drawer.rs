//! Detail drawer for the selected exercise, including the AI form check.
//!
//! The drawer mirrors the core selection session: the session owns the
//! selected record, the in-flight flag, and the last analysis; the signals
//! here only exist to re-render when those change.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use sportdev_core::services::CoachingService;
use sportdev_core::{EmphasisRole, Fault, Locale, MediaKind};

use crate::context::use_app;

#[component]
pub fn ExerciseDrawer() -> impl IntoView {
    let ctx = use_app();
    let (analyzing, set_analyzing) = signal(false);
    let (analysis, set_analysis) = signal(None::<String>);

    // Re-sync the mirrors whenever the inspected exercise changes.
    Effect::new(move |_| {
        let _ = ctx.selected.get();
        set_analyzing.set(ctx.services.with_value(|s| s.selection.is_analyzing()));
        set_analysis.set(ctx.services.with_value(|s| s.selection.last_analysis()));
    });

    let close = move |_| {
        ctx.services.with_value(|s| s.selection.clear());
        ctx.selected.set(None);
    };

    let run_analysis = move |ev: web_sys::Event, kind: MediaKind| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        let (selection, coach) = ctx
            .services
            .with_value(|s| (s.selection.clone(), s.coach.clone()));
        // The session rejects uploads while a prior analysis is pending.
        let Some(prompt) = selection.begin_analysis() else {
            return;
        };
        set_analyzing.set(true);
        set_analysis.set(None);

        let mime = file.type_();
        spawn_local(async move {
            let outcome = match read_file_bytes(file).await {
                Ok(bytes) => {
                    let mime = if mime.is_empty() {
                        kind.fallback_mime().to_string()
                    } else {
                        mime
                    };
                    coach.analyze_media(&bytes, &mime, &prompt).await
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to read file: {e}").into());
                    Err(Fault::Invalid(e))
                }
            };
            selection.finish_analysis(outcome);
            set_analysis.set(selection.last_analysis());
            set_analyzing.set(false);
        });
    };

    view! {
        {move || {
            ctx.selected
                .get()
                .map(|exercise| {
                    let category = exercise.category.label(Locale::En);
                    let difficulty = exercise.difficulty.label(Locale::En);
                    let emphasis = exercise.muscle_emphasis.clone();
                    let instructions = exercise.instructions.clone();
                    view! {
                        <div class="drawer-backdrop" on:click=close></div>
                        <div class="drawer">
                            <button class="drawer-close" on:click=close>"×"</button>
                            <div class="drawer-media">
                                <img src=exercise.media_url.clone() alt=exercise.name.clone() />
                            </div>
                            <div class="drawer-body">
                                <h2 class="drawer-title">{exercise.name.clone()}</h2>
                                <div class="drawer-chips">
                                    <span class="chip chip-primary">{category}</span>
                                    <span class="chip">{difficulty}</span>
                                </div>
                                <p class="drawer-description">{exercise.description.clone()}</p>

                                <section class="drawer-section">
                                    <h3 class="drawer-heading">"Músculos Trabajados"</h3>
                                    {emphasis
                                        .into_iter()
                                        .map(|entry| {
                                            let width = format!("width: {}%", entry.percentage);
                                            let role_class = match entry.role {
                                                EmphasisRole::Primary => "meter-role meter-role-primary",
                                                EmphasisRole::Secondary => "meter-role",
                                            };
                                            view! {
                                                <div class="muscle-meter">
                                                    <div class="meter-row">
                                                        <span class="meter-name">{entry.muscle.clone()}</span>
                                                        <span class=role_class>
                                                            {entry.role.label(Locale::Es)}
                                                        </span>
                                                    </div>
                                                    <div class="meter-track">
                                                        <div class="meter-fill" style=width></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </section>

                                <section class="drawer-section">
                                    <h3 class="drawer-heading">"Instrucciones"</h3>
                                    <ol class="instruction-list">
                                        {instructions
                                            .into_iter()
                                            .map(|step| view! { <li>{step}</li> })
                                            .collect_view()}
                                    </ol>
                                </section>

                                <section class="drawer-section analysis-section">
                                    <h3 class="drawer-heading">"Análisis de Forma con IA"</h3>
                                    <p class="analysis-hint">
                                        "Sube una foto o video realizando este ejercicio para recibir retroalimentación personalizada de SportDev IA."
                                    </p>
                                    <div class="analysis-uploads">
                                        <label class="upload-tile">
                                            <span>"Análisis de Foto"</span>
                                            <input
                                                type="file"
                                                accept="image/*"
                                                style="display: none"
                                                on:change=move |ev| run_analysis(ev, MediaKind::Image)
                                                disabled=move || analyzing.get()
                                            />
                                        </label>
                                        <label class="upload-tile">
                                            <span>"Análisis de Video"</span>
                                            <input
                                                type="file"
                                                accept="video/*"
                                                style="display: none"
                                                on:change=move |ev| run_analysis(ev, MediaKind::Video)
                                                disabled=move || analyzing.get()
                                            />
                                        </label>
                                    </div>

                                    <Show when=move || analyzing.get()>
                                        <div class="loading-spinner">
                                            <div class="spinner"></div>
                                            <span>"La IA está pensando..."</span>
                                        </div>
                                    </Show>

                                    {move || {
                                        analysis
                                            .get()
                                            .map(|verdict| {
                                                view! {
                                                    <div class="analysis-verdict">
                                                        <h4>"Veredicto del Entrenador"</h4>
                                                        <p>{verdict}</p>
                                                    </div>
                                                }
                                            })
                                    }}
                                </section>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

/// Read a File into raw bytes.
async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    Ok(Uint8Array::new(&array_buffer).to_vec())
}

/// Helper to get a typed event target.
fn event_target<T: wasm_bindgen::JsCast>(ev: &web_sys::Event) -> T {
    ev.target().unwrap().dyn_into::<T>().unwrap()
}
