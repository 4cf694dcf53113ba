//! Floating AI coach chat widget.
//!
//! The turn log and the in-flight guard live in the core chat session; the
//! signals here mirror them for rendering. A send that the session rejects
//! (blank input, request already outstanding) changes nothing.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use sportdev_core::services::CoachingService;
use sportdev_core::Role;

use crate::context::use_app;

#[component]
pub fn AiChat() -> impl IntoView {
    let ctx = use_app();
    let (is_open, set_is_open) = signal(false);
    let (turns, set_turns) = signal(ctx.services.with_value(|s| s.chat.turns()));
    let (input_value, set_input_value) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let send = move || {
        let (chat, coach) = ctx.services.with_value(|s| (s.chat.clone(), s.coach.clone()));
        let Some(request) = chat.begin(&input_value.get_untracked()) else {
            return;
        };
        set_input_value.set(String::new());
        set_turns.set(chat.turns());
        set_is_loading.set(true);
        spawn_local(async move {
            let outcome = coach.chat(&request.message, &request.history).await;
            chat.resolve(outcome);
            set_turns.set(chat.turns());
            set_is_loading.set(false);
        });
    };

    view! {
        <button
            class="chat-fab"
            on:click=move |_| set_is_open.update(|open| *open = !*open)
        >
            {move || if is_open.get() { "×" } else { "AI" }}
        </button>

        <Show when=move || is_open.get()>
            <div class="chat-panel">
                <div class="chat-header">"SportDev AI Coach"</div>

                <div class="chat-messages">
                    <For
                        each={move || turns.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, _)| *index
                        children=move |(_, turn)| {
                            let bubble = match turn.role {
                                Role::User => "chat-bubble chat-user",
                                Role::Model => "chat-bubble chat-model",
                            };
                            view! { <div class=bubble>{turn.text}</div> }
                        }
                    />
                    <Show when=move || is_loading.get()>
                        <div class="chat-bubble chat-model chat-typing">"..."</div>
                    </Show>
                </div>

                <div class="chat-input-row">
                    <input
                        type="text"
                        class="chat-input"
                        placeholder="Ask anything..."
                        prop:value=move || input_value.get()
                        on:input=move |ev| set_input_value.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button
                        class="chat-send"
                        on:click=move |_| send()
                        disabled=move || is_loading.get()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
