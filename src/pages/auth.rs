use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use sportdev_core::services::AccountService;

use crate::context::use_app;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_sign_up, set_is_sign_up) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let account = ctx.services.with_value(|s| s.account.clone());
        let email = email.get_untracked();
        let password = password.get_untracked();
        let signing_up = is_sign_up.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_notice.set(None);
        spawn_local(async move {
            if signing_up {
                match account.sign_up(&email, &password).await {
                    // A confirmed signup carries a session; the watch flips
                    // the shell over on its own.
                    Ok(Some(_)) => {}
                    Ok(None) => {
                        set_notice.set(Some("Check your email for the login link!".to_string()));
                    }
                    Err(fault) => set_error_message.set(Some(String::from(fault))),
                }
            } else if let Err(fault) = account.sign_in(&email, &password).await {
                set_error_message.set(Some(String::from(fault)));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">
                    {move || if is_sign_up.get() { "Crear Cuenta" } else { "Bienvenido de nuevo" }}
                </h2>
                <p class="auth-subtitle">
                    {move || {
                        if is_sign_up.get() {
                            "Únete a la comunidad de élite"
                        } else {
                            "Inicia sesión para ver tus rutinas"
                        }
                    }}
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="email"
                        class="input"
                        placeholder="Correo electrónico"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="input"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    {move || {
                        error_message
                            .get()
                            .map(|message| view! { <div class="auth-error">{message}</div> })
                    }}
                    {move || {
                        notice.get().map(|message| view! { <div class="auth-notice">{message}</div> })
                    }}

                    <button
                        type="submit"
                        class="btn btn-primary auth-submit"
                        disabled=move || is_loading.get()
                    >
                        {move || {
                            if is_loading.get() {
                                "Procesando..."
                            } else if is_sign_up.get() {
                                "Registrarse"
                            } else {
                                "Iniciar Sesión"
                            }
                        }}
                    </button>
                </form>

                <button
                    class="auth-toggle"
                    on:click=move |_| set_is_sign_up.update(|value| *value = !*value)
                >
                    {move || {
                        if is_sign_up.get() {
                            "¿Ya tienes cuenta? Inicia Sesión"
                        } else {
                            "¿No tienes cuenta? Regístrate"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
