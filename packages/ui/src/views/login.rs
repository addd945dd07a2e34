//! Login page view with email/password form.

use api::LOGIN_FAILED_MESSAGE;
use dioxus::prelude::*;

use crate::context::use_app;

/// Login form. Calls `on_success` once the session is established.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let ctx = use_app();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = ctx.login(email(), password()).await;
            loading.set(false);
            match result {
                Ok(()) => on_success.call(()),
                Err(e) => {
                    tracing::debug!("Login failed: {e}");
                    error.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-form",
            form {
                class: "card auth-form",
                onsubmit: handle_login,

                h2 { class: "page-title", "Login" }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }
        }
    }
}
