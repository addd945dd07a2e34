//! Registration page view with name/email/password form.

use api::SIGNUP_FAILED_MESSAGE;
use dioxus::prelude::*;

use crate::context::use_app;

/// Signup form. Calls `on_success` once the new session is established.
#[component]
pub fn SignupView(on_success: EventHandler<()>) -> Element {
    let ctx = use_app();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = ctx.signup(email(), password(), name()).await;
            loading.set(false);
            match result {
                Ok(()) => on_success.call(()),
                Err(e) => {
                    tracing::debug!("Signup failed: {e}");
                    error.set(Some(SIGNUP_FAILED_MESSAGE.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-form",
            form {
                class: "card auth-form",
                onsubmit: handle_signup,

                h2 { class: "page-title", "Create account" }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

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
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }
        }
    }
}
