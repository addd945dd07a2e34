//! Login and sign-up pages. Both land on the checklist once the session is set.

use dioxus::prelude::*;
use ui::views::{LoginView, SignupView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.push(Route::Checklist {});
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        SignupView {
            on_success: move |_| {
                nav.push(Route::Checklist {});
            },
        }
    }
}
