use dioxus::prelude::*;
use store::checklist::EXPORT_FILENAME;
use store::display_label;

use crate::context::use_app;
use crate::download::save_text_file;
use crate::icons::FaFileArrowDown;
use crate::Icon;

/// Interactive checklist. Synced to the backend only while signed in.
#[component]
pub fn ChecklistView() -> Element {
    let ctx = use_app();
    let state = ctx.checklist();
    let signed_in = ctx.user().is_some();

    let items: Vec<(String, String, bool)> = state
        .iter()
        .map(|(k, v)| (k.to_string(), display_label(k), v))
        .collect();
    let completed = state.completed();
    let total = state.len();

    let handle_export = move |_: MouseEvent| {
        let text = ctx.checklist().export_text();
        if let Err(e) = save_text_file(EXPORT_FILENAME, &text) {
            tracing::error!("Failed to export checklist: {e}");
        }
    };

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "page-header",
                h2 { class: "page-title", "Interactive Checklist" }
                button {
                    class: "btn btn-outline",
                    onclick: handle_export,
                    Icon { icon: FaFileArrowDown, width: 14, height: 14 }
                    " Export"
                }
            }
            p { class: "muted checklist-progress", "{completed} of {total} complete" }
            div {
                class: "checklist",
                for (key, text, done) in items {
                    label {
                        key: "{key}",
                        class: "card checklist-item",
                        input {
                            r#type: "checkbox",
                            checked: done,
                            onchange: {
                                let key = key.clone();
                                move |_| ctx.toggle_item(&key)
                            },
                        }
                        span { "{text}" }
                    }
                }
            }
            if !signed_in {
                p {
                    class: "muted checklist-hint",
                    "Login to auto-save your progress across devices."
                }
            }
        }
    }
}
