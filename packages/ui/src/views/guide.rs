use dioxus::prelude::*;
use store::{builtin_steps, search_steps, GuideStep};

use crate::icons::FaMagnifyingGlass;
use crate::{Icon, StepCard};

/// Searchable list of the built-in guide steps.
#[component]
pub fn GuideView() -> Element {
    let steps = use_hook(builtin_steps);
    let mut query = use_signal(String::new);

    let filtered: Vec<GuideStep> = search_steps(&steps, &query()).into_iter().cloned().collect();

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "Search the guide...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
            }
            div {
                class: "step-list",
                if filtered.is_empty() {
                    p { class: "muted", "No steps match \u{201c}{query}\u{201d}." }
                }
                for step in filtered {
                    StepCard { key: "{step.key}", step: step.clone() }
                }
            }
        }
    }
}
