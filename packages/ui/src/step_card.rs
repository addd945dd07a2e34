use dioxus::prelude::*;
use store::GuideStep;

/// Collapsible card for one guide step. Expanding it reveals the resources.
#[component]
pub fn StepCard(step: GuideStep) -> Element {
    let mut open = use_signal(|| false);
    let summary = step.estimate_summary();

    rsx! {
        div {
            class: "card step-card",
            button {
                class: "step-card-header",
                onclick: move |_| open.set(!open()),
                div {
                    h3 { class: "step-card-title", "{step.title}" }
                    p { class: "muted", "{step.description}" }
                }
                span { class: "step-card-estimate", "{summary}" }
            }
            if open() {
                div {
                    class: "step-card-body",
                    if !step.content.is_empty() {
                        p { "{step.content}" }
                    }
                    ul {
                        for resource in step.resources.iter() {
                            li {
                                key: "{resource.url}-{resource.label}",
                                a {
                                    href: "{resource.url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    "{resource.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
