use dioxus::prelude::*;
use store::faq_entries;

#[component]
pub fn FaqView() -> Element {
    let faqs = use_hook(faq_entries);

    rsx! {
        div {
            class: "page page-narrow",
            h2 { class: "page-title", "FAQ" }
            div {
                class: "faq-list",
                for (i, faq) in faqs.iter().enumerate() {
                    details {
                        key: "{i}",
                        class: "card faq-item",
                        summary { "{faq.question}" }
                        p { class: "muted", "{faq.answer}" }
                    }
                }
            }
        }
    }
}
