use dioxus::prelude::*;

use crate::icons::{FaBell, FaBookOpen, FaClipboardList};
use crate::Icon;

#[component]
fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-content",
                h1 { class: "hero-title", "Plan your journey to work in Taiwan" }
                p {
                    class: "hero-subtitle",
                    "A step-by-step companion with checklists, timelines, and resources to go from passport to your first day on the job."
                }
                div {
                    class: "hero-actions",
                    Link { class: "btn btn-light", to: "/guide", "Explore the Guide" }
                    Link { class: "btn btn-ghost", to: "/checklist", "Open Checklist" }
                }
            }
        }
    }
}

/// Landing page: hero banner and feature cards.
#[component]
pub fn LandingView() -> Element {
    rsx! {
        div {
            class: "page page-landing",
            Hero {}
            section {
                class: "feature-grid",
                div {
                    class: "card feature-card",
                    Icon { icon: FaBookOpen, width: 24, height: 24 }
                    h3 { "Structured Steps" }
                    p {
                        class: "muted",
                        "Clear phases: passport, job search, permits, arrival, and life admin."
                    }
                }
                div {
                    class: "card feature-card",
                    Icon { icon: FaClipboardList, width: 24, height: 24 }
                    h3 { "Interactive Checklist" }
                    p { class: "muted", "Track progress and pick up where you left off." }
                }
                div {
                    class: "card feature-card",
                    Icon { icon: FaBell, width: 24, height: 24 }
                    h3 { "Smart Reminders" }
                    p { class: "muted", "Never miss a deadline with lightweight reminders." }
                }
            }
        }
    }
}
