use dioxus::prelude::*;

use crate::context::use_app;
use crate::icons::{FaBars, FaMoon, FaRightToBracket, FaSun, FaUserPlus};
use crate::Icon;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/guide", "Guide"),
    ("/checklist", "Checklist"),
    ("/faq", "FAQ"),
    ("/admin", "Admin"),
];

/// Fixed top bar: page links, theme toggle and session actions.
#[component]
pub fn Navbar() -> Element {
    let ctx = use_app();
    let mut menu_open = use_signal(|| false);
    let dark = ctx.theme().is_dark();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                div {
                    class: "navbar-brand",
                    button {
                        class: "navbar-menu-toggle",
                        aria_label: "Menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                    Link { class: "navbar-title", to: "/", "Work in Taiwan Guide" }
                }

                div {
                    class: "navbar-links",
                    for (to, label) in NAV_LINKS {
                        Link { key: "{to}", class: "navbar-link", to: to, "{label}" }
                    }
                }

                div {
                    class: "navbar-actions",
                    button {
                        class: "icon-button",
                        aria_label: "Toggle theme",
                        onclick: move |_| ctx.toggle_theme(),
                        if dark {
                            Icon { icon: FaSun, width: 18, height: 18 }
                        } else {
                            Icon { icon: FaMoon, width: 18, height: 18 }
                        }
                    }
                    if ctx.user().is_some() {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| ctx.logout(),
                            "Logout"
                        }
                    } else {
                        Link {
                            class: "btn btn-outline",
                            to: "/login",
                            Icon { icon: FaRightToBracket, width: 14, height: 14 }
                            " Login"
                        }
                        Link {
                            class: "btn btn-primary",
                            to: "/signup",
                            Icon { icon: FaUserPlus, width: 14, height: 14 }
                            " Sign up"
                        }
                    }
                }
            }

            if menu_open() {
                div {
                    class: "navbar-mobile",
                    for (to, label) in NAV_LINKS {
                        Link {
                            key: "{to}",
                            class: "navbar-mobile-link",
                            to: to,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            "Resources link to official agencies: MOL, BOCA, NIA. This is a community guide."
        }
    }
}
