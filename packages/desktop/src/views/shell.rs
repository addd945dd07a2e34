use dioxus::prelude::*;

use crate::Route;

/// Page chrome shared by every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        ui::Navbar {}
        main {
            Outlet::<Route> {}
        }
        ui::Footer {}
    }
}
