use dioxus::prelude::*;

use views::{Admin, Checklist, Faq, Guide, Landing, Login, Shell, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/guide")]
        Guide {},
        #[route("/checklist")]
        Checklist {},
        #[route("/faq")]
        Faq {},
        #[route("/admin")]
        Admin {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Title { "Work in Taiwan Guide" }

        ui::AppProvider {
            Router::<Route> {}
        }
    }
}
