//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{make_storage, PlatformStore};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod context;
pub use context::{use_app, AppContext, AppProvider};

mod download;
pub use download::save_text_file;

mod navbar;
pub use navbar::{Footer, Navbar};

mod step_card;
pub use step_card::StepCard;
