pub mod checklist;
pub mod config;
pub mod guide;
pub mod kv;
pub mod models;
pub mod theme;

mod file_store;
mod memory;
pub use file_store::FileStore;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use checklist::{display_label, ChecklistState};
pub use config::ClientConfig;
pub use guide::{builtin_steps, faq_entries, search_steps};
pub use kv::{KeyValueStore, StorageError};
pub use models::{FaqEntry, GuideStep, ResourceLink, User};
pub use theme::Theme;
