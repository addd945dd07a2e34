//! # API crate: client side of the Work in Taiwan backend
//!
//! Everything the frontends need to talk to the REST backend and to keep the
//! session and checklist in sync with it. No UI code lives here, so every
//! flow can be exercised against an in-memory backend in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Backend`] trait and the `reqwest` implementation [`HttpBackend`] |
//! | [`config`] | Layered [`ClientConfig`](store::ClientConfig) resolution (file, `.env`, build-time env) |
//! | [`error`] | [`RequestError`], the only error kind the client surfaces |
//! | [`session`] | [`Session`]: current user, persisted to durable storage |
//! | [`progress`] | Checklist hydration and ordered, coalesced progress writes |
//! | [`steps`] | Admin step drafts and creation |

pub mod client;
pub mod config;
pub mod error;
pub mod progress;
pub mod session;
pub mod steps;

#[cfg(test)]
mod fake;

pub use client::{Backend, HttpBackend};
pub use config::resolve_config;
pub use error::RequestError;
pub use progress::{fetch_remote, flush, hydrate, ProgressWriter, Snapshot, SyncGate};
pub use session::{Session, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
pub use steps::{load_steps, submit_draft, NewStep, StepDraft};

pub use store::{ChecklistState, GuideStep, User};
