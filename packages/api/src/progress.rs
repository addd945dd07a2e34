//! # Checklist synchronisation
//!
//! Two rules keep the local [`ChecklistState`] and the backend copy in step:
//!
//! 1. **Hydrate**: when a user becomes active, [`fetch_remote`] pulls the
//!    stored progress and the caller merges it into local state with
//!    [`ChecklistState::merge`].
//! 2. **Push**: every local change made while a user is active is handed to
//!    a [`ProgressWriter`] and written with [`flush`].
//!
//! ## Ordered writes
//!
//! Rapid toggles could otherwise race: several saves in flight, and whichever
//! response lands last decides what the backend keeps. [`ProgressWriter`]
//! serialises writes instead. Each snapshot gets a monotonic revision; at most
//! one save is in flight; snapshots queued while a save is running are
//! coalesced so only the newest per user is sent next. The backend therefore
//! always ends on the latest local mutation.
//!
//! ## Gating
//!
//! [`SyncGate`] tracks which user is active and whose remote progress has been
//! merged. Pushes only start once the two match, so a fresh default checklist
//! never overwrites the backend copy. A fetch that completes after the active
//! user changed is discarded, and nothing is pushed while signed out.
//!
//! Failures are logged and dropped: the checklist keeps working locally.

use indexmap::IndexMap;
use store::ChecklistState;

use crate::client::Backend;

/// A checklist snapshot waiting to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub revision: u64,
    pub user_id: String,
    pub items: ChecklistState,
}

/// Serialises progress writes and coalesces queued snapshots per user.
#[derive(Debug, Default)]
pub struct ProgressWriter {
    last_revision: u64,
    acked_revision: u64,
    pending: IndexMap<String, Snapshot>,
    in_flight: Option<u64>,
}

impl ProgressWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `items` for `user_id`, replacing any older queued snapshot for
    /// the same user. Returns the revision assigned to it.
    pub fn enqueue(&mut self, user_id: &str, items: ChecklistState) -> u64 {
        self.last_revision += 1;
        let revision = self.last_revision;
        self.pending.insert(
            user_id.to_string(),
            Snapshot {
                revision,
                user_id: user_id.to_string(),
                items,
            },
        );
        revision
    }

    /// Take the next snapshot to send, unless a save is already in flight.
    pub fn begin(&mut self) -> Option<Snapshot> {
        if self.in_flight.is_some() {
            return None;
        }
        let (_, snapshot) = self.pending.shift_remove_index(0)?;
        self.in_flight = Some(snapshot.revision);
        Some(snapshot)
    }

    /// Record the outcome of the save started by [`begin`](Self::begin).
    pub fn finish(&mut self, revision: u64, saved: bool) {
        if self.in_flight == Some(revision) {
            self.in_flight = None;
        }
        if saved && revision > self.acked_revision {
            self.acked_revision = revision;
        }
    }

    /// Highest revision the backend has confirmed.
    pub fn acked_revision(&self) -> u64 {
        self.acked_revision
    }

    pub fn last_revision(&self) -> u64 {
        self.last_revision
    }

    /// Nothing queued and nothing in flight.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.in_flight.is_none()
    }
}

/// Decides when hydration results apply and when local changes are pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncGate {
    active: Option<String>,
    hydrated: Option<String>,
}

impl SyncGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the signed-in user. Returns `true` when a hydrating fetch
    /// should start for the new user.
    pub fn set_active(&mut self, user_id: Option<&str>) -> bool {
        if self.active.as_deref() == user_id {
            return false;
        }
        self.active = user_id.map(str::to_string);
        self.hydrated = None;
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Merge a fetch result for `user_id` into `local` and open the gate.
    ///
    /// Results for a user that is no longer active are dropped and `false` is
    /// returned. A failed or empty fetch (`None`) still opens the gate.
    pub fn apply_hydration(
        &mut self,
        user_id: &str,
        remote: Option<ChecklistState>,
        local: &mut ChecklistState,
    ) -> bool {
        if self.active.as_deref() != Some(user_id) {
            tracing::debug!("Discarding progress for inactive user {user_id}");
            return false;
        }
        if let Some(remote) = remote {
            local.merge(&remote);
        }
        self.hydrated = Some(user_id.to_string());
        true
    }

    /// The user local changes should be pushed for, if any.
    pub fn push_target(&self) -> Option<&str> {
        match (&self.active, &self.hydrated) {
            (Some(active), Some(hydrated)) if active == hydrated => Some(active),
            _ => None,
        }
    }

    /// Queue `items` on `writer` when the gate is open.
    pub fn push(&self, writer: &mut ProgressWriter, items: &ChecklistState) -> Option<u64> {
        let user_id = self.push_target()?;
        Some(writer.enqueue(user_id, items.clone()))
    }
}

/// Fetch and merge the active user's progress through `gate`.
pub async fn hydrate<B: Backend>(
    backend: &B,
    gate: &mut SyncGate,
    local: &mut ChecklistState,
) -> bool {
    let Some(user_id) = gate.active().map(str::to_string) else {
        return false;
    };
    let remote = fetch_remote(backend, &user_id).await;
    gate.apply_hydration(&user_id, remote, local)
}

/// Send queued snapshots one at a time until the writer is drained.
pub async fn flush<B: Backend>(backend: &B, writer: &mut ProgressWriter) {
    while let Some(snapshot) = writer.begin() {
        let saved = match backend.save_progress(&snapshot.user_id, &snapshot.items).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save progress (revision {}): {e}", snapshot.revision);
                false
            }
        };
        writer.finish(snapshot.revision, saved);
    }
}

/// Stored progress for `user_id`. Errors and empty responses yield `None`.
pub async fn fetch_remote<B: Backend>(backend: &B, user_id: &str) -> Option<ChecklistState> {
    match backend.fetch_progress(user_id).await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Failed to load progress: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBackend;
    use crate::session::Session;
    use store::{KeyValueStore, MemoryStore};

    fn state_with(keys: &[&str]) -> ChecklistState {
        let mut state = ChecklistState::default();
        for key in keys {
            state.set(key, true);
        }
        state
    }

    #[test]
    fn test_queued_snapshots_coalesce() {
        let mut writer = ProgressWriter::new();
        writer.enqueue("u1", state_with(&["passport"]));
        let first = writer.begin().unwrap();
        assert_eq!(first.revision, 1);

        // Queued while the first save is in flight.
        writer.enqueue("u1", state_with(&["passport", "arrival"]));
        let newest = writer.enqueue("u1", state_with(&["arrival"]));
        assert!(writer.begin().is_none());

        writer.finish(first.revision, true);
        let next = writer.begin().unwrap();
        assert_eq!(next.revision, newest);
        assert_eq!(next.items, state_with(&["arrival"]));
        writer.finish(next.revision, true);

        assert!(writer.is_idle());
        assert_eq!(writer.acked_revision(), newest);
    }

    #[test]
    fn test_users_are_queued_separately() {
        let mut writer = ProgressWriter::new();
        writer.enqueue("u1", state_with(&["passport"]));
        writer.enqueue("u2", state_with(&["arrival"]));

        let a = writer.begin().unwrap();
        writer.finish(a.revision, true);
        let b = writer.begin().unwrap();
        writer.finish(b.revision, true);

        assert_eq!((a.user_id.as_str(), b.user_id.as_str()), ("u1", "u2"));
        assert!(writer.begin().is_none());
    }

    #[test]
    fn test_stale_ack_never_regresses() {
        let mut writer = ProgressWriter::new();
        writer.finish(5, true);
        writer.finish(3, true);
        assert_eq!(writer.acked_revision(), 5);
        writer.finish(7, false);
        assert_eq!(writer.acked_revision(), 5);
    }

    #[tokio::test]
    async fn test_flush_sends_latest_state_last() {
        let backend = FakeBackend::new();
        let mut writer = ProgressWriter::new();
        let mut local = ChecklistState::default();

        for key in ["passport", "arrival", "passport", "work-permit"] {
            local.toggle(key);
            writer.enqueue("u1", local.clone());
        }
        flush(&backend, &mut writer).await;

        let saves = backend.saves();
        assert_eq!(saves.len(), 1);
        assert_eq!(backend.stored_progress("u1"), Some(local));
        assert!(writer.is_idle());
        assert_eq!(writer.acked_revision(), writer.last_revision());
    }

    #[tokio::test]
    async fn test_failed_save_is_dropped() {
        let backend = FakeBackend::new();
        backend.set_offline(true);
        let mut writer = ProgressWriter::new();
        writer.enqueue("u1", state_with(&["passport"]));

        flush(&backend, &mut writer).await;
        assert!(writer.is_idle());
        assert_eq!(writer.acked_revision(), 0);
        assert!(backend.stored_progress("u1").is_none());
    }

    #[tokio::test]
    async fn test_save_then_fetch_roundtrip_with_merge() {
        let backend = FakeBackend::new();
        let mut saved = ChecklistState::empty();
        saved.set("passport", true);
        saved.set("job-search", false);

        let mut writer = ProgressWriter::new();
        writer.enqueue("u1", saved.clone());
        flush(&backend, &mut writer).await;

        let remote = fetch_remote(&backend, "u1").await.unwrap();
        assert_eq!(remote, saved);

        let mut local = ChecklistState::default();
        local.set("arrival", true);
        local.set("job-search", true);
        local.merge(&remote);
        assert!(local.is_done("passport"));
        assert!(!local.is_done("job-search"));
        assert!(local.is_done("arrival"));
    }

    #[tokio::test]
    async fn test_fetch_failure_or_absence_is_none() {
        let backend = FakeBackend::new();
        assert!(fetch_remote(&backend, "nobody").await.is_none());
        backend.set_offline(true);
        assert!(fetch_remote(&backend, "nobody").await.is_none());
    }

    #[test]
    fn test_gate_holds_pushes_until_hydrated() {
        let mut gate = SyncGate::new();
        let mut writer = ProgressWriter::new();
        let local = state_with(&["passport"]);

        assert!(gate.push(&mut writer, &local).is_none());
        assert!(gate.set_active(Some("u1")));
        assert!(!gate.set_active(Some("u1")));
        assert!(gate.push(&mut writer, &local).is_none());
        assert!(writer.is_idle());
    }

    #[tokio::test]
    async fn test_hydrate_merges_then_opens_gate() {
        let backend = FakeBackend::new();
        let mut remote = ChecklistState::empty();
        remote.set("job-search", true);
        let mut seed = ProgressWriter::new();
        seed.enqueue("u1", remote);
        flush(&backend, &mut seed).await;

        let mut gate = SyncGate::new();
        let mut local = state_with(&["arrival"]);
        gate.set_active(Some("u1"));
        assert!(hydrate(&backend, &mut gate, &mut local).await);
        assert!(local.is_done("job-search"));
        assert!(local.is_done("arrival"));

        let mut writer = ProgressWriter::new();
        assert!(gate.push(&mut writer, &local).is_some());
        flush(&backend, &mut writer).await;
        assert_eq!(backend.stored_progress("u1"), Some(local));
    }

    #[tokio::test]
    async fn test_failed_fetch_still_opens_gate() {
        let backend = FakeBackend::new();
        backend.set_offline(true);
        let mut gate = SyncGate::new();
        let mut local = ChecklistState::default();
        gate.set_active(Some("u1"));

        assert!(hydrate(&backend, &mut gate, &mut local).await);
        assert_eq!(local, ChecklistState::default());
        assert_eq!(gate.push_target(), Some("u1"));
    }

    #[tokio::test]
    async fn test_fetch_for_previous_user_is_discarded() {
        let backend = FakeBackend::new();
        let mut seed = ProgressWriter::new();
        seed.enqueue("u1", state_with(&["passport"]));
        flush(&backend, &mut seed).await;

        let mut gate = SyncGate::new();
        let mut local = ChecklistState::default();
        gate.set_active(Some("u1"));
        let remote = fetch_remote(&backend, "u1").await;

        // User switched while the fetch was outstanding.
        assert!(gate.set_active(Some("u2")));
        assert!(!gate.apply_hydration("u1", remote, &mut local));
        assert!(!local.is_done("passport"));
        assert!(gate.push_target().is_none());

        assert!(hydrate(&backend, &mut gate, &mut local).await);
        assert_eq!(gate.push_target(), Some("u2"));
        assert!(!local.is_done("passport"));
    }

    #[tokio::test]
    async fn test_gate_closes_on_logout() {
        let backend = FakeBackend::new();
        let mut gate = SyncGate::new();
        let mut writer = ProgressWriter::new();
        let mut local = ChecklistState::default();

        gate.set_active(Some("u1"));
        hydrate(&backend, &mut gate, &mut local).await;
        local.toggle("passport");
        gate.push(&mut writer, &local);
        flush(&backend, &mut writer).await;

        assert!(!gate.set_active(None));
        local.toggle("arrival");
        assert!(gate.push(&mut writer, &local).is_none());
        flush(&backend, &mut writer).await;

        assert_eq!(backend.saves().len(), 1);
        assert!(!backend.stored_progress("u1").unwrap().is_done("arrival"));
        assert!(!hydrate(&backend, &mut gate, &mut local).await);
    }

    #[tokio::test]
    async fn test_logout_reverts_to_local_only() {
        let storage = MemoryStore::new();
        let backend = FakeBackend::new().with_account("mei@example.tw", "hunter22", "u-mei");
        let mut session = Session::restore(storage.clone(), "user");
        let mut writer = ProgressWriter::new();
        let mut local = ChecklistState::default();

        session
            .login(&backend, "mei@example.tw", "hunter22")
            .await
            .unwrap();
        local.toggle("passport");
        if let Some(user_id) = session.user_id() {
            writer.enqueue(user_id, local.clone());
        }
        flush(&backend, &mut writer).await;
        assert_eq!(backend.saves().len(), 1);

        session.logout();
        assert!(storage.get("user").is_none());

        local.toggle("arrival");
        if let Some(user_id) = session.user_id() {
            writer.enqueue(user_id, local.clone());
        }
        flush(&backend, &mut writer).await;

        assert!(local.is_done("arrival"));
        assert_eq!(backend.saves().len(), 1);
        assert!(!backend.stored_progress("u-mei").unwrap().is_done("arrival"));
    }
}
