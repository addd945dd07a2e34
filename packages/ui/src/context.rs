//! Application context and the checklist synchronisation hooks.
//!
//! [`AppContext`] is provided once by [`AppProvider`] and read everywhere
//! with [`use_app`]. It bundles the session, the checklist, the theme and the
//! backend client behind explicit accessors; no state lives in globals.

use api::{HttpBackend, ProgressWriter, RequestError, Session, SyncGate};
use dioxus::prelude::*;
use futures_util::StreamExt;
use store::{ChecklistState, ClientConfig, Theme, User};

use crate::storage::{make_storage, PlatformStore};

/// Shared state of the running app. Cheap to copy; every field is a signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    session: Signal<Session<PlatformStore>>,
    checklist: Signal<ChecklistState>,
    theme: Signal<Theme>,
    backend: Signal<HttpBackend>,
    storage: Signal<PlatformStore>,
    config: Signal<ClientConfig>,
    /// Active and hydrated user; pushes wait until they match.
    sync: Signal<SyncGate>,
}

impl AppContext {
    fn new(config: ClientConfig, storage: PlatformStore) -> Self {
        let session = Session::restore(storage.clone(), &config.storage.user_key);
        let theme = Theme::load(&storage, &config.storage.theme_key);
        Self {
            session: Signal::new(session),
            checklist: Signal::new(ChecklistState::default()),
            theme: Signal::new(theme),
            backend: Signal::new(HttpBackend::from_config(&config)),
            storage: Signal::new(storage),
            config: Signal::new(config),
            sync: Signal::new(SyncGate::new()),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.read().user_id().map(str::to_string)
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.read().clone()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.read().clone()
    }

    /// Authenticate and make the user current. Prior state is kept on failure.
    pub async fn login(&self, email: String, password: String) -> Result<(), RequestError> {
        let backend = self.backend();
        let mut session = self.session.peek().clone();
        session.login(&backend, &email, &password).await?;
        let mut current = self.session;
        current.set(session);
        Ok(())
    }

    /// Register and make the new user current. Prior state is kept on failure.
    pub async fn signup(
        &self,
        email: String,
        password: String,
        name: String,
    ) -> Result<(), RequestError> {
        let backend = self.backend();
        let mut session = self.session.peek().clone();
        session.signup(&backend, &email, &password, &name).await?;
        let mut current = self.session;
        current.set(session);
        Ok(())
    }

    pub fn logout(&self) {
        let mut session = self.session;
        session.write().logout();
        let mut sync = self.sync;
        sync.write().set_active(None);
    }

    pub fn checklist(&self) -> ChecklistState {
        self.checklist.read().clone()
    }

    pub fn toggle_item(&self, key: &str) {
        let mut checklist = self.checklist;
        let done = checklist.write().toggle(key);
        tracing::debug!("Checklist item {key} -> {done}");
    }

    /// Track a newly created step on the checklist.
    pub fn ensure_checklist_key(&self, key: &str) {
        let mut checklist = self.checklist;
        if checklist.write().ensure_key(key) {
            tracing::debug!("Checklist now tracks {key}");
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    /// Flip light/dark and persist the choice.
    pub fn toggle_theme(&self) {
        let next = self.theme.peek().toggled();
        let key = self.config.peek().storage.theme_key.clone();
        if let Err(e) = next.save(&*self.storage.peek(), &key) {
            tracing::warn!("Failed to save theme: {e}");
        }
        let mut theme = self.theme;
        theme.set(next);
    }
}

/// Consume the [`AppContext`] from context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provider component that owns the application state.
/// Wrap the router with this component.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let ctx = use_context_provider(|| AppContext::new(api::resolve_config(), make_storage()));
    use_progress_sync(ctx);

    let theme_class = ctx.theme().class();

    rsx! {
        div {
            class: "app-root {theme_class}",
            {children}
        }
    }
}

/// Keep the checklist and the backend copy in step for the active user.
fn use_progress_sync(ctx: AppContext) {
    let mut sync = ctx.sync;
    let mut checklist = ctx.checklist;

    // Single writer: snapshots are saved one at a time, newest wins.
    let writer = use_coroutine(
        move |mut rx: UnboundedReceiver<(String, ChecklistState)>| async move {
            let backend = ctx.backend();
            let mut writer = ProgressWriter::new();
            while let Some((user_id, items)) = rx.next().await {
                writer.enqueue(&user_id, items);
                while let Ok(Some((user_id, items))) = rx.try_next() {
                    writer.enqueue(&user_id, items);
                }
                api::flush(&backend, &mut writer).await;
            }
        },
    );

    let active_user = use_memo(move || ctx.user_id());

    // Pull remote progress whenever a user becomes active.
    use_effect(move || {
        let user = active_user();
        if !sync.write().set_active(user.as_deref()) {
            return;
        }
        let Some(user_id) = user else {
            return;
        };
        spawn(async move {
            let backend = ctx.backend();
            let remote = api::fetch_remote(&backend, &user_id).await;
            sync.write().apply_hydration(&user_id, remote, &mut checklist.write());
        });
    });

    // Push every change once the active user's progress has been merged.
    use_effect(move || {
        let items = ctx.checklist();
        if let Some(user_id) = sync.read().push_target() {
            writer.send((user_id.to_string(), items));
        }
    });
}
