//! In-memory [`Backend`] used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use store::{ChecklistState, GuideStep, User};

use crate::client::Backend;
use crate::error::RequestError;
use crate::steps::NewStep;

#[derive(Clone, Default)]
pub struct FakeBackend {
    accounts: Arc<Mutex<HashMap<String, (String, User)>>>,
    progress: Arc<Mutex<HashMap<String, ChecklistState>>>,
    steps: Arc<Mutex<Vec<GuideStep>>>,
    saves: Arc<Mutex<Vec<(String, ChecklistState)>>>,
    offline: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account directly, bypassing signup.
    pub fn with_account(self, email: &str, password: &str, user_id: &str) -> Self {
        let user = User {
            user_id: user_id.to_string(),
            email: email.to_string(),
            name: None,
            token: Some(format!("token-{user_id}")),
        };
        self.accounts
            .lock()
            .unwrap()
            .insert(email.to_string(), (password.to_string(), user));
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Every successful save, in arrival order.
    pub fn saves(&self) -> Vec<(String, ChecklistState)> {
        self.saves.lock().unwrap().clone()
    }

    pub fn stored_progress(&self, user_id: &str) -> Option<ChecklistState> {
        self.progress.lock().unwrap().get(user_id).cloned()
    }

    fn begin(&self, path: &str) -> Result<(), RequestError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(RequestError::Status {
                url: path.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

impl Backend for FakeBackend {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, RequestError> {
        self.begin("/api/auth/login")?;
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some((stored, user)) if stored == password => Ok(user.clone()),
            _ => Err(RequestError::Status {
                url: "/api/auth/login".into(),
                status: 401,
            }),
        }
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, RequestError> {
        self.begin("/api/auth/signup")?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(RequestError::Status {
                url: "/api/auth/signup".into(),
                status: 409,
            });
        }
        let user = User {
            user_id: format!("u{}", accounts.len() + 1),
            email: email.to_string(),
            name: Some(name.to_string()),
            token: None,
        };
        accounts.insert(email.to_string(), (password.to_string(), user.clone()));
        Ok(user)
    }

    async fn fetch_progress(&self, user_id: &str) -> Result<Option<ChecklistState>, RequestError> {
        self.begin("/api/progress")?;
        Ok(self.stored_progress(user_id))
    }

    async fn save_progress(
        &self,
        user_id: &str,
        items: &ChecklistState,
    ) -> Result<(), RequestError> {
        self.begin("/api/progress")?;
        self.progress
            .lock()
            .unwrap()
            .insert(user_id.to_string(), items.clone());
        self.saves
            .lock()
            .unwrap()
            .push((user_id.to_string(), items.clone()));
        Ok(())
    }

    async fn list_steps(&self) -> Result<Vec<GuideStep>, RequestError> {
        self.begin("/api/steps")?;
        Ok(self.steps.lock().unwrap().clone())
    }

    async fn create_step(&self, step: &NewStep) -> Result<GuideStep, RequestError> {
        self.begin("/api/steps")?;
        let mut steps = self.steps.lock().unwrap();
        let created = GuideStep {
            id: Some(format!("step-{}", steps.len() + 1)),
            key: step.key.clone(),
            title: step.title.clone(),
            description: step.description.clone(),
            content: step.content.clone(),
            resources: step.resources.clone(),
            estimate_days: step.estimate_days,
            cost_estimate: step.cost_estimate.clone(),
            order: step.order,
        };
        steps.push(created.clone());
        Ok(created)
    }
}
