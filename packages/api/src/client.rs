//! # Remote API client
//!
//! [`Backend`] lists the six operations the client performs against the REST
//! backend. [`HttpBackend`] implements them with `reqwest`; tests substitute an
//! in-memory fake.
//!
//! | Operation | Request | Result |
//! |-----------|---------|--------|
//! | [`authenticate`](Backend::authenticate) | `POST /api/auth/login` `{email, password}` | [`User`] |
//! | [`register`](Backend::register) | `POST /api/auth/signup` `{email, password, name}` | [`User`] |
//! | [`fetch_progress`](Backend::fetch_progress) | `GET /api/progress/{user_id}` | `{items?}` → `Option<ChecklistState>` |
//! | [`save_progress`](Backend::save_progress) | `POST /api/progress` `{user_id, items}` | acknowledgement (body ignored) |
//! | [`list_steps`](Backend::list_steps) | `GET /api/steps` | `Vec<GuideStep>` |
//! | [`create_step`](Backend::create_step) | `POST /api/steps` [`NewStep`] | created [`GuideStep`] |
//!
//! Every call issues exactly one request. Non-2xx statuses, transport
//! failures and undecodable bodies all become a [`RequestError`]; nothing is
//! retried.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{ChecklistState, ClientConfig, GuideStep, User};

use crate::error::RequestError;
use crate::steps::NewStep;

/// Operations offered by the guide backend.
pub trait Backend {
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, RequestError>>;
    fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> impl Future<Output = Result<User, RequestError>>;
    /// Stored progress for a user; `None` when nothing was saved yet.
    fn fetch_progress(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<ChecklistState>, RequestError>>;
    fn save_progress(
        &self,
        user_id: &str,
        items: &ChecklistState,
    ) -> impl Future<Output = Result<(), RequestError>>;
    fn list_steps(&self) -> impl Future<Output = Result<Vec<GuideStep>, RequestError>>;
    fn create_step(&self, step: &NewStep) -> impl Future<Output = Result<GuideStep, RequestError>>;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct SaveProgressRequest<'a> {
    user_id: &'a str,
    items: &'a ChecklistState,
}

#[derive(Deserialize)]
struct ProgressResponse {
    #[serde(default)]
    items: Option<ChecklistState>,
}

/// `reqwest`-backed [`Backend`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.backend.url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RequestError> {
        let response = request.send().await.map_err(|source| RequestError::Transport {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{url} returned {status}");
            return Err(RequestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, RequestError> {
        response.json::<T>().await.map_err(|e| RequestError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path);
        let response = self.send(&url, self.client.get(&url)).await?;
        Self::decode(&url, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let url = self.url(path);
        let response = self.send(&url, self.client.post(&url).json(body)).await?;
        Self::decode(&url, response).await
    }
}

impl Backend for HttpBackend {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, RequestError> {
        self.post_json("/api/auth/login", &LoginRequest { email, password })
            .await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, RequestError> {
        self.post_json(
            "/api/auth/signup",
            &SignupRequest {
                email,
                password,
                name,
            },
        )
        .await
    }

    async fn fetch_progress(&self, user_id: &str) -> Result<Option<ChecklistState>, RequestError> {
        let body: ProgressResponse = self.get_json(&format!("/api/progress/{user_id}")).await?;
        Ok(body.items)
    }

    async fn save_progress(
        &self,
        user_id: &str,
        items: &ChecklistState,
    ) -> Result<(), RequestError> {
        let url = self.url("/api/progress");
        let request = self
            .client
            .post(&url)
            .json(&SaveProgressRequest { user_id, items });
        self.send(&url, request).await?;
        Ok(())
    }

    async fn list_steps(&self) -> Result<Vec<GuideStep>, RequestError> {
        self.get_json("/api/steps").await
    }

    async fn create_step(&self, step: &NewStep) -> Result<GuideStep, RequestError> {
        self.post_json("/api/steps", step).await
    }
}
