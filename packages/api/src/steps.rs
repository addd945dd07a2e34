//! Admin step creation: the transient form draft and the request body.

use serde::{Deserialize, Serialize};
use store::{GuideStep, ResourceLink};

use crate::client::Backend;
use crate::error::RequestError;

/// Body of `POST /api/steps`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewStep {
    pub key: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub resources: Vec<ResourceLink>,
    pub estimate_days: u32,
    pub cost_estimate: String,
    pub order: u32,
}

/// Raw text of the admin form, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepDraft {
    pub key: String,
    pub title: String,
    pub description: String,
    pub estimate_days: String,
    pub cost_estimate: String,
}

impl StepDraft {
    /// Only a key and a title are required; the backend validates the rest.
    pub fn is_submittable(&self) -> bool {
        !self.key.trim().is_empty() && !self.title.trim().is_empty()
    }

    /// Build the request body, placing the step after the `order` existing ones.
    pub fn to_new_step(&self, order: usize) -> Option<NewStep> {
        if !self.is_submittable() {
            return None;
        }
        Some(NewStep {
            key: self.key.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            content: String::new(),
            resources: Vec::new(),
            estimate_days: parse_estimate(&self.estimate_days),
            cost_estimate: self.cost_estimate.trim().to_string(),
            order: u32::try_from(order).unwrap_or(u32::MAX),
        })
    }
}

/// Lenient day count: anything that is not a non-negative number becomes 0,
/// fractions are truncated.
pub fn parse_estimate(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(days) if days.is_finite() && days >= 0.0 => days.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// All steps from the backend, in backend order. Failures yield an empty list.
pub async fn load_steps<B: Backend>(backend: &B) -> Vec<GuideStep> {
    match backend.list_steps().await {
        Ok(steps) => steps,
        Err(e) => {
            tracing::warn!("Failed to load steps: {e}");
            Vec::new()
        }
    }
}

/// Submit `draft` as the step following the `existing` ones.
///
/// Returns `Ok(None)` when the draft is incomplete and nothing was sent.
pub async fn submit_draft<B: Backend>(
    backend: &B,
    draft: &StepDraft,
    existing: usize,
) -> Result<Option<GuideStep>, RequestError> {
    let Some(step) = draft.to_new_step(existing) else {
        return Ok(None);
    };
    let created = backend.create_step(&step).await?;
    tracing::info!("Created step {}", created.key);
    Ok(Some(created))
}
