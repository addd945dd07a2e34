//! # Domain models for the relocation guide
//!
//! Plain data types shared by every crate in the workspace. They are
//! `Serialize + Deserialize` so the same structs travel over the REST API,
//! into durable client storage, and into the UI.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | Account returned by login/signup: `user_id`, email, optional name and token. |
//! | [`GuideStep`] | One guide phase: `key`, title, text, resources, estimate and `order`. |
//! | [`ResourceLink`] | A labelled URL attached to a step (ministry site, job board, ...). |
//! | [`FaqEntry`] | A question and its answer on the FAQ page. |
//!
//! Field names follow the backend's snake_case JSON. The backend may send the
//! user identifier as either `user_id` or `id`; both are accepted.
//!
//! Decoding is lenient about backend rows: identifiers may be strings or
//! numbers, `null` text fields read as empty and day counts may carry a
//! fraction (truncated).

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the login and signup endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier, used to key stored progress.
    #[serde(alias = "id", deserialize_with = "lenient::identifier")]
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Opaque session credential; never inspected client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// A labelled link to an external resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// One step of the relocation guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideStep {
    /// Backend-assigned identifier. Built-in steps have none.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_identifier"
    )]
    pub id: Option<String>,
    pub key: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub resources: Vec<ResourceLink>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub estimate_days: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cost_estimate: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub order: u32,
}

impl GuideStep {
    /// Whether the title or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Short "Est. N days • cost" summary shown on step cards.
    pub fn estimate_summary(&self) -> String {
        format!("Est. {} days \u{2022} {}", self.estimate_days, self.cost_estimate)
    }
}

/// A question and answer shown on the FAQ page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Field decoders tolerant of the shapes real backend rows arrive in.
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Int(i64),
        Float(f64),
        Text(String),
    }

    impl Scalar {
        fn into_identifier(self) -> String {
            match self {
                Scalar::Int(n) => n.to_string(),
                Scalar::Float(f) => f.to_string(),
                Scalar::Text(s) => s,
            }
        }

        fn into_count(self) -> u32 {
            let value = match self {
                Scalar::Int(n) => return u32::try_from(n.max(0)).unwrap_or(u32::MAX),
                Scalar::Float(f) => f,
                Scalar::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            };
            if value.is_finite() && value >= 0.0 {
                value.min(u32::MAX as f64) as u32
            } else {
                0
            }
        }
    }

    pub fn identifier<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Scalar::deserialize(d).map(Scalar::into_identifier)
    }

    pub fn optional_identifier<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<Scalar>::deserialize(d)?.map(Scalar::into_identifier))
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }

    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        Ok(Option::<Scalar>::deserialize(d)?.map_or(0, Scalar::into_count))
    }
}
