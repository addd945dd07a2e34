//! # Checklist state
//!
//! [`ChecklistState`] maps a step key to its done flag. Keys keep their
//! insertion order, which is the order the checklist is rendered and exported
//! in. A key that is not present reads as "not done".
//!
//! The state serialises as a plain JSON object (`{"passport": true, ...}`),
//! matching the `items` field of the progress endpoints.
//!
//! ## Merge rule
//!
//! [`ChecklistState::merge`] applies a partial remote snapshot on top of the
//! local one: every key defined remotely overrides the local value (and is
//! appended if unknown locally), every other key keeps its local value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Step keys of the built-in guide, in display order.
pub const DEFAULT_KEYS: [&str; 6] = [
    "passport",
    "job-search",
    "work-permit",
    "arrival",
    "taxes-insurance",
    "mandarin-culture",
];

/// Header line of the exported checklist document.
pub const EXPORT_HEADER: &str = "Work in Taiwan Checklist";

/// Filename offered for the exported checklist.
pub const EXPORT_FILENAME: &str = "work-in-taiwan-checklist.txt";

/// Ordered mapping from step key to completion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    items: IndexMap<String, bool>,
}

impl Default for ChecklistState {
    /// The fixed key set, all not done.
    fn default() -> Self {
        Self {
            items: DEFAULT_KEYS.iter().map(|k| (k.to_string(), false)).collect(),
        }
    }
}

impl ChecklistState {
    /// A state with no keys at all.
    pub fn empty() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Whether `key` is marked done. Absent keys are not done.
    pub fn is_done(&self, key: &str) -> bool {
        self.items.get(key).copied().unwrap_or(false)
    }

    /// Set the flag for `key`, appending the key if it is new.
    pub fn set(&mut self, key: &str, done: bool) {
        match self.items.get_mut(key) {
            Some(flag) => *flag = done,
            None => {
                self.items.insert(key.to_string(), done);
            }
        }
    }

    /// Flip the flag for `key` and return the new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let done = !self.is_done(key);
        self.set(key, done);
        done
    }

    /// Merge a remote snapshot: remote keys override, others keep their value.
    pub fn merge(&mut self, remote: &ChecklistState) {
        for (key, done) in &remote.items {
            self.set(key, *done);
        }
    }

    /// Append `key` as not done unless it is already tracked.
    /// Returns whether the key was added.
    pub fn ensure_key(&mut self, key: &str) -> bool {
        if key.is_empty() || self.items.contains_key(key) {
            return false;
        }
        self.items.insert(key.to_string(), false);
        true
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// `(key, done)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of keys marked done.
    pub fn completed(&self) -> usize {
        self.items.values().filter(|done| **done).count()
    }

    /// Plain-text rendering offered as a file download.
    ///
    /// ```text
    /// Work in Taiwan Checklist
    ///
    /// [x] passport
    /// [ ] job-search
    /// ```
    pub fn export_text(&self) -> String {
        let lines: Vec<String> = self
            .iter()
            .map(|(key, done)| format!("{} {key}", if done { "[x]" } else { "[ ]" }))
            .collect();
        format!("{EXPORT_HEADER}\n\n{}", lines.join("\n"))
    }
}

/// Human label for a step key: the first `-` becomes a space and every word
/// is capitalised (`"taxes-insurance"` → `"Taxes Insurance"`).
pub fn display_label(key: &str) -> String {
    key.replacen('-', " ", 1)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
