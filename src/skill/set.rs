use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Separator used when a skill assignment is stored as a single string.
pub const SKILL_SEPARATOR: &str = ", ";

/// An ordered collection of selected skill values.
///
/// Single-skill mode is simply the one-element case. Order is selection order,
/// and duplicates are allowed when values are appended as custom entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    values: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Recovers a selection from its stored form. An empty string yields an empty set.
    pub fn split(stored: &str) -> Self {
        if stored.is_empty() {
            return Self::new();
        }
        Self::from_values(stored.split(SKILL_SEPARATOR))
    }

    /// The stored form of the selection, or `None` when nothing is selected.
    pub fn join(&self) -> Option<String> {
        (!self.values.is_empty()).then(|| self.values.iter().join(SKILL_SEPARATOR))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Appends without deduplicating.
    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Removes `value` if present (every occurrence), otherwise appends it.
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.contains(value) {
            self.values.retain(|v| v != value);
            false
        } else {
            self.values.push(value.to_string());
            true
        }
    }

    /// Replaces the whole selection with a single value.
    pub fn replace(&mut self, value: impl Into<String>) {
        self.values.clear();
        self.values.push(value.into());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
