use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Exam scores keyed by form field label, as sent to the plan service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamResultMap(BTreeMap<String, f64>);

impl ExamResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `raw` as a score and stores it under `field`, replacing any
    /// earlier value for the same field.
    pub fn insert_raw(&mut self, field: &str, raw: &str) -> Result<(), ValidationError> {
        let score = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
            .ok_or_else(|| ValidationError::InvalidScore {
                field: field.to_string(),
                value: raw.to_string(),
            })?;
        self.0.insert(field.to_string(), score);
        Ok(())
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw form entries in document order. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<(String, String)>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Overwrites the first entry named `name`, appending one if none exists.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.entries.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, slot)) => *slot = value.into(),
            None => self.entries.push((name.to_string(), value.into())),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormState {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut form = FormState::new();
        for (name, value) in iter {
            form.push(name, value);
        }
        form
    }
}
