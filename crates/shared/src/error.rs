use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned by the plan service alongside a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The service-provided message, if it is present and non-blank.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("no results provided")]
    NoResults,
    #[error("score for '{field}' is not a number: {value:?}")]
    InvalidScore { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("response has no plan")]
    MissingPlan,
    #[error("plan is not a list")]
    PlanNotAList,
    #[error("plan day {index} is malformed: {reason}")]
    MalformedDay { index: usize, reason: String },
}
