//! Submission lifecycle states, events and the effects they request.

use shared::error::ValidationError;

use crate::{
    error::SubmitError,
    view::{RenderInstruction, FORMAT_ERROR_MESSAGE, NO_RESULTS_MESSAGE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Done(Outcome),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    pub state: SubmissionState,
    pub last_error: Option<SubmitError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Trigger,
    PlanReady(Vec<RenderInstruction>),
    Failed(SubmitError),
    /// Response handling unwound before the page was fully drawn.
    Interrupted(String),
    Settle,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::PlanReady(_) => "plan_ready",
            Self::Failed(_) => "failed",
            Self::Interrupted(_) => "interrupted",
            Self::Settle => "settle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DisableTrigger,
    ShowLoading,
    CloseModal,
    Commit(Vec<RenderInstruction>),
    ShowError(String),
    RestoreTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Another submission was in flight; nothing happened.
    Dropped,
    Completed(Outcome),
}

/// Text shown in the output area for a failed cycle.
pub fn user_message(error: &SubmitError) -> String {
    match error {
        SubmitError::Validation(ValidationError::NoResults) => NO_RESULTS_MESSAGE.to_string(),
        SubmitError::Validation(ValidationError::InvalidScore { field, value }) => {
            format!("'{field}' için girilen \"{value}\" geçerli bir sayı değil.")
        }
        SubmitError::Format(_) => FORMAT_ERROR_MESSAGE.to_string(),
        other => format!("Bir hata oluştu: {other}"),
    }
}
