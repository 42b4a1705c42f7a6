//! Pure `(state, event) -> step` transitions.

use super::events::{user_message, ControllerState, Effect, Event, Outcome, SubmissionState};
use crate::error::SubmitError;

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub next: ControllerState,
    pub effects: Vec<Effect>,
}

/// Returns `None` when the event does not apply in the current state.
pub fn transition(current: &ControllerState, event: Event) -> Option<Step> {
    match (current.state, event) {
        (SubmissionState::Idle, Event::Trigger) => Some(Step {
            next: ControllerState {
                state: SubmissionState::Submitting,
                last_error: None,
            },
            effects: vec![Effect::DisableTrigger, Effect::ShowLoading, Effect::CloseModal],
        }),
        (SubmissionState::Submitting, Event::PlanReady(instructions)) => Some(Step {
            next: ControllerState {
                state: SubmissionState::Done(Outcome::Success),
                last_error: None,
            },
            effects: vec![Effect::Commit(instructions)],
        }),
        (SubmissionState::Submitting, Event::Failed(error)) => Some(Step {
            effects: vec![Effect::ShowError(user_message(&error))],
            next: ControllerState {
                state: SubmissionState::Done(Outcome::Failure),
                last_error: Some(error),
            },
        }),
        (
            SubmissionState::Submitting | SubmissionState::Done(Outcome::Success),
            Event::Interrupted(reason),
        ) => {
            let error = SubmitError::Rendering(reason);
            Some(Step {
                effects: vec![Effect::ShowError(user_message(&error))],
                next: ControllerState {
                    state: SubmissionState::Done(Outcome::Failure),
                    last_error: Some(error),
                },
            })
        }
        // Settling straight from Submitting happens when response handling
        // was cut short by a panic or by dropping the in-flight future.
        (SubmissionState::Done(_) | SubmissionState::Submitting, Event::Settle) => Some(Step {
            next: ControllerState {
                state: SubmissionState::Idle,
                last_error: current.last_error.clone(),
            },
            effects: vec![Effect::RestoreTrigger],
        }),
        _ => None,
    }
}
