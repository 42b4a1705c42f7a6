//! Failure classification for one submission cycle.

use shared::error::{FormatError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Http,
    Transport,
    Format,
    Rendering,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("plan could not be displayed: {0}")]
    Rendering(String),
}

impl SubmitError {
    /// Builds an HTTP failure, preferring the service's own message over a
    /// status-derived one.
    pub fn http(status: u16, service_message: Option<&str>) -> Self {
        let message = match service_message {
            Some(message) => message.to_string(),
            None => format!("HTTP error! Status: {status}"),
        };
        Self::Http { status, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Http { .. } => ErrorKind::Http,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Format(_) => ErrorKind::Format,
            Self::Rendering(_) => ErrorKind::Rendering,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
