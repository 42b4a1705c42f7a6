//! Exam-score submission client for the study plan service.
//!
//! The page is headless: a [`view::Surface`] receives render instructions,
//! and [`controller::SubmissionController`] drives one submission at a time
//! against a [`transport::PlanService`].

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod modal;
pub mod render;
pub mod transport;
pub mod view;

pub use config::{load_settings, EndpointSettings};
pub use controller::{
    events::{Outcome, SubmissionState, TriggerOutcome},
    Page, SubmissionController,
};
pub use error::{ErrorKind, SubmitError};
pub use modal::{ClickTarget, ModalController};
pub use transport::{HttpPlanService, PlanService};
pub use view::{PageModel, Surface};
