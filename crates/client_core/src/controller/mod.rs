//! Submission controller: single-flight guard, request lifecycle and page effects.

pub mod events;
pub mod reducer;

use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::domain::FormState;
use tracing::{debug, error, info, warn};

use crate::{
    error::{ErrorKind, SubmitError},
    input,
    modal::{ClickTarget, ModalController},
    render,
    transport::PlanService,
    view::{commit, OutputBlock, RenderInstruction, Surface, TriggerAffordance, LOADING_MESSAGE},
};

use events::{ControllerState, Effect, Event, Outcome, SubmissionState, TriggerOutcome};
use reducer::transition;

/// Everything the controller is allowed to mutate on the page.
#[derive(Debug, Default)]
pub struct Page<V> {
    pub surface: V,
    pub modal: ModalController,
    pub form: FormState,
}

struct Inner<V> {
    control: ControllerState,
    page: Page<V>,
}

impl<V: Surface> Inner<V> {
    fn dispatch(&mut self, event: Event) -> bool {
        let name = event.name();
        let Some(step) = transition(&self.control, event) else {
            debug!(event = name, state = ?self.control.state, "event ignored");
            return false;
        };
        self.control = step.next;
        execute(&mut self.page, step.effects);
        true
    }
}

fn execute<V: Surface>(page: &mut Page<V>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::DisableTrigger => page.surface.set_trigger(TriggerAffordance::Busy),
            Effect::ShowLoading => commit(
                &mut page.surface,
                &RenderInstruction::replace_output(OutputBlock::Loading(
                    LOADING_MESSAGE.to_string(),
                )),
            ),
            Effect::CloseModal => page.modal.close(),
            Effect::Commit(instructions) => commit(&mut page.surface, &instructions),
            Effect::ShowError(message) => commit(
                &mut page.surface,
                &RenderInstruction::replace_output(OutputBlock::Error(message)),
            ),
            Effect::RestoreTrigger => page.surface.set_trigger(TriggerAffordance::Ready),
        }
    }
}

pub struct SubmissionController<P, V> {
    service: P,
    inner: Mutex<Inner<V>>,
}

impl<P: PlanService, V: Surface> SubmissionController<P, V> {
    pub fn new(service: P, surface: V) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                control: ControllerState::default(),
                page: Page {
                    surface,
                    modal: ModalController::default(),
                    form: FormState::default(),
                },
            }),
        }
    }

    pub fn with_form(self, form: FormState) -> Self {
        self.lock().page.form = form;
        self
    }

    // The lock is only ever held for synchronous sections; recover the page
    // even if a surface panicked while holding it.
    fn lock(&self) -> MutexGuard<'_, Inner<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, event: Event) -> bool {
        self.lock().dispatch(event)
    }

    pub fn set_field(&self, name: &str, value: impl Into<String>) {
        self.lock().page.form.set(name, value);
    }

    pub fn clear_form(&self) {
        self.lock().page.form.clear();
    }

    pub fn open_modal(&self) {
        self.lock().page.modal.open();
    }

    pub fn close_modal(&self) {
        self.lock().page.modal.close();
    }

    pub fn click_modal(&self, target: ClickTarget) {
        self.lock().page.modal.click(target);
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().control.state
    }

    pub fn last_error(&self) -> Option<SubmitError> {
        self.lock().control.last_error.clone()
    }

    pub fn with_page<R>(&self, f: impl FnOnce(&Page<V>) -> R) -> R {
        f(&self.lock().page)
    }

    pub fn into_page(self) -> Page<V> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .page
    }

    /// Runs one submission cycle, or does nothing if one is already running.
    pub async fn trigger(&self) -> TriggerOutcome {
        let form = {
            let mut inner = self.lock();
            if !inner.dispatch(Event::Trigger) {
                debug!("submission already in flight; trigger dropped");
                return TriggerOutcome::Dropped;
            }
            inner.page.form.clone()
        };

        let mut guard = SubmissionGuard {
            controller: self,
            finished: false,
        };
        let outcome = self.run_cycle(&form).await;
        guard.finished = true;
        drop(guard);

        info!(?outcome, "submission cycle finished");
        TriggerOutcome::Completed(outcome)
    }

    async fn run_cycle(&self, form: &FormState) -> Outcome {
        let event = match input::collect(form) {
            Err(err) => Event::Failed(err.into()),
            Ok(results) => {
                info!(fields = results.len(), "submitting exam results");
                match self.service.generate_plan(&results).await {
                    Ok(payload) => {
                        debug!(%payload, "plan payload received");
                        match render::render(&payload) {
                            Ok(instructions) => Event::PlanReady(instructions),
                            Err(err) => Event::Failed(err.into()),
                        }
                    }
                    Err(err) => Event::Failed(err),
                }
            }
        };

        if let Event::Failed(err) = &event {
            match err.kind() {
                ErrorKind::Validation => warn!(error = %err, "exam results rejected"),
                kind => error!(?kind, error = %err, "plan submission failed"),
            }
        }

        let mut inner = self.lock();
        inner.dispatch(event);
        match inner.control.state {
            SubmissionState::Done(outcome) => outcome,
            _ => Outcome::Failure,
        }
    }
}

/// Returns the controller to Idle when the cycle ends, however it ends.
struct SubmissionGuard<'a, P: PlanService, V: Surface> {
    controller: &'a SubmissionController<P, V>,
    finished: bool,
}

impl<P: PlanService, V: Surface> Drop for SubmissionGuard<'_, P, V> {
    fn drop(&mut self) {
        // Done(Success) before the cycle returned means the commit unwound.
        let cut_short = !self.finished
            && self.controller.state() == SubmissionState::Done(Outcome::Success);
        if std::thread::panicking() || cut_short {
            warn!("response handling panicked; replacing partial output");
            self.controller
                .dispatch(Event::Interrupted("response handling panicked".to_string()));
        }
        self.controller.dispatch(Event::Settle);
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
