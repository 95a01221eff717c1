//! Trigger dispatcher
//!
//! Incoming "form submitted" events only reach the handler while a trigger
//! for it is installed. Resetting the configuration therefore stops guest
//! additions even if the webhook keeps firing.

use std::sync::Arc;

use formguest_domain::constants::HANDLER_NAME;
use formguest_domain::{FormSubmission, TriggerEvent};
use tracing::{debug, error};

use super::handler::SubmissionHandler;
use crate::trigger_ports::TriggerRegistry;

/// Result of routing one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran (whether or not a guest was added).
    Handled,
    /// No live trigger; the submission was ignored.
    NoTrigger,
}

#[derive(Clone)]
pub struct TriggerDispatcher {
    registry: Arc<dyn TriggerRegistry>,
    handler: SubmissionHandler,
}

impl TriggerDispatcher {
    pub fn new(registry: Arc<dyn TriggerRegistry>, handler: SubmissionHandler) -> Self {
        Self { registry, handler }
    }

    pub async fn dispatch(&self, submission: &FormSubmission) -> DispatchOutcome {
        let live = match self.registry.list().await {
            Ok(triggers) => triggers
                .iter()
                .any(|trigger| trigger.matches(HANDLER_NAME, TriggerEvent::FormSubmit)),
            Err(err) => {
                error!(error = %err, "failed to list triggers; ignoring submission");
                false
            }
        };

        if !live {
            debug!(response_id = %submission.response_id, "no submission trigger installed");
            return DispatchOutcome::NoTrigger;
        }

        self.handler.handle(submission).await;
        DispatchOutcome::Handled
    }
}
