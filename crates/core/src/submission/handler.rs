//! Submission handler
//!
//! Runs once per form response. It never fails towards the caller: every
//! precondition miss or platform error is logged and the response is
//! dropped, so one bad submission cannot affect the next.

use std::sync::Arc;

use formguest_domain::{Binding, FormSubmission, Result};
use tracing::{error, info, warn};

use crate::binding::read_binding;
use crate::calendar_ports::CalendarPlatform;
use crate::properties_ports::PropertiesStore;

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    GuestAdded(String),
    NotConfigured,
    NoEmail,
    CalendarMissing,
    EventMissing,
}

#[derive(Clone)]
pub struct SubmissionHandler {
    properties: Arc<dyn PropertiesStore>,
    calendar: Arc<dyn CalendarPlatform>,
}

impl SubmissionHandler {
    pub fn new(properties: Arc<dyn PropertiesStore>, calendar: Arc<dyn CalendarPlatform>) -> Self {
        Self { properties, calendar }
    }

    /// Add the respondent of `submission` as a guest on the bound event.
    pub async fn handle(&self, submission: &FormSubmission) {
        let response_id = submission.response_id.as_str();
        match self.try_handle(submission).await {
            Ok(Outcome::GuestAdded(email)) => {
                info!(response_id, guest = %email, "guest added to linked event");
            }
            Ok(Outcome::NotConfigured) => warn!(response_id, "Configuration not found."),
            Ok(Outcome::NoEmail) => warn!(response_id, "Respondent email not available."),
            Ok(Outcome::CalendarMissing) => warn!(response_id, "Linked calendar not found."),
            Ok(Outcome::EventMissing) => warn!(response_id, "Linked event not found."),
            Err(err) => error!(response_id, error = %err, "failed to add guest"),
        }
    }

    async fn try_handle(&self, submission: &FormSubmission) -> Result<Outcome> {
        let Some(Binding { calendar_id, event_id }) = read_binding(self.properties.as_ref()).await?
        else {
            return Ok(Outcome::NotConfigured);
        };

        let Some(email) = submission.respondent_email() else {
            return Ok(Outcome::NoEmail);
        };

        if self.calendar.calendar_by_id(&calendar_id).await?.is_none() {
            return Ok(Outcome::CalendarMissing);
        }

        if self.calendar.event_by_id(&calendar_id, &event_id).await?.is_none() {
            return Ok(Outcome::EventMissing);
        }

        self.calendar.add_guest(&calendar_id, &event_id, email).await?;
        Ok(Outcome::GuestAdded(email.to_string()))
    }
}
