//! Form submission payload delivered by the hosted platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single form response
///
/// Field names follow the hosted Forms `FormResponse` resource so the webhook
/// can accept it unchanged. `respondent_email` is absent for anonymous
/// submissions or when the form does not collect emails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default)]
    pub response_id: String,
    #[serde(default)]
    pub form_id: Option<String>,
    #[serde(default)]
    pub respondent_email: Option<String>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
}

impl FormSubmission {
    /// The respondent's email, ignoring blank values.
    pub fn respondent_email(&self) -> Option<&str> {
        self.respondent_email.as_deref().map(str::trim).filter(|email| !email.is_empty())
    }
}
