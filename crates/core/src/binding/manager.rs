//! Configuration manager

use std::sync::Arc;

use formguest_domain::constants::{CALENDAR_ID_KEY, EVENT_ID_KEY};
use formguest_domain::{Binding, DialogData, LinkedEventOutcome, Result};
use tracing::{error, info};

use super::triggers::{install_submission_trigger, remove_submission_triggers};
use crate::calendar::{CalendarDirectory, EventResolver};
use crate::form_ports::FormPlatform;
use crate::properties_ports::PropertiesStore;
use crate::trigger_ports::TriggerRegistry;

/// Owns the binding and the submission trigger
///
/// Every public operation except [`set_accepting_responses`] returns a
/// [`DialogData`] instead of an error so the dialog has a uniform contract.
///
/// [`set_accepting_responses`]: ConfigurationManager::set_accepting_responses
#[derive(Clone)]
pub struct ConfigurationManager {
    properties: Arc<dyn PropertiesStore>,
    triggers: Arc<dyn TriggerRegistry>,
    form: Arc<dyn FormPlatform>,
    directory: CalendarDirectory,
    resolver: EventResolver,
}

impl ConfigurationManager {
    pub fn new(
        properties: Arc<dyn PropertiesStore>,
        triggers: Arc<dyn TriggerRegistry>,
        form: Arc<dyn FormPlatform>,
        directory: CalendarDirectory,
        resolver: EventResolver,
    ) -> Self {
        Self { properties, triggers, form, directory, resolver }
    }

    /// Read the persisted binding. Partial pairs read as `None`.
    pub async fn binding(&self) -> Result<Option<Binding>> {
        read_binding(self.properties.as_ref()).await
    }

    /// Current status of the binding for the dialog.
    pub async fn get_status(&self) -> DialogData {
        match self.try_status().await {
            Ok(data) => data,
            Err(err) => {
                error!(error = %err, "failed to compute configuration status");
                DialogData::ServerError { error_message: format!("Server error: {err}") }
            }
        }
    }

    /// Overwrite the binding, reinstall the trigger and report the new status.
    ///
    /// The pair is not validated; an unresolvable pair shows up as an
    /// unconfigured status with an error message.
    pub async fn save(&self, calendar_id: &str, event_id: &str) -> DialogData {
        match self.try_save(calendar_id, event_id).await {
            Ok(()) => self.get_status().await,
            Err(err) => {
                error!(calendar_id, event_id, error = %err, "failed to save configuration");
                DialogData::BareError {
                    error_message: format!("Error saving configuration: {err}"),
                }
            }
        }
    }

    /// Remove the trigger and every stored property.
    pub async fn reset(&self) -> DialogData {
        match self.try_reset().await {
            Ok(()) => self.get_status().await,
            Err(err) => {
                error!(error = %err, "failed to reset configuration");
                DialogData::ServerError {
                    error_message: format!("Server error while resetting: {err}"),
                }
            }
        }
    }

    /// Open or close the form and echo the requested state.
    ///
    /// Unlike the other operations, failures propagate to the caller.
    pub async fn set_accepting_responses(&self, enabled: bool) -> Result<bool> {
        self.form.set_accepting_responses(enabled).await?;
        info!(enabled, "form response acceptance updated");
        Ok(enabled)
    }

    async fn try_status(&self) -> Result<DialogData> {
        let Some(binding) = self.binding().await? else {
            return Ok(DialogData::unconfigured(self.directory.list_calendars().await));
        };

        match self.resolver.describe(&binding.calendar_id, &binding.event_id).await {
            LinkedEventOutcome::Error { error } => Ok(DialogData::Unconfigured {
                all_calendars: self.directory.list_calendars().await,
                error_message: Some(error),
            }),
            LinkedEventOutcome::Details(linked) => {
                let form_collects_emails = self.form.collects_emails().await?;
                Ok(DialogData::Configured { linked, form_collects_emails })
            }
        }
    }

    async fn try_save(&self, calendar_id: &str, event_id: &str) -> Result<()> {
        self.properties.set_all(&[(CALENDAR_ID_KEY, calendar_id), (EVENT_ID_KEY, event_id)]).await?;
        install_submission_trigger(self.triggers.as_ref()).await?;
        info!(calendar_id, event_id, "configuration saved");
        Ok(())
    }

    async fn try_reset(&self) -> Result<()> {
        let removed = remove_submission_triggers(self.triggers.as_ref()).await?;
        self.properties.delete_all().await?;
        info!(triggers_removed = removed, "configuration reset");
        Ok(())
    }
}

/// Read both binding keys from `properties`.
pub async fn read_binding(properties: &dyn PropertiesStore) -> Result<Option<Binding>> {
    let calendar_id = properties.get(CALENDAR_ID_KEY).await?;
    let event_id = properties.get(EVENT_ID_KEY).await?;
    Ok(Binding::from_parts(calendar_id, event_id))
}
