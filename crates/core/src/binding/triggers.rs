//! Submission trigger lifecycle
//!
//! Invariant: after [`install_submission_trigger`] exactly one trigger named
//! [`HANDLER_NAME`] exists, no matter how many times it ran before.

use formguest_domain::constants::HANDLER_NAME;
use formguest_domain::{Result, Trigger, TriggerEvent};
use tracing::{debug, info};

use crate::trigger_ports::TriggerRegistry;

/// Delete every trigger bound to the submission handler.
///
/// Returns the number of triggers removed.
pub async fn remove_submission_triggers(registry: &dyn TriggerRegistry) -> Result<usize> {
    let mut removed = 0;
    for trigger in registry.list().await? {
        if trigger.handler_name == HANDLER_NAME {
            registry.delete(&trigger.id).await?;
            debug!(trigger_id = %trigger.id, "deleted submission trigger");
            removed += 1;
        }
    }
    Ok(removed)
}

/// Replace any existing submission trigger with a single fresh one.
pub async fn install_submission_trigger(registry: &dyn TriggerRegistry) -> Result<Trigger> {
    let removed = remove_submission_triggers(registry).await?;
    let trigger = registry.create(HANDLER_NAME, TriggerEvent::FormSubmit).await?;
    info!(trigger_id = %trigger.id, replaced = removed, "submission trigger installed");
    Ok(trigger)
}
