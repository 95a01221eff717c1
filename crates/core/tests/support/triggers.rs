use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use formguest_core::TriggerRegistry;
use formguest_domain::{FormGuestError, Result as DomainResult, Trigger, TriggerEvent};

#[derive(Default)]
struct State {
    triggers: Vec<Trigger>,
    next_id: u32,
    deleted: Vec<String>,
    fail: bool,
}

/// In-memory trigger registry bound to `form-1`.
#[derive(Default, Clone)]
pub struct InMemoryTriggerRegistry {
    state: Arc<Mutex<State>>,
}

impl InMemoryTriggerRegistry {
    /// Register a trigger without going through `create`.
    pub fn seed(&self, handler_name: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("seed-{}", state.next_id);
        state.triggers.push(Trigger {
            id: id.clone(),
            handler_name: handler_name.to_string(),
            event: TriggerEvent::FormSubmit,
            form_id: "form-1".into(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn triggers(&self) -> Vec<Trigger> {
        self.state.lock().unwrap().triggers.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn fail(&self) {
        self.state.lock().unwrap().fail = true;
    }
}

fn unavailable() -> FormGuestError {
    FormGuestError::Platform("trigger service unavailable".into())
}

#[async_trait]
impl TriggerRegistry for InMemoryTriggerRegistry {
    async fn list(&self) -> DomainResult<Vec<Trigger>> {
        let state = self.state.lock().unwrap();
        if state.fail {
            return Err(unavailable());
        }
        Ok(state.triggers.clone())
    }

    async fn delete(&self, trigger_id: &str) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail {
            return Err(unavailable());
        }
        state.triggers.retain(|t| t.id != trigger_id);
        state.deleted.push(trigger_id.to_string());
        Ok(())
    }

    async fn create(&self, handler_name: &str, event: TriggerEvent) -> DomainResult<Trigger> {
        let mut state = self.state.lock().unwrap();
        if state.fail {
            return Err(unavailable());
        }
        state.next_id += 1;
        let trigger = Trigger {
            id: format!("trigger-{}", state.next_id),
            handler_name: handler_name.to_string(),
            event,
            form_id: "form-1".into(),
            created_at: Utc::now(),
        };
        state.triggers.push(trigger.clone());
        Ok(trigger)
    }
}
