use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formguest_core::FormPlatform;
use formguest_domain::{FormGuestError, Result as DomainResult};

#[derive(Default)]
struct State {
    collects_emails: bool,
    accepting: Option<bool>,
    fail: bool,
}

/// In-memory form settings.
#[derive(Default, Clone)]
pub struct FakeFormPlatform {
    state: Arc<Mutex<State>>,
}

impl FakeFormPlatform {
    pub fn set_collects_emails(&self, collects: bool) {
        self.state.lock().unwrap().collects_emails = collects;
    }

    pub fn fail(&self) {
        self.state.lock().unwrap().fail = true;
    }

    /// Last value passed to `set_accepting_responses`.
    pub fn accepting(&self) -> Option<bool> {
        self.state.lock().unwrap().accepting
    }
}

#[async_trait]
impl FormPlatform for FakeFormPlatform {
    async fn collects_emails(&self) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        if state.fail {
            return Err(FormGuestError::Platform("form unavailable".into()));
        }
        Ok(state.collects_emails)
    }

    async fn set_accepting_responses(&self, enabled: bool) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail {
            return Err(FormGuestError::Auth("insufficient permission".into()));
        }
        state.accepting = Some(enabled);
        Ok(())
    }
}
