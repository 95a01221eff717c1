use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formguest_core::PropertiesStore;
use formguest_domain::{FormGuestError, Result as DomainResult};

#[derive(Default)]
struct State {
    values: BTreeMap<String, String>,
    fail_writes: bool,
    fail_reads: bool,
}

/// In-memory key-value namespace.
#[derive(Default, Clone)]
pub struct InMemoryPropertiesStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryPropertiesStore {
    /// Write a single key directly, bypassing `set_all`.
    pub fn put(&self, key: &str, value: &str) {
        self.state.lock().unwrap().values.insert(key.to_string(), value.to_string());
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.state.lock().unwrap().values.clone()
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }
}

#[async_trait]
impl PropertiesStore for InMemoryPropertiesStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(FormGuestError::Database("properties unreadable".into()));
        }
        Ok(state.values.get(key).cloned())
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(FormGuestError::Database("disk full".into()));
        }
        for (key, value) in entries {
            state.values.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(FormGuestError::Database("disk full".into()));
        }
        state.values.clear();
        Ok(())
    }
}
