//! Dialog data assembler

use formguest_domain::DialogData;

use crate::binding::ConfigurationManager;

/// Produces the payload the management dialog renders on open
#[derive(Clone)]
pub struct DialogDataAssembler {
    manager: ConfigurationManager,
}

impl DialogDataAssembler {
    pub fn new(manager: ConfigurationManager) -> Self {
        Self { manager }
    }

    /// The configuration status, unchanged.
    pub async fn assemble(&self) -> DialogData {
        self.manager.get_status().await
    }
}
