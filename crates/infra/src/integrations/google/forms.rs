//! Google Forms v1 adapter

use async_trait::async_trait;
use formguest_core::FormPlatform;
use formguest_domain::Result;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::client::GoogleApiClient;
use super::types::{Form, SetPublishSettingsRequest};

/// The active form, addressed by id
pub struct GoogleFormsPlatform {
    api: GoogleApiClient,
    base_url: String,
    form_id: String,
}

impl GoogleFormsPlatform {
    pub fn new(api: GoogleApiClient, base_url: impl Into<String>, form_id: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            form_id: form_id.into(),
        }
    }

    fn form_url(&self) -> String {
        format!("{}/forms/{}", self.base_url, urlencoding::encode(&self.form_id))
    }
}

#[async_trait]
impl FormPlatform for GoogleFormsPlatform {
    async fn collects_emails(&self) -> Result<bool> {
        let form: Form = self.api.get(&self.form_url(), &[]).await?;
        let collects =
            form.settings.email_collection_type.is_some_and(|kind| kind.collects_emails());
        debug!(form_id = %form.form_id, collects, "read form email collection setting");
        Ok(collects)
    }

    async fn set_accepting_responses(&self, enabled: bool) -> Result<()> {
        let url = format!("{}:setPublishSettings", self.form_url());
        let _: Value = self
            .api
            .send_body(Method::POST, &url, &[], &SetPublishSettingsRequest::accepting_responses(enabled))
            .await?;
        Ok(())
    }
}
