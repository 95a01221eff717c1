use std::time::Duration;

use formguest_domain::{FormGuestError, HttpConfig};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{status_error, InfraError};

const USER_AGENT: &str = concat!("formguest/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the hosted platform APIs.
///
/// Every request is sent exactly once. Non-success statuses are mapped to
/// domain errors, carrying the platform's own error message when it sent one.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, FormGuestError> {
        Self::builder().build()
    }

    /// Build a client from the `http` config section.
    ///
    /// Requests identify themselves as `formguest/<version>`.
    pub fn from_config(config: &HttpConfig) -> Result<Self, FormGuestError> {
        let mut builder = Self::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request once. Only transport failures are errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, FormGuestError> {
        let request = builder.build().map_err(|err| FormGuestError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }

    /// Execute the request and fail on any non-success status.
    pub async fn send_checked(&self, builder: RequestBuilder) -> Result<Response, FormGuestError> {
        let response = self.send(builder).await?;
        Self::check_status(response).await
    }

    /// Map a non-success status to a domain error, consuming the body.
    pub async fn check_status(response: Response) -> Result<Response, FormGuestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = platform_error_message(&body);
        Err(status_error(status, detail.as_deref()))
    }

    /// Decode a JSON body from a response that already passed `check_status`.
    pub async fn decode_json<T>(response: Response) -> Result<T, FormGuestError>
    where
        T: DeserializeOwned,
    {
        response.json::<T>().await.map_err(|err| InfraError::from(err).into())
    }

    /// Execute the request, check the status and decode a JSON body.
    pub async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, FormGuestError>
    where
        T: DeserializeOwned,
    {
        let response = self.send_checked(builder).await?;
        Self::decode_json(response).await
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Extract `error.message` from a Google API error body.
fn platform_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body).ok().map(|envelope| envelope.error.message)
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Apply a total request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, FormGuestError> {
        let mut builder = ReqwestClient::builder().no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| FormGuestError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
