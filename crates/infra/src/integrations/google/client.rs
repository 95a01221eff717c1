//! Authenticated JSON calls against a Google API root

use std::sync::Arc;

use formguest_domain::Result;
use reqwest::header::IF_MATCH;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::auth::AccessTokenProvider;
use crate::http::HttpClient;

#[derive(Clone)]
pub struct GoogleApiClient {
    http: HttpClient,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl GoogleApiClient {
    pub fn new(http: HttpClient, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        Self { http, tokens }
    }

    pub async fn get<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let token = self.tokens.access_token().await?;
        let request = self.http.request(Method::GET, url).bearer_auth(token).query(query);
        self.http.send_json(request).await
    }

    pub async fn send_body<B, T>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.tokens.access_token().await?;
        let request = self.http.request(method, url).bearer_auth(token).query(query).json(body);
        self.http.send_json(request).await
    }

    /// PATCH guarded by `If-Match: etag`.
    ///
    /// Returns `Ok(None)` when the resource changed since `etag` was read
    /// (`412 Precondition Failed`). Without an etag the PATCH is sent
    /// unconditionally.
    pub async fn patch_if_match<B, T>(
        &self,
        url: &str,
        etag: Option<&str>,
        body: &B,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.tokens.access_token().await?;
        let mut request = self.http.request(Method::PATCH, url).bearer_auth(token).json(body);
        if let Some(etag) = etag {
            request = request.header(IF_MATCH, etag);
        }

        let response = self.http.send(request).await?;
        if response.status() == StatusCode::PRECONDITION_FAILED {
            return Ok(None);
        }
        let response = HttpClient::check_status(response).await?;
        HttpClient::decode_json(response).await.map(Some)
    }
}
