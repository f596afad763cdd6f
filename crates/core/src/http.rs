//! HTTP transport for the completion endpoint.
//!
//! Wraps a `reqwest::Client` with the endpoint URL. Auth headers are
//! rebuilt per request from the key resolved at call time, so a key
//! change never requires reconstructing the provider.

use crate::provider::Completions;
use crate::request::{CompletionRequest, CompletionResponse};
use anyhow::Result;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};

/// Default completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/completions";

/// reqwest-backed completion provider with Bearer authentication.
#[derive(Debug, Clone)]
pub struct HttpCompletions {
    client: Client,
    endpoint: String,
}

impl HttpCompletions {
    /// Create a provider against the default endpoint.
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_ENDPOINT)
    }

    /// Create a provider against a custom endpoint.
    pub fn with_endpoint(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_owned(),
        }
    }

    /// The endpoint URL this provider posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, format!("Bearer {api_key}").parse()?);
        Ok(headers)
    }
}

impl Completions for HttpCompletions {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        tracing::trace!("request: {}", serde_json::to_string(request)?);
        let text = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(Self::headers(api_key)?)
            .json(request)
            .send()
            .await?
            .text()
            .await?;
        tracing::trace!("response: {text}");

        serde_json::from_str(&text).map_err(Into::into)
    }
}
