//! HTTP plumbing shared by every resource module.
//!
//! [`ApiClient`] owns the [`reqwest::Client`] and the loaded
//! [`ClientConfig`]; resource modules call its verb helpers and never
//! touch reqwest directly.

use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use souk_core::Envelope;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Header carrying a client-generated correlation id on mutations.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the Souk backend.
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// The per-request timeout from the config is installed on the
    /// underlying connection pool here; nothing above this layer
    /// implements its own timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Build an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across several base URLs).
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ---- verb helpers used by the resource modules ----

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(method = "GET", path, "API request");
        let response = self
            .decorate(self.client.get(self.url(path)), false)
            .query(query)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(method = "POST", path, "API request");
        let response = self
            .decorate(self.client.post(self.url(path)), true)
            .json(body)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    /// POST with no request body (e.g. toggle endpoints).
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(method = "POST", path, "API request");
        let response = self
            .decorate(self.client.post(self.url(path)), true)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(method = "PUT", path, "API request");
        let response = self
            .decorate(self.client.put(self.url(path)), true)
            .json(body)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    /// GET an endpoint that predates the `{code, result}` envelope and
    /// returns a bare JSON object (currently only the health probe).
    pub(crate) async fn get_raw<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(method = "GET", path, "API request");
        let response = self
            .decorate(self.client.get(self.url(path)), false)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(method = "DELETE", path, "API request");
        let response = self
            .decorate(self.client.delete(self.url(path)), true)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Attach the session cookie and, for mutations, a correlation id.
    fn decorate(
        &self,
        mut builder: reqwest::RequestBuilder,
        mutation: bool,
    ) -> reqwest::RequestBuilder {
        if let Some(session) = &self.config.session {
            builder = builder.header(COOKIE, session.cookie_value());
        }
        if mutation {
            builder = builder.header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());
        }
        builder
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a successful response into the `{code, result}` envelope.
    async fn parse_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Envelope<T>>().await?)
    }
}
