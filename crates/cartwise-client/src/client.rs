//! JSON-over-HTTP plumbing for the shopping backend.
//!
//! Wraps `reqwest` with a fixed base URL, JSON headers, and the two failure
//! kinds callers care about: the request could not be made
//! ([`ClientError::Transport`]) or the backend answered with a non-2xx
//! status ([`ClientError::HttpStatus`]).

use std::time::Duration;

use cartwise_core::AppConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

const JSON: &str = "application/json";

/// Client for the shopping assistant REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:3001`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Transport`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("cartwise/0.1 (shopping-assistant)")
            .build()
            .map_err(|source| ClientError::Transport {
                base_url: trimmed.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url, config.request_timeout_secs)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}{path}` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] when the request cannot be sent or read.
    /// - [`ClientError::HttpStatus`] on a non-2xx status.
    /// - [`ClientError::Decode`] when the body is not the expected JSON.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.get_with_query(path, &[]).await
    }

    /// `GET {base}{path}?{query}` with percent-encoded query pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = self.build_url(path, query)?;
        tracing::debug!(method = "GET", url = %url, "backend request");
        let request = self.client.get(url.clone()).header(ACCEPT, JSON);
        self.send_json(request, &url).await
    }

    /// `POST {base}{path}` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path, &[])?;
        let payload = serde_json::to_vec(body).map_err(|e| ClientError::Decode {
            context: format!("encoding request body for {path}"),
            source: e,
        })?;
        tracing::debug!(method = "POST", url = %url, bytes = payload.len(), "backend request");
        let request = self
            .client
            .post(url.clone())
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .body(payload);
        self.send_json(request, &url).await
    }

    /// Resolves `path` against the base URL and appends `query`.
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
        let joined = if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        };
        let mut url = Url::parse(&joined).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: format!("cannot join path '{path}': {e}"),
        })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T, ClientError> {
        let transport = |source| ClientError::Transport {
            base_url: self.base_url.clone(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %url, "backend returned error status");
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            context: url.path().to_string(),
            source: e,
        })
    }
}
