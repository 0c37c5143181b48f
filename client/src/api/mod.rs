//! Typed REST client for the Fabtrack backend
//!
//! One module per resource; every request and response body is a typed
//! struct from the `shared` crate, validated once at this boundary.

mod catalog;
mod intake;
mod program;
mod qa;
mod resources;

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// HTTP client bound to the backend base URL
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "request failed");
            return Err(AppError::from_api_response(status.as_u16(), &body));
        }
        Ok(response.json().await?)
    }
}
