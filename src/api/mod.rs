//! HTTP client for the tracker backend
//!
//! All interaction is HTTP+JSON against a base URL injected at construction
//! from [`crate::config::ClientConfig`]. Response bodies are decoded into
//! the typed DTOs in [`models`]; non-2xx responses become
//! [`ApiError::Http`] carrying the backend's `detail` message when present.

pub mod models;

mod assets;
mod dashboard;
mod fixed_income;
mod imports;
mod operations;
mod quotes;

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Expected body of backend error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Typed client over the tracker backend API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("carteira/", env!("CARGO_PKG_VERSION")))
            // no cancellation protocol, but a stuck request must not hang
            // the view forever
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Maps non-2xx responses to `ApiError::Http`, extracting the backend's
    /// `{"detail": ...}` body best-effort. A missing or unparsable body
    /// yields `detail: None` rather than masking the status.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.detail);

        Err(ApiError::Http {
            status: status.as_u16(),
            detail,
        })
    }
}
