/// Backend transport — the single point of entry for all Resumate API calls.
///
/// ARCHITECTURAL RULE: No coordinator may call the backend directly.
/// All HTTP traffic MUST go through this module, so bearer attachment,
/// status classification, and error-message extraction live in one place.
use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::auth::TokenProvider;
use crate::config::Config;
use crate::errors::{ApiError, ErrorCode};

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl BackendClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path).await?).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    /// POST with no body. Connect/disconnect/process endpoints take none.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .request(Method::POST, path)
            .await?
            .header("Content-Type", "application/json");
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    /// POST with no body, ignoring the response payload. Disconnect and the
    /// data triggers answer with bodies the client has no use for.
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, path)
            .await?
            .header("Content-Type", "application/json");
        self.send(request).await?;
        Ok(())
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path).await?.json(body);
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path).await?).await?;
        Ok(())
    }

    /// Binary GET. Returns the payload together with the
    /// `content-disposition` header value, when the backend sent one.
    pub async fn get_bytes(&self, path: &str) -> Result<(Bytes, Option<String>), ApiError> {
        let response = self.send(self.request(Method::GET, path).await?).await?;
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;
        Ok((bytes, disposition))
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.token().await.map_err(ApiError::Token)?;
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    /// Sends the request and classifies non-success statuses, pulling the
    /// user-facing message out of the response body when the backend sent one.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("backend returned {}: {}", status, body);
        Err(ApiError::Api {
            status: status.as_u16(),
            code: ErrorCode::from_status(status.as_u16()),
            message: extract_message(&body),
        })
    }
}

/// Pulls the message out of an error body. The backend answers with
/// `{"error": "..."}`, occasionally `{"message": "..."}` or the nested
/// `{"error": {"message": "..."}}` shape.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(error) = value.get("error") {
        if let Some(s) = error.as_str() {
            return Some(s.to_string());
        }
        if let Some(s) = error.get("message").and_then(|m| m.as_str()) {
            return Some(s.to_string());
        }
    }
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_owned)
}
