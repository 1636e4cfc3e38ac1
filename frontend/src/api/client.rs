use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
};

/// Typed client for the gym backend. Every call goes through
/// [`ApiClient::send`], which folds transport failures, non-success statuses
/// and undecodable bodies into [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            token: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            token: None,
        }
    }

    /// Same backend, with `Authorization: Bearer` attached when `token` is set.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Sends the request and returns the response only for 2xx statuses.
    /// `fallback` is the message shown when the backend gives no usable text.
    pub(crate) async fn send(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| {
                log::warn!("request failed: {}", e);
                ApiError::request_failed(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::text)
            .unwrap_or_else(|| fallback.to_string());
        log::warn!("backend responded {}: {}", status, message);
        Err(ApiError::http(status.as_u16(), message))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(builder, fallback).await?;
        decode_json(response).await
    }

    /// For create calls: the status decides success, the echoed entity is
    /// informational and may be empty or in an unexpected shape.
    pub(crate) async fn send_created<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self.send(builder, fallback).await?;
        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("created entity could not be decoded: {}", e);
                Ok(None)
            }
        }
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
    serde_json::from_str(&body)
        .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
}
