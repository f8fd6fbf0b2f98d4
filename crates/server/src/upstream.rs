use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde::Serialize;

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::models::{MessageRow, UpstreamResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetAll,
    UpdateAi,
    SendReply,
}

impl Endpoint {
    fn name(self) -> &'static str {
        match self {
            Endpoint::GetAll => "get-all",
            Endpoint::UpdateAi => "update-ai",
            Endpoint::SendReply => "send-reply",
        }
    }
}

/// Upstream reply, passed back to callers unchanged.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Bearer-authenticated client for the automation service.
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .unwrap_or_default();
        Self { http, config }
    }

    fn target(&self, endpoint: Endpoint) -> Result<(&str, &str), UpstreamError> {
        let url = match endpoint {
            Endpoint::GetAll => self.config.get_all_url.as_deref(),
            Endpoint::UpdateAi => self.config.update_ai_url.as_deref(),
            Endpoint::SendReply => self.config.send_reply_url.as_deref(),
        };
        match (url, self.config.token.as_deref()) {
            (Some(url), Some(token)) => Ok((url, token)),
            _ => Err(UpstreamError::NotConfigured(endpoint.name())),
        }
    }

    /// GET the full row list, body untouched.
    pub async fn fetch_all(&self) -> Result<UpstreamResponse, UpstreamError> {
        self.send(Endpoint::GetAll, None).await
    }

    /// POST a raw update-flag body. An empty body is sent as `{}`.
    pub async fn update_ai(&self, body: Bytes) -> Result<UpstreamResponse, UpstreamError> {
        self.send(Endpoint::UpdateAi, Some(body)).await
    }

    /// POST a raw send-reply body. An empty body is sent as `{}`.
    pub async fn send_reply(&self, body: Bytes) -> Result<UpstreamResponse, UpstreamError> {
        self.send(Endpoint::SendReply, Some(body)).await
    }

    /// Fetches and decodes every message row.
    pub async fn fetch_rows(&self) -> Result<Vec<MessageRow>, UpstreamError> {
        let res = self.fetch_all().await?;
        if !res.is_success() {
            return Err(UpstreamError::Status(res.status.as_u16()));
        }
        Ok(serde_json::from_slice(&res.body)?)
    }

    /// Serializes `payload`, posts it and reads the `{result}` acknowledgement.
    pub async fn post_for_result<T: Serialize>(
        &self,
        endpoint: Endpoint,
        payload: &T,
    ) -> Result<UpstreamResult, UpstreamError> {
        let body = Bytes::from(serde_json::to_vec(payload)?);
        let res = self.send(endpoint, Some(body)).await?;
        // Non-2xx bodies may still carry a result field; a missing one reads as rejection.
        Ok(serde_json::from_slice(&res.body).unwrap_or_default())
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        body: Option<Bytes>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let (url, token) = self.target(endpoint)?;
        let request_id = uuid::Uuid::new_v4().to_string();

        let mut request = match body {
            None => self.http.get(url),
            Some(body) => {
                let body = if body.is_empty() {
                    Bytes::from_static(b"{}")
                } else {
                    body
                };
                self.http
                    .post(url)
                    .header("content-type", "application/json")
                    .body(body)
            }
        };
        request = request
            .bearer_auth(token)
            .header("accept", "application/json")
            .header("x-request-id", request_id.as_str());

        let res = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    "Upstream {} request {} failed: {}",
                    endpoint.name(),
                    request_id,
                    e
                );
                return Err(e.into());
            }
        };

        let status = StatusCode::from_u16(res.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = res.bytes().await?;

        tracing::debug!(
            "Upstream {} request {} -> {} ({} bytes)",
            endpoint.name(),
            request_id,
            status,
            body.len()
        );

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
