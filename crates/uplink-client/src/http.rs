//! reqwest-backed mission API
//!
//! Routes:
//! - `GET  {base}/scenarios/{id}`       -> `{ "scenario": { ... } }`
//! - `POST {base}/scenarios/{id}/start` -> any 2xx

use crate::api::ScenarioApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ClientBuildError};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use uplink_model::{Scenario, ScenarioEnvelope, ScenarioId};

/// HTTP implementation of [`ScenarioApi`]
#[derive(Debug, Clone)]
pub struct HttpScenarioApi {
    base_url: Url,
    http: Client,
}

impl HttpScenarioApi {
    /// Build a client from configuration
    ///
    /// # Errors
    /// - `ClientBuildError::InvalidBaseUrl` if the base URL is unusable
    /// - `ClientBuildError::Http` if the HTTP backend fails to initialize
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let raw = trim_trailing_slash(config.base_url.clone());
        let base_url = Url::parse(&raw).map_err(|err| ClientBuildError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "url cannot carry path segments".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    /// API root this client talks to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/scenarios/{id}[/{action}]`, with `id` as one encoded segment
    fn scenario_url(&self, id: &ScenarioId, action: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("scenarios").push(id.as_str());
            if let Some(action) = action {
                segments.push(action);
            }
        }
        url
    }
}

#[async_trait]
impl ScenarioApi for HttpScenarioApi {
    async fn fetch_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        let url = self.scenario_url(id, None);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(failure_from(response).await);
        }

        let envelope = response
            .json::<ScenarioEnvelope>()
            .await
            .map_err(|err| ApiError::transport(format!("malformed scenario payload: {err}")))?;
        Ok(envelope.scenario)
    }

    async fn start_scenario(&self, id: &ScenarioId) -> Result<(), ApiError> {
        let url = self.scenario_url(id, Some("start"));
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(failure_from(response).await)
        }
    }
}

/// Map a non-success response onto the failure taxonomy
async fn failure_from(response: Response) -> ApiError {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound;
    }

    let body = response.text().await.unwrap_or_default();
    let message = body_message(&body).unwrap_or_else(|| format!("HTTP {status}"));
    tracing::warn!("mission api returned {}: {}", status, message);
    ApiError::transport(message)
}

/// `message` or `error` string field of a JSON error body
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

fn trim_trailing_slash(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
