//! Network exchange with the plan-generation service.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use shared::{domain::ExamResultMap, error::ErrorBody};
use tracing::{debug, warn};
use url::Url;

use crate::{config::EndpointSettings, error::SubmitError};

#[async_trait]
pub trait PlanService: Send + Sync {
    /// Sends one set of exam results and returns the untyped success payload.
    ///
    /// Non-2xx answers map to [`SubmitError::Http`]; connection failures and
    /// unparseable success bodies map to [`SubmitError::Transport`].
    async fn generate_plan(&self, results: &ExamResultMap) -> Result<Value, SubmitError>;
}

pub struct HttpPlanService {
    http: Client,
    endpoint: Url,
}

impl HttpPlanService {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &EndpointSettings) -> Result<Self, SubmitError> {
        Ok(Self::new(settings.url()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn generate_plan(&self, results: &ExamResultMap) -> Result<Value, SubmitError> {
        debug!(endpoint = %self.endpoint, fields = results.len(), "posting exam results");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(results)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.map_err(|err| {
                warn!(
                    status = status.as_u16(),
                    error = %err,
                    "failed to read plan service error body"
                );
                SubmitError::Transport(format!(
                    "reading HTTP {} response failed: {err}",
                    status.as_u16()
                ))
            })?;
            let error_body = serde_json::from_slice::<ErrorBody>(&body).unwrap_or_else(|err| {
                warn!(status = status.as_u16(), error = %err, "plan service error body is not JSON");
                ErrorBody::default()
            });
            return Err(SubmitError::http(status.as_u16(), error_body.message()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Value>(&body)
            .map_err(|err| SubmitError::Transport(format!("malformed response body: {err}")))
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
