use crate::domain::model::{EvaluationResult, LayoutRequest, ResponseOrigin};
use crate::utils::error::{AdvisorError, ErrorResponse, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Forwards layouts to a running advice service (`POST {base_url}/evaluate`).
pub struct AiServiceClient {
    client: Client,
    base_url: String,
}

impl AiServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        crate::utils::validation::validate_url("ai_service_url", base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdvisorError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn evaluate(&self, layout: &LayoutRequest) -> Result<EvaluationResult> {
        let endpoint = format!("{}/evaluate", self.base_url);
        tracing::info!("Forwarding layout '{}' to {}", layout.tank_name, endpoint);

        let response = self.client.post(&endpoint).json(layout).send().await?;
        let status = response.status();
        tracing::debug!("Advice service response status: {}", status);

        if status.is_success() {
            let mut result: EvaluationResult = response.json().await?;
            result.origin = ResponseOrigin::Remote;
            return Ok(result);
        }

        let body = response.text().await.unwrap_or_default();
        // FastAPI 風格的 {"detail": "..."}，否則直接使用原始內容
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| body.trim().to_string());

        Err(match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AdvisorError::validation(detail)
            }
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => AdvisorError::provider(detail),
            _ => AdvisorError::service(format!("Advice service returned {}: {}", status, detail)),
        })
    }
}
