use crate::config::toml_config::{AdvisorConfig, ProviderFailurePolicy};
use crate::core::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::core::response::{fallback_response, validate_response};
use crate::core::volume::VolumeReport;
use crate::domain::model::{
    ChatMessage, CompletionRequest, EvaluationResult, LayoutRequest, ResponseOrigin, TankSpec,
};
use crate::domain::ports::AdviceProvider;
use crate::utils::error::{AdvisorError, Result};

/// Turns a layout request into advice: validate, prompt, call the provider,
/// then check the answer and substitute the fallback when needed.
pub struct AquariumAdvisor<P: AdviceProvider> {
    provider: P,
    config: AdvisorConfig,
}

impl<P: AdviceProvider> AquariumAdvisor<P> {
    pub fn new(provider: P, config: AdvisorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub async fn evaluate(&self, request: &LayoutRequest) -> Result<EvaluationResult> {
        tracing::info!(
            "Evaluating aquarium layout '{}' for owner: {}",
            request.tank_name,
            request.owner_email
        );

        let tank = TankSpec::try_from(request).inspect_err(|e| {
            tracing::warn!("❌ Layout rejected: {}", e);
        })?;

        let volume = VolumeReport::calculate(tank.length, tank.width, tank.height, tank.unit);
        let prompt = build_prompt(&tank, &volume);
        if self.config.service.debug() {
            tracing::info!("Generated prompt:\n{}", prompt);
        } else {
            tracing::debug!("Generated prompt:\n{}", prompt);
        }

        let completion = self.completion_request(prompt);

        match self.request_with_retry(&completion).await {
            Ok(answer) => {
                if self.config.service.debug() {
                    tracing::info!("Provider response:\n{}", answer);
                } else {
                    tracing::debug!("Provider response:\n{}", answer);
                }

                if validate_response(&answer) {
                    tracing::info!("✅ Received well-formed advice from provider");
                    Ok(EvaluationResult::success(
                        answer.trim().to_string(),
                        ResponseOrigin::Model,
                    ))
                } else {
                    tracing::warn!(
                        "⚠️ Provider response did not match the section format, using fallback"
                    );
                    Ok(EvaluationResult::success(
                        fallback_response(&tank, &volume),
                        ResponseOrigin::MalformedFallback,
                    ))
                }
            }
            Err(e) if e.is_provider_failure() => match self.config.service.on_provider_failure() {
                ProviderFailurePolicy::Fallback => {
                    tracing::warn!("⚠️ Provider failed ({}), answering with fallback", e);
                    Ok(EvaluationResult::success(
                        fallback_response(&tank, &volume),
                        ResponseOrigin::ProviderFallback,
                    ))
                }
                ProviderFailurePolicy::Fail => {
                    tracing::error!("❌ Provider failed: {}", e);
                    Err(e)
                }
            },
            Err(e) => {
                tracing::error!("❌ Unexpected error while evaluating layout: {}", e);
                Err(AdvisorError::service(format!(
                    "An unexpected error occurred: {}",
                    e
                )))
            }
        }
    }

    fn completion_request(&self, prompt: String) -> CompletionRequest {
        CompletionRequest {
            model: self.config.provider.model().to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: self.config.sampling.temperature(),
            max_tokens: self.config.sampling.max_tokens(),
            top_p: self.config.sampling.top_p(),
        }
    }

    /// 單次呼叫加上逾時；只有供應端錯誤會重試
    async fn request_with_retry(&self, request: &CompletionRequest) -> Result<String> {
        let attempts = self.config.provider.retry_attempts() + 1;
        let mut attempt = 1;

        loop {
            match self.request_once(request).await {
                Err(e) if e.is_provider_failure() && attempt < attempts => {
                    tracing::warn!(
                        "Provider attempt {}/{} failed: {}, retrying",
                        attempt,
                        attempts,
                        e
                    );
                    tokio::time::sleep(self.config.provider.retry_delay()).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    async fn request_once(&self, request: &CompletionRequest) -> Result<String> {
        let timeout = self.config.provider.timeout();
        match tokio::time::timeout(timeout, self.provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(AdvisorError::provider(format!(
                "No response from provider within {}s",
                timeout.as_secs()
            ))),
        }
    }
}
