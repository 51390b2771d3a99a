use crate::adapters::{ai_service::AiServiceClient, openai::OpenAiClient};
use crate::config::AdvisorConfig;
use crate::core::evaluator::AquariumAdvisor;
use crate::domain::model::{EvaluationResult, LayoutRequest};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// `--remote` 優先於配置中的 `service.ai_service_url`
pub fn remote_url(config: &AdvisorConfig, remote: Option<&str>) -> Option<String> {
    remote
        .map(str::to_string)
        .or_else(|| config.service.ai_service_url.clone())
}

/// Loads the TOML file when given, else the environment. Provider settings
/// are only validated when the model is called directly.
pub fn load_config(config_path: Option<&str>, remote: Option<&str>) -> Result<AdvisorConfig> {
    let config = match config_path {
        Some(path) => AdvisorConfig::from_file(path)?,
        None => AdvisorConfig::from_env()?,
    };

    if remote_url(&config, remote).is_none() {
        config.validate()?;
    }
    Ok(config)
}

pub async fn evaluate_layout(
    config: AdvisorConfig,
    remote: Option<&str>,
    layout: &LayoutRequest,
) -> Result<EvaluationResult> {
    match remote_url(&config, remote) {
        Some(url) => {
            tracing::info!("🌐 Using remote advice service: {}", url);
            let client = AiServiceClient::new(&url, config.provider.timeout())?;
            client.evaluate(layout).await
        }
        None => {
            let provider = OpenAiClient::new(&config.provider)?;
            let advisor = AquariumAdvisor::new(provider, config);
            advisor.evaluate(layout).await
        }
    }
}
