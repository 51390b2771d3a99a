use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_RETRY_DELAY_SECONDS: u64 = 1;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TOP_P: f32 = 1.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub on_provider_failure: Option<ProviderFailurePolicy>,
    pub debug: Option<bool>,
    pub ai_service_url: Option<String>,
}

/// What to do when the model call fails or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFailurePolicy {
    /// Answer with the locally synthesized response.
    #[default]
    Fallback,
    /// Surface the provider error to the caller.
    Fail,
}

impl FromStr for ProviderFailurePolicy {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "fail" => Ok(Self::Fail),
            other => Err(AdvisorError::InvalidConfigValueError {
                field: "service.on_provider_failure".to_string(),
                value: other.to_string(),
                reason: "Expected 'fallback' or 'fail'".to_string(),
            }),
        }
    }
}

impl ProviderConfig {
    pub fn api_key(&self) -> Result<&str> {
        validation::validate_required_field("provider.api_key", &self.api_key).map(String::as_str)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts.unwrap_or(0)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(
            self.retry_delay_seconds
                .unwrap_or(DEFAULT_RETRY_DELAY_SECONDS),
        )
    }
}

impl SamplingConfig {
    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn top_p(&self) -> f32 {
        self.top_p.unwrap_or(DEFAULT_TOP_P)
    }
}

impl ServiceConfig {
    pub fn on_provider_failure(&self) -> ProviderFailurePolicy {
        self.on_provider_failure.unwrap_or_default()
    }

    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}

impl AdvisorConfig {
    /// 以 API key 與 base URL 建立，其餘使用預設值
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            provider: ProviderConfig {
                api_key: Some(api_key.into()),
                base_url: Some(base_url.into()),
                ..ProviderConfig::default()
            },
            ..Self::default()
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENAI_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdvisorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let api_key = self.provider.api_key()?;
        validation::validate_non_empty_string("provider.api_key", api_key)?;
        if api_key.starts_with("${") {
            return Err(AdvisorError::InvalidConfigValueError {
                field: "provider.api_key".to_string(),
                value: api_key.to_string(),
                reason: "Environment variable was not set".to_string(),
            });
        }

        validation::validate_url("provider.base_url", self.provider.base_url())?;
        validation::validate_non_empty_string("provider.model", self.provider.model())?;
        validation::validate_positive_number(
            "provider.timeout_seconds",
            self.provider.timeout().as_secs(),
            1,
        )?;

        validation::validate_range("sampling.temperature", self.sampling.temperature(), 0.0, 2.0)?;
        validation::validate_range("sampling.top_p", self.sampling.top_p(), 0.0, 1.0)?;
        validation::validate_positive_number(
            "sampling.max_tokens",
            u64::from(self.sampling.max_tokens()),
            1,
        )?;

        if let Some(url) = &self.service.ai_service_url {
            validation::validate_url("service.ai_service_url", url)?;
        }

        Ok(())
    }
}

impl Validate for AdvisorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
