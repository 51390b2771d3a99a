use crate::config::toml_config::{
    AdvisorConfig, ProviderConfig, ProviderFailurePolicy, SamplingConfig, ServiceConfig,
};
use crate::utils::error::{AdvisorError, Result};
use std::env;
use std::str::FromStr;

impl AdvisorConfig {
    /// 從環境變數建立配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 金鑰缺漏留給 validate_config 判斷，遠端模式不需要
        Ok(Self {
            provider: ProviderConfig {
                api_key: lookup("OPENAI_API_KEY"),
                base_url: lookup("OPENAI_API_BASE"),
                model: lookup("OPENAI_MODEL"),
                timeout_seconds: parse_var(&lookup, "AI_TIMEOUT_SECONDS")?,
                retry_attempts: parse_var(&lookup, "AI_RETRY_ATTEMPTS")?,
                retry_delay_seconds: parse_var(&lookup, "AI_RETRY_DELAY_SECONDS")?,
            },
            sampling: SamplingConfig {
                temperature: parse_var(&lookup, "AI_TEMPERATURE")?,
                max_tokens: parse_var(&lookup, "AI_MAX_TOKENS")?,
                top_p: parse_var(&lookup, "AI_TOP_P")?,
            },
            service: ServiceConfig {
                on_provider_failure: lookup("AI_ON_PROVIDER_FAILURE")
                    .map(|v| ProviderFailurePolicy::from_str(&v))
                    .transpose()?,
                debug: lookup("DEBUG").map(|v| parse_flag(&v)),
                ai_service_url: lookup("AI_SERVICE_URL"),
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AdvisorError::InvalidConfigValueError {
                field: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-env"),
            ("OPENAI_API_BASE", "https://openrouter.ai/api/v1/"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("DEBUG", "True"),
            ("AI_TIMEOUT_SECONDS", "15"),
            ("AI_TOP_P", "0.8"),
            ("AI_ON_PROVIDER_FAILURE", "fail"),
        ]))
        .unwrap();

        assert_eq!(config.provider.api_key().unwrap(), "sk-env");
        assert_eq!(config.provider.model(), "gpt-4o");
        assert_eq!(config.provider.timeout(), Duration::from_secs(15));
        assert_eq!(config.sampling.top_p(), 0.8);
        assert!(config.service.debug());
        assert_eq!(
            config.service.on_provider_failure(),
            ProviderFailurePolicy::Fail
        );
    }

    #[test]
    fn test_missing_api_key_fails_validation_only() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[(
            "AI_SERVICE_URL",
            "http://localhost:8001",
        )]))
        .unwrap();
        assert_eq!(
            config.service.ai_service_url.as_deref(),
            Some("http://localhost:8001")
        );

        let err = config.validate_config().unwrap_err();
        assert!(matches!(err, AdvisorError::MissingConfigError { .. }));
    }

    #[test]
    fn test_unparseable_number_is_reported() {
        let err = AdvisorConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-env"),
            ("AI_MAX_TOKENS", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("AI_MAX_TOKENS"));
    }
}
