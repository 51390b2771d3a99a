use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Provider error: {message}")]
    ProviderError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Service error: {message}")]
    ServiceError { message: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: u64 },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Provider,
    Service,
    Configuration,
    Storage,
    Access,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

/// 對外回傳的錯誤內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AdvisorError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderError {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::ServiceError {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: u64) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ProviderError { .. } | Self::ApiError(_) => ErrorCategory::Provider,
            Self::NotFound { .. } | Self::Forbidden { .. } | Self::Conflict { .. } => {
                ErrorCategory::Access
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::CsvError(_) => ErrorCategory::Storage,
            Self::ServiceError { .. } | Self::SerializationError(_) => ErrorCategory::Service,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Access => ErrorSeverity::High,
            ErrorCategory::Provider => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Service | ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::ProviderError { .. } | Self::ApiError(_) => 503,
            Self::NotFound { .. } => 404,
            Self::Forbidden { .. } => 403,
            Self::Conflict { .. } => 409,
            _ => 500,
        }
    }

    /// CLI 退出碼：1 處理錯誤、2 可重試、3 系統錯誤
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn is_provider_failure(&self) -> bool {
        self.category() == ErrorCategory::Provider
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => format!("Invalid aquarium layout: {}", message),
            Self::ProviderError { .. } | Self::ApiError(_) => {
                "The advice provider is currently unavailable".to_string()
            }
            Self::NotFound { entity, id } => format!("{} {} does not exist", entity, id),
            Self::Forbidden { message } | Self::Conflict { message } => message.clone(),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            _ => "An unexpected error occurred".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => {
                "Check the tank dimensions, water type and fish list, then submit again"
            }
            ErrorCategory::Provider => {
                "Retry the request later or verify the provider base URL and API key"
            }
            ErrorCategory::Configuration => {
                "Review the config file or the OPENAI_* / AI_* environment variables"
            }
            ErrorCategory::Access => "Verify the record id and that it belongs to the caller",
            ErrorCategory::Storage => "Check that the input file exists and is readable",
            ErrorCategory::Service => "Retry the request; report it if the problem persists",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let detail = match self.category() {
            ErrorCategory::Service | ErrorCategory::Storage => {
                "An unexpected error occurred".to_string()
            }
            _ => self.to_string(),
        };
        ErrorResponse { detail }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
