pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ai_service::AiServiceClient, memory::InMemoryRepository, openai::OpenAiClient};
pub use config::{AdvisorConfig, ProviderFailurePolicy};
pub use crate::core::evaluator::AquariumAdvisor;
pub use domain::model::{EvaluationResult, EvaluationStatus, FishEntry, LayoutRequest, Unit};
pub use utils::error::{AdvisorError, Result};
