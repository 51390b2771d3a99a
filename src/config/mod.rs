pub mod env_config;
pub mod layout_file;
pub mod toml_config;

pub use toml_config::{AdvisorConfig, ProviderFailurePolicy};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "aqua-advisor")]
#[command(about = "Aquarium layout compatibility advisor")]
pub struct CliConfig {
    /// Layout request to evaluate (.json or .toml)
    #[arg(long)]
    pub layout: String,

    /// TOML configuration file; falls back to OPENAI_* / AI_* environment variables
    #[arg(long)]
    pub config: Option<String>,

    /// Send the layout to a running advice service instead of calling the model directly
    #[arg(long)]
    pub remote: Option<String>,

    #[arg(long, help = "Print the evaluation result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
