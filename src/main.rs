use aqua_advisor::app::runner;
use aqua_advisor::config::layout_file::load_layout_request;
use aqua_advisor::utils::logger;
use aqua_advisor::CliConfig;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting aqua-advisor CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match runner::load_config(cli.config.as_deref(), cli.remote.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let outcome = match load_layout_request(&cli.layout) {
        Ok(layout) => runner::evaluate_layout(config, cli.remote.as_deref(), &layout).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            if result.origin.is_fallback() {
                tracing::warn!("⚠️ Model advice unavailable, showing the built-in assessment");
            }
            tracing::info!("✅ Evaluation completed");

            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("❌ Failed to encode result: {}", e);
                        std::process::exit(3);
                    }
                }
            } else {
                println!("{}", result.response);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Evaluation failed: {} (Category: {:?}, Severity: {:?}, Status: {})",
                e,
                e.category(),
                e.severity(),
                e.status_code()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            if cli.json {
                if let Ok(json) = serde_json::to_string(&e.to_error_response()) {
                    println!("{}", json);
                }
            }
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
