use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; degraded pages are reported at warn level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Starting spell check for: {}", config.base_url);
    ::log::debug!("WebDriver URL: {}", config.webdriver_url);

    match site_spellcheck::run(&config).await {
        Ok(summary) => {
            ::log::info!("{}", summary);
            if let Ok(json) = serde_json::to_string(&summary) {
                ::log::debug!("Run summary: {}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Spell check failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
