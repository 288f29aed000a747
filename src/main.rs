// src/main.rs
use clap::Parser;
use eurobasket_stats::cli::{Args, is_config_operation};
use eurobasket_stats::commands::{
    apply_cli_overrides, handle_config_update_command, handle_list_config_command,
    handle_report_command,
};
use eurobasket_stats::config::Config;
use eurobasket_stats::error::AppError;
use eurobasket_stats::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run without logging or network access
    if is_config_operation(&args) {
        if args.list_config {
            return handle_list_config_command().await;
        }
        return handle_config_update_command(&args).await;
    }

    let mut config = Config::load().await?;
    apply_cli_overrides(&mut config, &args)?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");
    tracing::info!(
        "Using API {} with root resource {}",
        config.api_base_url,
        config.root_path
    );

    handle_report_command(&args, &config).await
}
