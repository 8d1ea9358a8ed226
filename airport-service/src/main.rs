use std::path::PathBuf;

use airport_service::{
    app::App,
    config::Config,
    error::{init::InitError, runtime::RuntimeError},
    utils::meltdown::{TaggedService, wait_for_shutdown_signals},
};
use clap::Parser;
use meltdown::Meltdown;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Path to the default config file.
    /// Configs in this file can be overridden by environment variables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), RuntimeError> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let mut config = match Config::try_read(args.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to read config: {error}");
            std::process::exit(1);
        }
    };

    // Override telemetry level if verbose flag is provided
    if args.verbose {
        config.telemetry.level = "info,airport_service=trace".to_string();
    }

    telemetry::init_telemetry(&config.telemetry)
        .map_err(InitError::Telemetry)?;

    debug!("telemetry initialized");
    let pretty_config = serde_yml::to_string(&config)
        .expect("config should always be serializable");
    debug!(config = pretty_config, "Creating app with config");

    #[cfg(debug_assertions)]
    tracing::warn!("running in debug mode");

    config.validate().inspect_err(|e| {
        tracing::error!(error = %e, "configuration validation failed");
    })?;
    let mut shutting_down = false;
    let app = App::new(config)?;

    let tasks = ["shutdown-signals", "airport-service"];
    let mut meltdown = Meltdown::new()
        .register(TaggedService::new(
            "shutdown-signals",
            wait_for_shutdown_signals,
        ))
        .register(TaggedService::new("airport-service", app));

    info!(tasks = ?tasks, "starting services");

    while let Some((service, result)) = meltdown.next().await {
        match result {
            Ok(()) => info!(%service, "service stopped successfully"),
            Err(error) => tracing::error!(%service, %error, "service crashed"),
        }

        if !shutting_down {
            info!("propagating shutdown signal...");
            meltdown.trigger();
            shutting_down = true;
        }
    }

    info!("shut down");

    Ok(())
}
