use std::path::PathBuf;

use clap::Parser;
use mock_server::{AppState, Config, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Path to a YAML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    address: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,

    /// Reject every upload with a 500.
    #[arg(long)]
    fail_uploads: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("{}=trace", env!("CARGO_CRATE_NAME")).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config: Config = if let Some(path) = args.config {
        serde_yml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    } else {
        Config::default()
    };
    if let Some(address) = args.address {
        config.address = address;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.fail_uploads |= args.fail_uploads;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.address, config.port))
            .await
            .unwrap();
    let app = router(AppState::new(config));
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
