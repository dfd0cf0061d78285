use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use walletlens::config::Config;
use walletlens::server::{build_app, serve};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walletlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let (host, port) = (config.host.clone(), config.port);
    tracing::info!("Starting walletlens {} on {}", walletlens::VERSION, config.address());

    let app = match build_app(config) {
        Ok((_, app)) => app,
        Err(e) => {
            tracing::error!("Failed to build app: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let handle = match serve(app, &host, port).await {
        Ok((actual_port, handle)) => {
            tracing::info!("Listening on http://{}:{}", host, actual_port);
            handle
        }
        Err(e) => {
            tracing::error!("Failed to bind {}:{}: {}", host, port, e);
            return ExitCode::FAILURE;
        }
    };

    match handle.await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server task failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
