//! D-Shield mock API entry point.
//!
//! Serves the EmBrain, Social Dome, Napoleon and Relationship Analysis demo
//! endpoints from in-memory fixture data.

use std::sync::Arc;

use dshield_api::{
    config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER},
    errors::ServerError,
    server,
};
use dshield_repository::MockDataService;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing(format: LogFormat) -> Result<(), ServerError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true).compact())
            .try_init(),
    };
    result.map_err(|e| ServerError::tracing(e.to_string()))?;

    info!(
        service_name = "dshield-api",
        service_version = env!("CARGO_PKG_VERSION"),
        log_format = ?format,
        "Tracing initialized"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_tracing(LogFormat::from_env())?;

    info!("Starting D-Shield mock backend");

    let config = ServerConfig::from_env();
    let service = Arc::new(MockDataService::with_config(config.mock_data_config()));
    let app = server::create_app(service);

    if let Err(e) = server::run_server(app, config.socket_addr()).await {
        error!(error = %e, "Server error");
        return Err(e);
    }
    Ok(())
}
