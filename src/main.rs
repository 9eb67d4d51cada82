//! Equipment Registry Server
//!
//! Serves the equipment inventory over a REST JSON API.

use std::net::SocketAddr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use equipment_registry::{api, config::LoggingConfig, AppConfig, AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting Equipment Registry v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Using data file {}", config.storage.data_file.display());

    // Save server address before moving config
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state and router
    let state = AppState::new(config);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Install the global subscriber. The returned guard flushes the log file
/// writer on drop and must live as long as the process.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("equipment_registry={},tower_http=debug", logging.level).into()
    });

    let stdout_layer = if logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().pretty().boxed()
    };

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "equipment-registry.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
