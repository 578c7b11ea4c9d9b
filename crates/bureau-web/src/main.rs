//! Main entry point for the bureau usage dashboard server

use bureau_core::{
    Config, context_error,
    context_error::{Result, ResultExt},
    init_logging,
};
use bureau_web::build_app;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    // Logging level comes from config, so load it before anything logs.
    // A missing config file is fine; an invalid one is not.
    let config = Config::load().with_context(|| "Invalid configuration")?;

    init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        source = ?config.data.source,
        "Starting bureau usage dashboard"
    );

    let app = build_app(config.clone())
        .inspect_err(|e| error!("Failed to build application: {}", e))
        .with_context(|| "Application setup failed")?
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Dashboard: http://{}/reports/bureau-usage", addr);
    info!("Health:    http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| context_error!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
