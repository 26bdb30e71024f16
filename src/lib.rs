pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod http;
mod middleware;
pub mod models;
pub mod state;

use std::sync::Arc;

use axum::Router;
use config::{Config, StoreKind};
use db::{MemoryVoteStore, PgVoteStore, VoteStore, connect_postgres};
use errors::AppError;
use middleware::cors_layer;
use state::AppState;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;

use crate::http::handlers::not_found_handler;

/// Builds the full application router around an already opened store.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_mode);

    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let store = open_store(&config).await?;

    let port = config.port;
    let app = build_app(AppState::new(store.clone(), config));

    let listener = TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("Backend running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing vote store");
    store.close().await;

    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn VoteStore>, AppError> {
    match config.store {
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| AppError::EnvError("DATABASE_URL must be set".into()))?;
            let pool = connect_postgres(url, config.max_connections).await?;
            tracing::info!(
                "Connected to Postgres (max {} connections)",
                config.max_connections
            );
            Ok(Arc::new(PgVoteStore::new(pool)))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory vote store; votes are lost on restart");
            Ok(Arc::new(MemoryVoteStore::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
