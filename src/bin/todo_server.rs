//! Serves the to-do REST API.
//!
//! Configuration is read from the environment (and a `.env` file when
//! present); see [`todo_service::config`] for the recognised variables.
//! `RUST_LOG` controls log filtering.

use std::process::ExitCode;
use std::sync::Arc;

use mockable::DefaultClock;
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use todo_service::{
    config::{ConfigError, ServerConfig, StorageMode},
    http::{self, AppState, auth::ApiKeyGate},
    todo::{
        adapters::{memory::InMemoryTodoRepository, sqlite::SqliteTodoRepository},
        ports::{TodoRepository, TodoRepositoryError},
        services::{TodoLifecycleError, seed_demo_items},
    },
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Failures that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("storage setup failed: {0}")]
    Storage(#[from] TodoRepositoryError),
    #[error("demo seeding failed: {0}")]
    Seed(#[from] TodoLifecycleError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "to-do service stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_service=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    let repository: Arc<dyn TodoRepository> = match config.storage {
        StorageMode::InMemory => Arc::new(InMemoryTodoRepository::new()),
        StorageMode::Sqlite => Arc::new(SqliteTodoRepository::in_memory()?),
    };
    let state = AppState::new(
        repository,
        Arc::new(DefaultClock),
        ApiKeyGate::new(&config.api_key)?,
    );

    if config.seed_demo {
        seed_demo_items(&state.todos).await?;
    }

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        storage = ?config.storage,
        api_key_header = %config.api_key.header_name,
        "to-do service listening"
    );

    axum::serve(listener, http::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("to-do service shut down");
    Ok(())
}

/// Completes on Ctrl+C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
