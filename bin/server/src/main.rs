extern crate tracing as log;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;
pub mod extract;
pub mod internal;
pub mod services;
pub mod state;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::extract::Auth;
    pub use crate::state::ServerState;

    pub use schema::aliases::*;

    pub use axum::extract::{Path, State};
    pub use axum::Json;
    pub use serde::{Deserialize, Serialize};
}

use tokio::net::TcpListener;
use tokio::signal;

use crate::state::ServerState;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::CliOptions::parse()?;

    // optional in production deployments
    let _ = dotenv::dotenv();

    let filter = match args.verbose {
        None | Some(0) => "info",
        Some(1) => "debug",
        Some(_) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config = config::Config::load();

    log::info!("Connecting to database");
    let pool = db::connect(&config.db).await?;
    db::migrate(&pool).await?;

    let state = ServerState::new(config, pool)?;

    let addr = state.config.general.bind_address.clone();
    let app = api::router(state);

    log::info!("Binding to {addr}");
    let listener = TcpListener::bind(&addr).await?;

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    log::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        log::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        log::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
