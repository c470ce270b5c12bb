//! Learnow API server entry point: logging, store setup, router, listener.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnow_api::api;
use learnow_api::infra::init_db;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "learnow_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("learnow.db"));
    tracing::info!("DB path: {:?}", db_path);

    let pool = match init_db(&db_path) {
        Ok(pool) => Arc::new(pool),
        Err(e) => {
            tracing::error!("DB init failed: {}", e);
            process::exit(1);
        }
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };
    tracing::info!("Server is running at http://localhost:{}", port);

    if let Err(e) = axum::serve(listener, api::router(pool)).await {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}
