pub mod error;
pub mod handlers;

pub use error::ApiError;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::SharedConfig;
use crate::exchange::MarketData;

#[derive(Clone)]
pub struct AppState {
    pub config: SharedConfig,
    pub market: Arc<dyn MarketData>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/data", get(handlers::get_data))
        .route("/calculate", post(handlers::calculate))
        .with_state(state)
}

/// Serve on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Risk calculator listening on http://{}", addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await
        .context("Server error")
}
