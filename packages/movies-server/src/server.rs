//! HTTP server: router and listener

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ServerError;
use crate::handlers::{self, AppState};

/// Build the axum router
///
/// `/movie/vote/:title` is matched before `/movie/:title` because static
/// segments take priority over parameters.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route("/movie/vote/:title", get(handlers::vote))
        .route("/movie/:title", get(handlers::movie))
        .route("/graph", get(handlers::graph))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub struct MoviesServer {
    addr: SocketAddr,
    state: AppState,
}

impl MoviesServer {
    /// Listen on every interface at `port`
    pub fn new(port: u16, state: AppState) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            state,
        }
    }

    /// Serve until ctrl-c
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr,
                source,
            })?;

        info!("Listening on {}", self.addr);

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
