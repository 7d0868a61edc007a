//! HTTP error types
//!
//! Query failures answer `502 Bad Gateway` with
//! `{"error": {"kind": "...", "message": "..."}}`. A missing static page
//! answers `500` with a plain-text body.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use movies_graph::GraphError;
use serde::Serialize;
use thiserror::Error;

/// Request-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Could not read {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Graph(_) => StatusCode::BAD_GATEWAY,
            ApiError::Asset { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Graph(err) => err.kind.as_str(),
            ApiError::Asset { .. } => "asset",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    kind: &'a str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Graph(err) => {
                let body = ErrorBody {
                    error: ErrorDetail {
                        kind: self.kind(),
                        message: err.message.clone(),
                    },
                };
                (status, Json(body)).into_response()
            }
            ApiError::Asset { .. } => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response(),
        }
    }
}

/// Startup and listener errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
