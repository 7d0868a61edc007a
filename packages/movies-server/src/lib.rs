//! movies-server - HTTP front for the movie catalog
//!
//! | Path | Response |
//! |---|---|
//! | `GET /` | static `index.html` |
//! | `GET /search?q=` | `[{"movie": {...}}]` |
//! | `GET /movie/:title` | movie with cast |
//! | `GET /movie/vote/:title` | `{"updates": n}` |
//! | `GET /graph?limit=` | `{"nodes": [...], "links": [...]}` |

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::{ConfigError, Neo4jConfig, ServerConfig};
pub use error::{ApiError, ServerError};
pub use handlers::AppState;
pub use server::{build_router, MoviesServer};
