//! Server configuration (environment loading)
//!
//! Every setting has a default so the server starts against the public demo
//! database with no environment at all.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_URI: &str = "neo4j+s://demo.neo4jlabs.com";
pub const DEFAULT_USER: &str = "movies";
pub const DEFAULT_PASSWORD: &str = "movies";
pub const DEFAULT_DATABASE: &str = "movies";
pub const DEFAULT_VERSION: &str = "4";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Neo4j connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    /// `None` selects the server's default database
    pub database: Option<String>,
}

impl fmt::Debug for Neo4jConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jConfig")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub neo4j: Neo4jConfig,
    pub port: u16,
    /// Directory holding `index.html`
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    ///
    /// | Key | Default |
    /// |---|---|
    /// | `NEO4J_URI` | `neo4j+s://demo.neo4jlabs.com` |
    /// | `NEO4J_USER` | `movies` |
    /// | `NEO4J_PASSWORD` | `movies` |
    /// | `NEO4J_DATABASE` | `movies` |
    /// | `NEO4J_VERSION` | `4` |
    /// | `PORT` | `8080` |
    /// | `MOVIES_PUBLIC_DIR` | `public/` next to this crate's manifest |
    ///
    /// The database name is dropped unless `NEO4J_VERSION` starts with `4`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = get("NEO4J_DATABASE", DEFAULT_DATABASE);
        let database = get("NEO4J_VERSION", DEFAULT_VERSION)
            .starts_with('4')
            .then_some(database);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let public_dir = lookup("MOVIES_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_public_dir);

        Ok(Self {
            neo4j: Neo4jConfig {
                uri: get("NEO4J_URI", DEFAULT_URI),
                user: get("NEO4J_USER", DEFAULT_USER),
                password: get("NEO4J_PASSWORD", DEFAULT_PASSWORD),
                database,
            },
            port,
            public_dir,
        })
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}
