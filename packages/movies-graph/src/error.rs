//! Error types for movies-graph

use std::fmt;
use thiserror::Error;

/// Graph error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Could not reach or authenticate against the graph database
    Connection,
    /// Query execution failed (syntax, authorization, transient server errors)
    Query,
    /// Result stream could not be read
    Decode,
    /// Configuration errors
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Connection => "connection",
            ErrorKind::Query => "query",
            ErrorKind::Decode => "decode",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Graph error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct GraphError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl GraphError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Query, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

// Neo4j error conversions
#[cfg(feature = "neo4j")]
impl From<neo4rs::Error> for GraphError {
    fn from(err: neo4rs::Error) -> Self {
        GraphError::query(format!("Neo4j error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    // ═══════════════════════════════════════════════════════════════════════
    // Error Construction Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_query_error() {
        let err = GraphError::query("Invalid input 'MATCHH'");
        assert_eq!(err.kind, ErrorKind::Query);
        assert_eq!(err.message, "Invalid input 'MATCHH'");
        assert!(err.source.is_none());

        assert_eq!(format!("{}", err), "[query] Invalid input 'MATCHH'");
    }

    #[test]
    fn test_connection_error() {
        let err = GraphError::connection("Connection refused");
        assert_eq!(err.kind, ErrorKind::Connection);
        assert_eq!(format!("{}", err), "[connection] Connection refused");
    }

    #[test]
    fn test_config_and_decode_errors() {
        assert_eq!(GraphError::config("bad port").kind, ErrorKind::Config);
        assert_eq!(GraphError::decode("stream closed").kind, ErrorKind::Decode);
    }

    #[test]
    fn test_with_source() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer");
        let err = GraphError::connection("lost bolt connection").with_source(io_err);

        assert_eq!(err.kind, ErrorKind::Connection);
        let source = err.source().unwrap();
        assert!(source.to_string().contains("reset by peer"));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ErrorKind Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::Connection.as_str(), "connection");
        assert_eq!(ErrorKind::Query.as_str(), "query");
        assert_eq!(ErrorKind::Decode.as_str(), "decode");
        assert_eq!(ErrorKind::Config.as_str(), "config");
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(GraphError::query("boom"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Query);
    }
}
