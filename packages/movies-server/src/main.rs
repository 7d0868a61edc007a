use std::sync::Arc;

use anyhow::Context;
use movies_graph::{MovieService, Neo4jMovieGraph};
use movies_server::{AppState, MoviesServer, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("movies_server=info,movies_graph=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    info!(?config, "configuration loaded");

    // Startup aborts without a database connection
    let neo4j = &config.neo4j;
    let graph = Neo4jMovieGraph::connect(
        &neo4j.uri,
        &neo4j.user,
        &neo4j.password,
        neo4j.database.as_deref(),
    )
    .await
    .context("Could not connect to Neo4j")?;

    let state = AppState::new(MovieService::new(Arc::new(graph)), config.public_dir.clone());
    let server = MoviesServer::new(config.port, state);
    info!("Running on port {}, database is at {}", config.port, neo4j.uri);

    server.run().await?;
    Ok(())
}
