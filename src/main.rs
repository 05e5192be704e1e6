use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use hospital_nav::api::{build_router, cors_layer};
use hospital_nav::config::Config;
use hospital_nav::{QueryService, RoomResolver, RoomsConfig, WalkabilityGrid};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hospital_nav=info".parse()?),
        )
        .init();

    let config = Config::parse();

    let grid = WalkabilityGrid::load_or_fallback(&config.grid_file, config.delimiter);

    let rooms = match &config.rooms_file {
        Some(path) => {
            info!("Loading room tables from {:?}", path);
            RoomsConfig::load(path)?
        }
        None => {
            info!("Using built-in hospital room tables");
            RoomsConfig::hospital()
        }
    };
    let (rooms, blocks) = rooms.into_registries()?;
    info!("{} rooms, {} display blocks", rooms.len(), blocks.len());

    let service = Arc::new(QueryService::with_algorithm(
        Arc::new(grid),
        Arc::new(RoomResolver::new(rooms)),
        Arc::new(blocks),
        config.algorithm.build(),
    ));

    if config.allow_origin.is_none() {
        info!("CORS open to any origin; pass --allow-origin for deployments");
    }
    let app = build_router(service, cors_layer(config.allow_origin.as_deref())?);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
