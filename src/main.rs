//! Marathon - Application Entry Point

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marathon::{config::CONFIG, create_router, db, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting marathon server...");

    let db_pool = db::connect(&CONFIG.database).await?;

    let state = AppState::new(db_pool, CONFIG.clone());
    let app = create_router(state)?;

    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        allowed_origin = %CONFIG.cors.allowed_origin,
        "Server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
