use std::net::SocketAddr;
use anyhow::Context;
use lodge_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lodge_api=debug,lodge_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = lodge_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!(
        min_stay_nights = config.business_rules.min_stay_nights,
        "Starting Lodge API on port {}",
        config.server.port
    );

    let app = app(AppState::in_memory(config.business_rules.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
