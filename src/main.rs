//! bizdesk-api server.
//!
//! Reads configuration from the environment (and `.env` if present), then serves on `BIND_ADDR:PORT`.

use bizdesk_api::{app, apply_schema, catalog, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bizdesk_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let catalog = catalog()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.database_url)?;

    if config.apply_schema {
        apply_schema(&pool, &catalog).await?;
    }

    let addr = config.listen_addr();
    let state = AppState::new(pool, catalog, config);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("bizdesk-api listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
