use anyhow::Context;

use klimatpro_api::app::{self, services::AppServices};
use klimatpro_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    klimatpro_observability::init();

    let config = ApiConfig::from_env()?;
    let services = AppServices::with_partner_feed().context("embedded partner feed is invalid")?;
    tracing::info!(products = services.catalog().len(), "catalog loaded");

    let app = app::build_app(std::sync::Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
