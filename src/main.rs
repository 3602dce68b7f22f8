use std::sync::Arc;

use fixcast::api::router::create_router;
use fixcast::config::AppConfig;
use fixcast::provider::SportsApiClient;
use fixcast::{metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = metrics::init_metrics();

    let provider = match &config.sports_api_key {
        Some(key) => {
            tracing::info!(
                league = config.league_id,
                season = config.season,
                "Sports API client configured"
            );
            Some(Arc::new(SportsApiClient::new(
                reqwest::Client::new(),
                config.sports_api_url.clone(),
                key.clone(),
            )))
        }
        None => {
            tracing::warn!("No sports API key — serving built-in sample fixtures");
            None
        }
    };

    let state = AppState {
        config,
        provider,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
