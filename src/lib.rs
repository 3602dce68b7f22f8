pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod scoring;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::provider::SportsApiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` means no provider credential is configured and the service
    /// scores the built-in sample fixtures.
    pub provider: Option<Arc<SportsApiClient>>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
