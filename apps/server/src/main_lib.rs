use std::sync::Arc;

use childcare_calculator_core::analytics::{AnalyticsSink, LogAnalyticsSink};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub analytics_sink: Arc<dyn AnalyticsSink>,
}

impl AppState {
    pub fn new(analytics_sink: Arc<dyn AnalyticsSink>) -> Self {
        AppState { analytics_sink }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("SC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state() -> Arc<AppState> {
    // Outbound clicks end up in the request log under the `analytics` target
    let analytics_sink: Arc<dyn AnalyticsSink> = Arc::new(LogAnalyticsSink);
    tracing::info!("Analytics sink: log");
    Arc::new(AppState::new(analytics_sink))
}
