//! Analytics sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::errors::AnalyticsError;

use super::analytics_model::{OutboundClickEvent, OutboundLink};

/// Receiver for outbound click events.
///
/// `send()` must not block on the network; callers go through
/// [`track_outbound_click`], which never lets an error escape.
pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: &OutboundClickEvent) -> Result<(), AnalyticsError>;
}

/// Reports an outbound click. Sink failures are logged and dropped.
pub fn track_outbound_click(sink: &dyn AnalyticsSink, link: OutboundLink) {
    let event = OutboundClickEvent::new(link);
    if let Err(e) = sink.send(&event) {
        warn!("Analytics tracking failed for '{}': {}", event.event_label, e);
    }
}

/// Discards events.
#[derive(Clone, Default)]
pub struct NoOpAnalyticsSink;

impl AnalyticsSink for NoOpAnalyticsSink {
    fn send(&self, _event: &OutboundClickEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// Writes each event as a structured log line under the `analytics` target.
#[derive(Clone, Default)]
pub struct LogAnalyticsSink;

impl AnalyticsSink for LogAnalyticsSink {
    fn send(&self, event: &OutboundClickEvent) -> Result<(), AnalyticsError> {
        let payload =
            serde_json::to_string(event).map_err(|e| AnalyticsError::Rejected(e.to_string()))?;
        info!(target: "analytics", "{}", payload);
        Ok(())
    }
}

/// Mock sink for testing - collects sent events, or fails every send.
#[derive(Clone, Default)]
pub struct MockAnalyticsSink {
    events: Arc<Mutex<Vec<OutboundClickEvent>>>,
    failure: Option<AnalyticsError>,
}

impl MockAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every send fails with `error`.
    pub fn failing(error: AnalyticsError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<OutboundClickEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl AnalyticsSink for MockAnalyticsSink {
    fn send(&self, event: &OutboundClickEvent) -> Result<(), AnalyticsError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
