//! Outbound-link analytics - click events and the sink they are sent to.
//!
//! Tracking is best-effort: [`track_outbound_click`] swallows sink failures so
//! that navigation and the calculator are never affected by analytics.

mod analytics_model;
mod sink;

pub use analytics_model::{
    OutboundClickEvent, OutboundLink, OUTBOUND_CLICK_ACTION, OUTBOUND_LINK_CATEGORY,
};
pub use sink::{
    track_outbound_click, AnalyticsSink, LogAnalyticsSink, MockAnalyticsSink, NoOpAnalyticsSink,
};
