use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub const OUTBOUND_CLICK_ACTION: &str = "click";
pub const OUTBOUND_LINK_CATEGORY: &str = "Outbound Link";

/// Links that leave the site and are tracked. Each is identified on the page
/// by its `data-track` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutboundLink {
    SignIn,
    EligibilityCheck,
    ProviderSearch,
    Apply,
}

impl OutboundLink {
    pub const ALL: [OutboundLink; 4] = [
        OutboundLink::SignIn,
        OutboundLink::EligibilityCheck,
        OutboundLink::ProviderSearch,
        OutboundLink::Apply,
    ];

    pub fn tracking_key(&self) -> &'static str {
        match self {
            OutboundLink::SignIn => "sign-in",
            OutboundLink::EligibilityCheck => "eligibility-check",
            OutboundLink::ProviderSearch => "provider-search",
            OutboundLink::Apply => "apply",
        }
    }

    /// Label reported with the click: the link's `data-track` key.
    pub fn label(&self) -> &'static str {
        self.tracking_key()
    }
}

impl FromStr for OutboundLink {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OutboundLink::ALL
            .into_iter()
            .find(|link| link.tracking_key() == s.trim())
            .ok_or_else(|| ValidationError::UnknownTrackingKey(s.to_string()))
    }
}

/// A labeled outbound click, shaped like the event the page reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundClickEvent {
    pub action: String,
    pub event_category: String,
    pub event_label: String,
}

impl OutboundClickEvent {
    pub fn new(link: OutboundLink) -> Self {
        OutboundClickEvent {
            action: OUTBOUND_CLICK_ACTION.to_string(),
            event_category: OUTBOUND_LINK_CATEGORY.to_string(),
            event_label: link.label().to_string(),
        }
    }
}

impl From<OutboundLink> for OutboundClickEvent {
    fn from(link: OutboundLink) -> Self {
        OutboundClickEvent::new(link)
    }
}
