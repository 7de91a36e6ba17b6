//! Calculator domain models.

use serde::{Deserialize, Serialize};

/// An editable calculator field. The contribution field is derived and
/// never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorField {
    Total,
    PayIn,
    AlreadyContributed,
}

impl CalculatorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorField::Total => "total",
            CalculatorField::PayIn => "payIn",
            CalculatorField::AlreadyContributed => "alreadyContributed",
        }
    }
}

/// Which amount drove a recalculation, and therefore which one is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    Total,
    PayIn,
}

/// Text shown in every calculator field after the last recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSnapshot {
    pub total_amount: String,
    pub already_contributed: String,
    pub pay_in_amount: String,
    pub contribution_amount: String,
    /// Contribution still available this quarter.
    pub max_contribution: String,
}
