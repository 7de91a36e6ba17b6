use childcare_calculator_core::{CalculatorField, CalculatorSnapshot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One edit of a calculator field, with the text the other fields show.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorUpdate {
    /// `total`, `payIn` or `alreadyContributed`
    #[schema(value_type = String)]
    pub changed: CalculatorField,
    #[serde(default)]
    pub total_amount: Option<String>,
    #[serde(default)]
    pub already_contributed: Option<String>,
    #[serde(default)]
    pub pay_in_amount: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub total_amount: String,
    pub already_contributed: String,
    pub pay_in_amount: String,
    pub contribution_amount: String,
    pub max_contribution: String,
}

impl From<CalculatorSnapshot> for CalculatorState {
    fn from(s: CalculatorSnapshot) -> Self {
        Self {
            total_amount: s.total_amount,
            already_contributed: s.already_contributed,
            pay_in_amount: s.pay_in_amount,
            contribution_amount: s.contribution_amount,
            max_contribution: s.max_contribution,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorLimits {
    pub max_contribution: String,
    pub decimal_places: u32,
    pub default_debounce_ms: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OutboundClick {
    /// `data-track` key of the clicked link
    pub track: String,
}
