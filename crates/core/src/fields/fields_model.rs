//! Amount field domain models.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::ValidationError;

/// What an empty field is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyBehavior {
    /// An empty field reads as zero.
    #[default]
    Zero,
    /// An empty field has no value.
    Blank,
}

/// Formatting and entry rules shared by every amount field on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub decimal_places: u32,
    pub min_value: Decimal,
    pub max_value: Option<Decimal>,
    pub empty_behavior: EmptyBehavior,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::amount()
    }
}

impl FieldConfig {
    /// Non-negative amount with two decimals and no upper bound.
    pub fn amount() -> Self {
        FieldConfig {
            decimal_places: DISPLAY_DECIMAL_PRECISION,
            min_value: Decimal::ZERO,
            max_value: None,
            empty_behavior: EmptyBehavior::Zero,
        }
    }

    /// Non-negative amount with two decimals bounded above by `max`.
    pub fn capped(max: Decimal) -> Self {
        FieldConfig {
            max_value: Some(max),
            ..Self::amount()
        }
    }

    /// Parses field text. Surrounding whitespace is ignored; anything else
    /// that is not a plain decimal number yields `None`, as does a number too
    /// large to carry `decimal_places` fractional digits.
    pub fn parse(&self, raw: &str) -> Option<Decimal> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return match self.empty_behavior {
                EmptyBehavior::Zero => Some(Decimal::ZERO),
                EmptyBehavior::Blank => None,
            };
        }
        Decimal::from_str(trimmed)
            .ok()
            .filter(|value| self.is_representable(*value))
    }

    /// Whether `value` fits in a decimal at the configured precision.
    pub fn is_representable(&self, value: Decimal) -> bool {
        let mut rescaled = value;
        rescaled.rescale(self.decimal_places);
        rescaled.scale() == self.decimal_places
    }

    /// Rounds half away from zero to the configured precision.
    pub fn round(&self, value: Decimal) -> Decimal {
        let rounded =
            value.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        // -0.004 rounds to a signed zero
        if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        }
    }

    /// Renders a value with exactly `decimal_places` fractional digits.
    pub fn format(&self, value: Decimal) -> String {
        let mut rounded = self.round(value);
        rounded.rescale(self.decimal_places);
        let mut text = rounded.to_string();

        // rescale keeps fewer digits when the integer part fills the mantissa
        let shown = rounded.scale();
        if shown < self.decimal_places {
            if shown == 0 {
                text.push('.');
            }
            text.extend(std::iter::repeat('0').take((self.decimal_places - shown) as usize));
        }
        text
    }

    /// Clamps a value into the field's accepted range.
    pub fn constrain(&self, value: Decimal) -> Decimal {
        let value = value.max(self.min_value);
        match self.max_value {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Checks text the way the field checks a keystroke: the value must parse,
    /// sit inside `[min_value, max_value]` and carry no more than
    /// `decimal_places` fractional digits.
    pub fn validate(&self, raw: &str) -> Result<Decimal, ValidationError> {
        let value = self
            .parse(raw)
            .ok_or_else(|| ValidationError::DecimalParse(raw.to_string()))?;

        if value.normalize().scale() > self.decimal_places {
            return Err(ValidationError::TooManyDecimals {
                value,
                decimal_places: self.decimal_places,
            });
        }
        if value < self.min_value {
            return Err(ValidationError::BelowMinimum {
                value,
                min: self.min_value,
            });
        }
        if let Some(max) = self.max_value {
            if value > max {
                return Err(ValidationError::AboveMaximum { value, max });
            }
        }
        Ok(value)
    }
}

/// A single amount field: the text it shows and the rules it follows.
///
/// Text written by the user is kept literally so that an unparseable entry
/// stays on screen; values written by the calculator are formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField {
    config: FieldConfig,
    text: String,
}

impl AmountField {
    pub fn new(config: FieldConfig) -> Self {
        AmountField {
            config,
            text: String::new(),
        }
    }

    pub fn with_text(config: FieldConfig, text: impl Into<String>) -> Self {
        AmountField {
            config,
            text: text.into(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, raw: impl Into<String>) {
        self.text = raw.into();
    }

    pub fn set_value(&mut self, value: Decimal) {
        self.text = self.config.format(value);
    }

    pub fn value(&self) -> Option<Decimal> {
        self.config.parse(&self.text)
    }
}
