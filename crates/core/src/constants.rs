use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Government contribution ceiling per quarter
pub const MAX_CONTRIBUTION: Decimal = dec!(500);

/// Share of a transaction funded by the parent (8 parts of 10)
pub const PAY_IN_SHARE: Decimal = dec!(0.8);

/// Share of a transaction funded by the government top-up (2 parts of 10)
pub const CONTRIBUTION_SHARE: Decimal = dec!(0.2);

/// Contribution per unit of pay-in (2 / 8)
pub const PAY_IN_TO_CONTRIBUTION_RATIO: Decimal = dec!(0.25);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Delay used to coalesce rapid edits of a calculator field
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
