//! Childcare Calculator Core - Contribution calculator and page collaborators.
//!
//! This crate holds the calculator that splits a childcare account top-up
//! between the parent's pay-in and the government contribution, together
//! with the small models the page builds around it (input fields, debounced
//! edits, outbound-click analytics, menu and FAQ state). It has no knowledge
//! of HTTP or rendering; adapters live in `apps/`.

pub mod analytics;
pub mod calculator;
pub mod chrome;
pub mod constants;
pub mod debounce;
pub mod errors;
pub mod fields;

pub use calculator::{CalculatorField, CalculatorSnapshot, ContributionCalculator};
pub use fields::{AmountField, EmptyBehavior, FieldConfig};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
