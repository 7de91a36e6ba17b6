//! Contribution calculator module - the linked total / pay-in fields and the
//! government contribution cap.

mod calculator_model;
mod calculator_service;
mod calculator_session;

mod calculator_service_tests;

pub use calculator_model::{CalculatorField, CalculatorSnapshot, UpdateOrigin};
pub use calculator_service::ContributionCalculator;
pub use calculator_session::CalculatorSession;
