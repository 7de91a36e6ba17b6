use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use childcare_calculator_core::{
    constants::{DEFAULT_DEBOUNCE_MS, DISPLAY_DECIMAL_PRECISION, MAX_CONTRIBUTION},
    CalculatorField, ContributionCalculator, FieldConfig,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CalculatorLimits, CalculatorState, CalculatorUpdate},
};

#[utoipa::path(get, path = "/api/v1/calculator/limits", responses((status = 200, body = CalculatorLimits)))]
pub async fn get_limits() -> Json<CalculatorLimits> {
    Json(CalculatorLimits {
        max_contribution: FieldConfig::amount().format(MAX_CONTRIBUTION),
        decimal_places: DISPLAY_DECIMAL_PRECISION,
        default_debounce_ms: DEFAULT_DEBOUNCE_MS,
    })
}

/// Runs the calculator for one field edit and returns what every field shows.
///
/// The already-contributed amount is held to the same rules as the page's
/// input (non-negative, at most the quarterly ceiling, two decimals). The
/// total and pay-in are passed through as typed; text that is not a positive
/// amount clears the derived fields instead of failing.
#[utoipa::path(post, path = "/api/v1/calculator", request_body = CalculatorUpdate, responses((status = 200, body = CalculatorState), (status = 400, description = "Already-contributed amount out of range")))]
pub async fn recalculate(Json(payload): Json<CalculatorUpdate>) -> ApiResult<Json<CalculatorState>> {
    let total_amount = payload.total_amount.unwrap_or_default();
    let already_contributed = payload.already_contributed.unwrap_or_default();
    let pay_in_amount = payload.pay_in_amount.unwrap_or_default();

    let mut calculator =
        ContributionCalculator::from_texts(&total_amount, &already_contributed, &pay_in_amount);
    calculator
        .already_contributed()
        .config()
        .validate(&already_contributed)?;

    let raw = match payload.changed {
        CalculatorField::Total => &total_amount,
        CalculatorField::PayIn => &pay_in_amount,
        CalculatorField::AlreadyContributed => &already_contributed,
    };
    calculator.on_field_changed(payload.changed, raw);
    tracing::debug!(
        "Recalculated from {}: contribution {}",
        payload.changed.as_str(),
        calculator.contribution_amount().text()
    );

    Ok(Json(calculator.snapshot().into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculator/limits", get(get_limits))
        .route("/calculator", post(recalculate))
}
