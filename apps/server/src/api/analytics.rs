use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use childcare_calculator_core::analytics::{track_outbound_click, OutboundLink};

use crate::{error::ApiResult, main_lib::AppState, models::OutboundClick};

/// Records a click on an outbound link. Sink failures are logged and the
/// request still succeeds.
#[utoipa::path(post, path = "/api/v1/analytics/outbound-click", request_body = OutboundClick, responses((status = 204), (status = 400, description = "Unknown tracking key")))]
pub async fn track_outbound_click_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OutboundClick>,
) -> ApiResult<StatusCode> {
    let link: OutboundLink = body.track.parse()?;
    track_outbound_click(state.analytics_sink.as_ref(), link);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics/outbound-click", post(track_outbound_click_route))
}
