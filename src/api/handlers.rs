//! Request handlers for the API endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::types::{ErrorResponse, QuoteRequest, QuoteResponse, TariffResponse};
use crate::billing;

/// Computes a savings quote from a JSON submission.
///
/// `POST /quote` + complete body → 200 + `QuoteResponse` JSON
/// `POST /quote` + missing fields → 422 + `ErrorResponse` naming them
/// `POST /quote` + out-of-range values → 422 + `ErrorResponse`
pub async fn post_quote(Json(req): Json<QuoteRequest>) -> impl IntoResponse {
    let missing = req.missing_fields();
    let Some(input) = req.into_input() else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!(
                    "all fields are required to compute a quote, missing: {}",
                    missing.join(", ")
                ),
            }),
        ));
    };

    if let Err(message) = validate_ranges(&input) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse { error: message }),
        ));
    }

    let comparison = billing::compute(&input);
    Ok(Json(QuoteResponse { input, comparison }))
}

/// Returns the fixed regulatory tariff parameters.
///
/// `GET /tariff` → 200 + `TariffResponse` JSON
pub async fn get_tariff() -> Json<TariffResponse> {
    Json(TariffResponse::current())
}

/// Liveness probe.
///
/// `GET /health` → 200
pub async fn get_health() -> StatusCode {
    StatusCode::OK
}

/// Rejects values outside the documented input constraints.
fn validate_ranges(input: &billing::QuoteInput) -> Result<(), String> {
    if !input.average_consumption_kwh.is_finite() || input.average_consumption_kwh < 0.0 {
        return Err("average_consumption_kwh must be a finite value >= 0".to_string());
    }
    if !input.public_lighting_fee.is_finite() || input.public_lighting_fee < 0.0 {
        return Err("public_lighting_fee must be a finite value >= 0".to_string());
    }
    if !(0.0..=100.0).contains(&input.contracted_discount_pct) {
        return Err("contracted_discount_pct must be in [0, 100]".to_string());
    }
    Ok(())
}
