//! Estimate route handlers

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};

use crate::error::Result;

use super::models::ItemSpec;
use super::requests::{AdvancedEstimateRequest, SimpleEstimateRequest};
use super::responses::{AdvancedEstimateResponse, SimpleEstimateResponse};
use super::services::{estimate_advanced, estimate_simple, validate_spec};

/// Estimate routes, mounted under `/cost`
pub fn router() -> Router {
    Router::new()
        .route("/cost/estimate", post(simple_estimate))
        .route("/cost/advanced-estimate", post(advanced_estimate))
}

/// Simple estimate: fixed material rate, no finish or complexity scaling
pub async fn simple_estimate(
    payload: std::result::Result<Json<SimpleEstimateRequest>, JsonRejection>,
) -> Result<Json<SimpleEstimateResponse>> {
    let Json(request) = payload?;
    let spec = ItemSpec::from(request.spec);
    validate_spec(&spec)?;

    Ok(Json(estimate_simple(&spec).into()))
}

/// Advanced estimate: material rate table, finish multiplier, complexity
pub async fn advanced_estimate(
    payload: std::result::Result<Json<AdvancedEstimateRequest>, JsonRejection>,
) -> Result<Json<AdvancedEstimateResponse>> {
    let Json(request) = payload?;
    let spec = ItemSpec::from(request.spec);
    validate_spec(&spec)?;

    Ok(Json(estimate_advanced(&spec).into()))
}
