//! Response DTOs for estimate API endpoints.
//!
//! Amounts go out as JSON numbers, matching what existing clients parse.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::CostBreakdown;

/// Cost fields of the simple estimate
#[derive(Debug, Serialize)]
pub struct SimpleCostFields {
    #[serde(with = "rust_decimal::serde::float")]
    pub materials: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub paint: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub labour: Decimal,
    #[serde(rename = "crate", with = "rust_decimal::serde::float")]
    pub crate_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Response for the simple estimate
#[derive(Debug, Serialize)]
pub struct SimpleEstimateResponse {
    pub estimate: SimpleCostFields,
    pub currency: String,
}

impl From<CostBreakdown> for SimpleEstimateResponse {
    fn from(cost: CostBreakdown) -> Self {
        Self {
            estimate: SimpleCostFields {
                materials: cost.material_cost,
                paint: cost.paint_cost,
                labour: cost.labour_cost,
                crate_cost: cost.crate_cost,
                total: cost.total,
            },
            currency: cost.currency,
        }
    }
}

/// Cost fields of the advanced estimate
#[derive(Debug, Serialize)]
pub struct AdvancedCostFields {
    #[serde(with = "rust_decimal::serde::float")]
    pub material_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub paint_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub labour_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub crate_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Response for the advanced estimate
#[derive(Debug, Serialize)]
pub struct AdvancedEstimateResponse {
    pub estimate: AdvancedCostFields,
    pub currency: String,
}

impl From<CostBreakdown> for AdvancedEstimateResponse {
    fn from(cost: CostBreakdown) -> Self {
        Self {
            estimate: AdvancedCostFields {
                material_cost: cost.material_cost,
                paint_cost: cost.paint_cost,
                labour_cost: cost.labour_cost,
                crate_cost: cost.crate_cost,
                total: cost.total,
            },
            currency: cost.currency,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
