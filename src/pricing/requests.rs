//! Request DTOs for estimate API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{Dimensions, ItemSpec};

/// Dimensions block as sent by clients (millimetres)
#[derive(Debug, Deserialize)]
pub struct DimensionsRequest {
    #[serde(rename = "L")]
    pub length: u32,
    #[serde(rename = "W")]
    pub width: u32,
    #[serde(rename = "H")]
    pub height: u32,
}

impl From<DimensionsRequest> for Dimensions {
    fn from(dims: DimensionsRequest) -> Self {
        Dimensions::new(dims.length, dims.width, dims.height)
    }
}

/// Request body for the simple estimate
#[derive(Debug, Deserialize)]
pub struct SimpleEstimateRequest {
    pub spec: SimpleSpecRequest,
}

/// Item spec for the simple estimate; every field is required
#[derive(Debug, Deserialize)]
pub struct SimpleSpecRequest {
    pub quantity: u32,
    pub dimensions_mm: DimensionsRequest,
    pub finish: String,
    pub crates_required: String,
    pub ownership: String,
}

impl From<SimpleSpecRequest> for ItemSpec {
    fn from(spec: SimpleSpecRequest) -> Self {
        ItemSpec {
            quantity: spec.quantity,
            dimensions: spec.dimensions_mm.into(),
            shape: default_shape(),
            material: default_material(),
            finish: spec.finish,
            complexity: default_complexity(),
            crates_required: spec.crates_required,
            ownership: spec.ownership,
        }
    }
}

/// Request body for the advanced estimate
#[derive(Debug, Deserialize)]
pub struct AdvancedEstimateRequest {
    pub spec: AdvancedSpecRequest,
}

/// Item spec for the advanced estimate
#[derive(Debug, Deserialize)]
pub struct AdvancedSpecRequest {
    pub quantity: u32,
    pub dimensions_mm: DimensionsRequest,
    #[serde(default = "default_shape")]
    pub shape: String,
    #[serde(default = "default_material")]
    pub material: String,
    #[serde(default = "default_finish")]
    pub finish: String,
    #[serde(default = "default_complexity")]
    pub complexity: Decimal,
    #[serde(default = "default_crates_required")]
    pub crates_required: String,
    #[serde(default = "default_ownership")]
    pub ownership: String,
}

impl From<AdvancedSpecRequest> for ItemSpec {
    fn from(spec: AdvancedSpecRequest) -> Self {
        ItemSpec {
            quantity: spec.quantity,
            dimensions: spec.dimensions_mm.into(),
            shape: spec.shape,
            material: spec.material,
            finish: spec.finish,
            complexity: spec.complexity,
            crates_required: spec.crates_required,
            ownership: spec.ownership,
        }
    }
}

fn default_shape() -> String {
    "box".to_string()
}

fn default_material() -> String {
    "mdf".to_string()
}

fn default_finish() -> String {
    "roller_paint".to_string()
}

fn default_complexity() -> Decimal {
    Decimal::ONE
}

fn default_crates_required() -> String {
    "no".to_string()
}

fn default_ownership() -> String {
    "new".to_string()
}
