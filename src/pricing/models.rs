//! Domain models for fabrication estimates.
//!
//! These are plain values built per request and dropped with the response.

use rust_decimal::Decimal;

use super::rates::{
    BASE_LABOUR_HOURS, FINISH_LABOUR_MULTIPLIERS, MATERIAL_RATES, SIMPLE_MATERIAL_RATE,
};

/// External box dimensions in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
}

impl Dimensions {
    pub fn new(length_mm: u32, width_mm: u32, height_mm: u32) -> Self {
        Self {
            length_mm,
            width_mm,
            height_mm,
        }
    }
}

/// Full description of one item to be estimated.
///
/// `quantity`, `shape` and `ownership` are carried for the caller's records
/// but do not enter the price.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub quantity: u32,
    pub dimensions: Dimensions,
    pub shape: String,
    pub material: String,
    pub finish: String,
    pub complexity: Decimal,
    pub crates_required: String,
    pub ownership: String,
}

impl ItemSpec {
    /// Only the literal "yes" requests a crate
    pub fn crates_required(&self) -> bool {
        self.crates_required == "yes"
    }
}

/// Which rate set an estimate is priced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateMode {
    /// Fixed material rate, no finish or complexity scaling
    Simple,
    /// Per-material rate, finish multiplier and complexity scaling
    Advanced,
}

impl EstimateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimateMode::Simple => "simple",
            EstimateMode::Advanced => "advanced",
        }
    }
}

/// Rates applied by the shared pricing function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingProfile {
    pub material_rate: Decimal,
    pub finish_multiplier: Decimal,
    pub complexity: Decimal,
    pub base_labour_hours: Decimal,
}

impl PricingProfile {
    pub fn simple() -> Self {
        Self {
            material_rate: SIMPLE_MATERIAL_RATE,
            finish_multiplier: Decimal::ONE,
            complexity: Decimal::ONE,
            base_labour_hours: BASE_LABOUR_HOURS,
        }
    }

    pub fn advanced(spec: &ItemSpec) -> Self {
        Self {
            material_rate: MATERIAL_RATES.rate(&spec.material),
            finish_multiplier: FINISH_LABOUR_MULTIPLIERS.rate(&spec.finish),
            complexity: spec.complexity,
            base_labour_hours: BASE_LABOUR_HOURS,
        }
    }

    pub fn for_mode(mode: EstimateMode, spec: &ItemSpec) -> Self {
        match mode {
            EstimateMode::Simple => Self::simple(),
            EstimateMode::Advanced => Self::advanced(spec),
        }
    }
}

/// Geometry-derived quantities shared by both estimate modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTakeoff {
    pub area_m2: Decimal,
    pub sheets: u64,
    pub paint_litres: u64,
}

/// Priced result; every amount is rounded to cents on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    pub material_cost: Decimal,
    pub paint_cost: Decimal,
    pub labour_cost: Decimal,
    pub crate_cost: Decimal,
    pub total: Decimal,
    pub currency: String,
}
