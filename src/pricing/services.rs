//! Estimate service functions.
//!
//! `estimate` is total and deterministic: any `ItemSpec` yields a breakdown.
//! `validate_spec` is the gate the HTTP layer applies before estimating.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculators::{price_item, takeoff};
use super::models::{CostBreakdown, EstimateMode, ItemSpec, PricingProfile};

/// Estimate request validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidSpec { field: String, reason: String },
}

impl PricingError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        PricingError::InvalidSpec {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            PricingError::InvalidSpec { field, .. } => field,
        }
    }
}

/// Reject specs that cannot describe a real item.
///
/// Zero dimensions, zero quantity and non-positive complexity are refused.
/// Large complexities are accepted; pricing saturates rather than overflows.
/// Categorical tags are never validated; unknown ones price at the table
/// defaults.
pub fn validate_spec(spec: &ItemSpec) -> Result<(), PricingError> {
    if spec.quantity == 0 {
        return Err(PricingError::invalid("quantity", "must be at least 1"));
    }

    let dims = &spec.dimensions;
    for (field, value) in [
        ("dimensions_mm.L", dims.length_mm),
        ("dimensions_mm.W", dims.width_mm),
        ("dimensions_mm.H", dims.height_mm),
    ] {
        if value == 0 {
            return Err(PricingError::invalid(field, "must be greater than 0"));
        }
    }

    if spec.complexity <= Decimal::ZERO {
        return Err(PricingError::invalid("complexity", "must be greater than 0"));
    }

    Ok(())
}

/// Estimate the cost of one item.
///
/// Geometry is shared between modes; only the rate profile differs.
pub fn estimate(spec: &ItemSpec, mode: EstimateMode) -> CostBreakdown {
    let surface = takeoff(&spec.dimensions);
    let profile = PricingProfile::for_mode(mode, spec);
    let breakdown = price_item(&surface, &profile, spec.crates_required());

    tracing::debug!(
        mode = mode.as_str(),
        area_m2 = %surface.area_m2,
        sheets = surface.sheets,
        paint_litres = surface.paint_litres,
        material = %spec.material,
        finish = %spec.finish,
        complexity = %spec.complexity,
        quantity = spec.quantity,
        shape = %spec.shape,
        ownership = %spec.ownership,
        total = %breakdown.total,
        "Estimate calculated"
    );

    breakdown
}

/// Fixed material rate, no finish or complexity scaling
pub fn estimate_simple(spec: &ItemSpec) -> CostBreakdown {
    estimate(spec, EstimateMode::Simple)
}

/// Per-material rate, finish multiplier and complexity scaling
pub fn estimate_advanced(spec: &ItemSpec) -> CostBreakdown {
    estimate(spec, EstimateMode::Advanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::Dimensions;

    fn spec() -> ItemSpec {
        ItemSpec {
            quantity: 1,
            dimensions: Dimensions::new(600, 400, 300),
            shape: "box".to_string(),
            material: "mdf".to_string(),
            finish: "roller_paint".to_string(),
            complexity: dec!(1.0),
            crates_required: "no".to_string(),
            ownership: "new".to_string(),
        }
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::invalid("complexity", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'complexity': must be greater than 0"
        );
        assert_eq!(err.field(), "complexity");
    }

    #[test]
    fn test_validate_accepts_reference_spec() {
        assert!(validate_spec(&spec()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let mut item = spec();
        item.dimensions.width_mm = 0;
        let err = validate_spec(&item).unwrap_err();
        assert_eq!(err.field(), "dimensions_mm.W");
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut item = spec();
        item.quantity = 0;
        assert_eq!(validate_spec(&item).unwrap_err().field(), "quantity");
    }

    #[test]
    fn test_validate_complexity_bounds() {
        let mut item = spec();
        item.complexity = dec!(0);
        assert!(validate_spec(&item).is_err());
        item.complexity = dec!(-1.3);
        assert!(validate_spec(&item).is_err());
        item.complexity = dec!(0.01);
        assert!(validate_spec(&item).is_ok());
        item.complexity = Decimal::from_i128_with_scale(10_i128.pow(28), 0);
        assert!(validate_spec(&item).is_ok());
    }

    #[test]
    fn test_validate_ignores_categorical_tags() {
        let mut item = spec();
        item.material = "unobtainium".to_string();
        item.crates_required = "maybe".to_string();
        item.ownership = "borrowed".to_string();
        assert!(validate_spec(&item).is_ok());
    }

    #[test]
    fn test_estimate_simple_reference_scenario() {
        let cost = estimate_simple(&spec());
        assert_eq!(cost.material_cost, dec!(50));
        assert_eq!(cost.paint_cost, dec!(10));
        assert_eq!(cost.labour_cost, dec!(504.99));
        assert_eq!(cost.crate_cost, dec!(0));
        assert_eq!(cost.total, dec!(564.99));
    }

    #[test]
    fn test_estimate_advanced_reference_scenario() {
        let mut item = spec();
        item.material = "ply".to_string();
        item.finish = "2pac".to_string();
        item.complexity = dec!(1.3);
        item.crates_required = "yes".to_string();

        let cost = estimate_advanced(&item);
        assert_eq!(cost.material_cost, dec!(70));
        assert_eq!(cost.paint_cost, dec!(10));
        // 9 * 1.3 * 1.3 = 15.21 h; 15.21 * 56.11 = 853.4331
        assert_eq!(cost.labour_cost, dec!(853.43));
        assert_eq!(cost.crate_cost, dec!(430));
        assert_eq!(cost.total, dec!(1363.43));
    }

    #[test]
    fn test_simple_mode_ignores_material_finish_and_complexity() {
        let mut item = spec();
        item.material = "acrylic".to_string();
        item.finish = "2pac".to_string();
        item.complexity = dec!(3);

        assert_eq!(estimate_simple(&item), estimate_simple(&spec()));
    }

    #[test]
    fn test_advanced_unknown_tags_match_defaults() {
        let mut unknown = spec();
        unknown.material = "walnut".to_string();
        unknown.finish = "gold_leaf".to_string();

        assert_eq!(estimate_advanced(&unknown), estimate_advanced(&spec()));
    }

    #[test]
    fn test_advanced_defaults_match_simple() {
        assert_eq!(estimate_advanced(&spec()), estimate_simple(&spec()));
    }

    #[test]
    fn test_unused_fields_do_not_change_price() {
        let mut item = spec();
        item.quantity = 25;
        item.shape = "cylinder".to_string();
        item.ownership = "rental".to_string();

        assert_eq!(estimate_advanced(&item), estimate_advanced(&spec()));
    }

    #[test]
    fn test_crate_flag_other_values_add_nothing() {
        let base = estimate_advanced(&spec());
        for flag in ["no", "Yes", "true", "1", ""] {
            let mut item = spec();
            item.crates_required = flag.to_string();
            assert_eq!(estimate_advanced(&item).total, base.total, "flag {flag:?}");
        }

        let mut crated = spec();
        crated.crates_required = "yes".to_string();
        assert_eq!(estimate_advanced(&crated).total - base.total, dec!(430));
    }

    #[test]
    fn test_estimate_large_complexity_is_total() {
        let mut item = spec();
        item.finish = "2pac".to_string();
        item.complexity = Decimal::from_i128_with_scale(10_i128.pow(28), 0);

        let cost = estimate_advanced(&item);
        assert_eq!(cost.labour_cost, Decimal::MAX);
        assert_eq!(cost.total, Decimal::MAX);
        assert_eq!(cost.material_cost, dec!(50));
        assert_eq!(cost.paint_cost, dec!(10));
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let item = spec();
        assert_eq!(estimate_advanced(&item), estimate_advanced(&item));
    }
}
