//! Core costing calculation functions.
//!
//! Pure functions for estimate math - no I/O, no shared state.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{CostBreakdown, Dimensions, PricingProfile, SurfaceTakeoff};
use super::rates::{
    CRATE_SURCHARGE, CURRENCY, LABOUR_HOURLY_RATE, PAINT_COST_PER_L, PAINT_COVERAGE_M2_PER_L,
    SHEET_AREA_M2, WASTE_FACTOR,
};

const MM2_PER_M2: u32 = 1_000_000;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ccr_costing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// External surface area of a closed rectangular box, in square metres.
///
/// The box formula is used for every shape.
pub fn surface_area_m2(dims: &Dimensions) -> Decimal {
    let l = Decimal::from(dims.length_mm);
    let w = Decimal::from(dims.width_mm);
    let h = Decimal::from(dims.height_mm);

    Decimal::TWO * (l * w + l * h + w * h) / Decimal::from(MM2_PER_M2)
}

/// Whole sheets needed to cover `area_m2`, including the waste allowance.
pub fn sheet_count(area_m2: Decimal) -> u64 {
    // Multiply before dividing so an exact whole-sheet result stays exact
    // before ceil (28.8 m2 is 11 sheets, not 12)
    let sheets = (area_m2 * WASTE_FACTOR / SHEET_AREA_M2).ceil();
    sheets.to_u64().unwrap_or(0)
}

/// Whole litres of paint needed to cover `area_m2`.
pub fn paint_litres(area_m2: Decimal) -> u64 {
    let litres = (area_m2 / PAINT_COVERAGE_M2_PER_L).ceil();
    litres.to_u64().unwrap_or(0)
}

/// Compute the area, sheet and paint quantities for a box
pub fn takeoff(dims: &Dimensions) -> SurfaceTakeoff {
    let area_m2 = surface_area_m2(dims);
    SurfaceTakeoff {
        area_m2,
        sheets: sheet_count(area_m2),
        paint_litres: paint_litres(area_m2),
    }
}

/// Labour hours: base allowance scaled by complexity and finish.
///
/// Saturates at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub fn labour_hours(profile: &PricingProfile) -> Decimal {
    profile
        .base_labour_hours
        .saturating_mul(profile.complexity)
        .saturating_mul(profile.finish_multiplier)
}

/// Price a takeoff with the given rates.
///
/// Each sub-total and the total are rounded independently; the total is the
/// rounded sum of the unrounded sub-totals, so re-adding the rounded
/// sub-totals can differ from it by a cent or two.
///
/// Never panics: labour and total saturate at the `Decimal` range, so an
/// absurd complexity yields a pinned maximum rather than an error.
pub fn price_item(
    takeoff: &SurfaceTakeoff,
    profile: &PricingProfile,
    crates_required: bool,
) -> CostBreakdown {
    let material_cost = Decimal::from(takeoff.sheets) * profile.material_rate;
    let paint_cost = Decimal::from(takeoff.paint_litres) * PAINT_COST_PER_L;
    let labour_cost = labour_hours(profile).saturating_mul(LABOUR_HOURLY_RATE);
    let crate_cost = if crates_required {
        CRATE_SURCHARGE
    } else {
        Decimal::ZERO
    };

    let total = material_cost
        .saturating_add(paint_cost)
        .saturating_add(labour_cost)
        .saturating_add(crate_cost);

    CostBreakdown {
        material_cost: round_money(material_cost, 2),
        paint_cost: round_money(paint_cost, 2),
        labour_cost: round_money(labour_cost, 2),
        crate_cost: round_money(crate_cost, 2),
        total: round_money(total, 2),
        currency: CURRENCY.to_string(),
    }
}
