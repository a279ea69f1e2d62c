//! Fixed rate tables and constants for fabrication costing.
//!
//! Rates are immutable and shared by every request; lookups never fail and
//! fall back to a defined default for unknown keys.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency tag attached to every estimate
pub const CURRENCY: &str = "AUD";

/// Standard sheet: 2.4m x 1.2m
pub const SHEET_AREA_M2: Decimal = dec!(2.88);

/// Offcut allowance applied to the sheet count
pub const WASTE_FACTOR: Decimal = dec!(1.1);

/// Square metres covered by one litre of paint
pub const PAINT_COVERAGE_M2_PER_L: Decimal = dec!(9);

pub const PAINT_COST_PER_L: Decimal = dec!(10);

/// Default small-item labour allowance in hours
pub const BASE_LABOUR_HOURS: Decimal = dec!(9);

pub const LABOUR_HOURLY_RATE: Decimal = dec!(56.11);

/// Flat surcharge for a protective shipping crate
pub const CRATE_SURCHARGE: Decimal = dec!(430);

/// Per-sheet material rate used by the simple estimate
pub const SIMPLE_MATERIAL_RATE: Decimal = dec!(50);

/// Immutable key -> rate mapping with a fallback for unmapped keys.
#[derive(Debug, Clone, Copy)]
pub struct RateTable {
    entries: &'static [(&'static str, Decimal)],
    fallback: Decimal,
}

impl RateTable {
    pub const fn new(entries: &'static [(&'static str, Decimal)], fallback: Decimal) -> Self {
        Self { entries, fallback }
    }

    /// Look up the rate for `key`, falling back to the table default.
    ///
    /// Keys match exactly; "MDF" is not "mdf".
    pub fn rate(&self, key: &str) -> Decimal {
        self.get(key).unwrap_or(self.fallback)
    }

    /// Look up the rate for `key` without applying the fallback
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, rate)| *rate)
    }
}

static MATERIAL_ENTRIES: [(&str, Decimal); 3] = [
    ("mdf", dec!(50)),
    ("ply", dec!(70)),
    ("acrylic", dec!(90)),
];

static FINISH_ENTRIES: [(&str, Decimal); 4] = [
    ("roller_paint", dec!(1.0)),
    ("2pac", dec!(1.3)),
    ("laminate", dec!(1.15)),
    ("vinyl_wrap", dec!(1.2)),
];

/// Per-sheet material rates (mdf, ply, acrylic); unknown materials price as mdf
pub static MATERIAL_RATES: RateTable = RateTable::new(&MATERIAL_ENTRIES, dec!(50));

/// Labour multipliers by finish; unknown finishes take no multiplier
pub static FINISH_LABOUR_MULTIPLIERS: RateTable = RateTable::new(&FINISH_ENTRIES, dec!(1.0));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_rates_known_keys() {
        assert_eq!(MATERIAL_RATES.rate("mdf"), dec!(50));
        assert_eq!(MATERIAL_RATES.rate("ply"), dec!(70));
        assert_eq!(MATERIAL_RATES.rate("acrylic"), dec!(90));
    }

    #[test]
    fn test_material_rates_unknown_falls_back_to_mdf() {
        assert_eq!(MATERIAL_RATES.rate("oak"), MATERIAL_RATES.rate("mdf"));
        assert_eq!(MATERIAL_RATES.rate(""), dec!(50));
        // Case-sensitive lookup
        assert_eq!(MATERIAL_RATES.get("PLY"), None);
        assert_eq!(MATERIAL_RATES.rate("PLY"), dec!(50));
    }

    #[test]
    fn test_finish_multipliers() {
        assert_eq!(FINISH_LABOUR_MULTIPLIERS.rate("roller_paint"), dec!(1.0));
        assert_eq!(FINISH_LABOUR_MULTIPLIERS.rate("2pac"), dec!(1.3));
        assert_eq!(FINISH_LABOUR_MULTIPLIERS.rate("laminate"), dec!(1.15));
        assert_eq!(FINISH_LABOUR_MULTIPLIERS.rate("vinyl_wrap"), dec!(1.2));
        assert_eq!(FINISH_LABOUR_MULTIPLIERS.rate("gold_leaf"), dec!(1.0));
        assert_eq!(FINISH_LABOUR_MULTIPLIERS.get("gold_leaf"), None);
    }

    #[test]
    fn test_sheet_area_matches_sheet_size() {
        assert_eq!(SHEET_AREA_M2, dec!(2.4) * dec!(1.2));
    }
}
