//! Costing engine for custom panel and box fabrication.
//!
//! Estimates material sheets, paint, labour and crating for one item from
//! its box dimensions and a few categorical options. Every calculation is a
//! pure function over fixed rate tables.

pub mod calculators;
pub mod models;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use models::{CostBreakdown, Dimensions, EstimateMode, ItemSpec, PricingProfile};
pub use routes::router;
pub use services::{estimate, estimate_advanced, estimate_simple, validate_spec, PricingError};
