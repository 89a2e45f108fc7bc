//! Irrigation Calculators
//!
//! One public entry point per calculator variant, all built on the shared
//! evapotranspiration functions.
//!
//! ## Architecture
//! - `pot.rs` - Single-pot calculator (single Kc, circular surface)
//! - `bed.rs` - Garden-bed calculator (dual Kc, soil-water balance)
//! - `result.rs` - IrrigationResult / Volume output types
//! - `batch.rs` - Parallel estimates across many pots/beds
//! - `validate.rs` - Boundary checks applied before the formulas run
//!
//! The scalar functions (`estimate_pot_water_ml`, `estimate_bed_irrigation_liters`)
//! are garbage-in/garbage-out. The request pipelines (`estimate_pot`,
//! `estimate_bed`) validate first and return `CalcError::Validation`.

pub mod pot;
pub mod bed;
pub mod result;
pub mod batch;
mod validate;

pub use pot::{compute_area, estimate_pot, estimate_pot_water_ml, PotRequest};
pub use bed::{
    bed_balance, estimate_bed, estimate_bed_irrigation_liters, BedBalance, BedRequest,
    DualCoefficient, RootZone,
};
pub use result::{IrrigationResult, Volume};
pub use batch::{estimate_beds_parallel, estimate_pots_parallel};

use crate::config::CoefficientConfig;
use crate::error::CalcError;
use crate::evapotranspiration::SolarRadiation;

/// Ra for a request: explicit source if given, else the configured constant
pub(crate) fn resolve_ra(
    radiation: Option<&SolarRadiation>,
    strict: bool,
    config: &CoefficientConfig,
) -> Result<f64, CalcError> {
    match radiation {
        Some(r) if strict => r.resolve_strict().map_err(|e| {
            tracing::warn!("Radiation undefined: {}", e);
            e
        }),
        Some(r) => Ok(r.resolve()),
        None => Ok(config.default_ra),
    }
}
