//! Irrigation Estimator
//!
//! Evapotranspiration-based watering estimates for pots and garden beds.
//!
//! Pipeline: Hargreaves ET0 → crop coefficient → pot/bed area → volume.
//!
//! - `evapotranspiration/`: ET0 (Hargreaves) and extraterrestrial radiation
//! - `calculators/`: Single-pot and garden-bed calculators, batch estimates
//! - `config`: Coefficient tables injected into every calculation
//! - `weather/`: Weather provider boundary and °C conversion
//! - `utils/`: Unit conversions, display rounding, frequency labels
//! - `api_server` (feature `api`): Axum JSON endpoints

pub mod error;
pub mod config;
pub mod evapotranspiration;
pub mod calculators;
pub mod weather;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{CalcError, WeatherError};
pub use config::{BedCoefficients, CoefficientConfig};
pub use evapotranspiration::{calculate_et0, compute_ra, compute_ra_strict, SolarRadiation, WeatherExtremes};
pub use calculators::{
    compute_area, estimate_bed, estimate_bed_irrigation_liters, estimate_pot, estimate_pot_water_ml,
    BedBalance, BedRequest, IrrigationResult, PotRequest, RootZone, Volume,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
