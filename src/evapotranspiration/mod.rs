//! Evapotranspiration
//!
//! - `et0.rs` - Hargreaves reference ET0 from daily temperature extremes
//! - `radiation.rs` - Extraterrestrial radiation (Ra) from latitude/day of year

pub mod et0;
pub mod radiation;

pub use et0::{calculate_et0, WeatherExtremes};
pub use radiation::{compute_ra, compute_ra_strict, ra_to_mm_per_day, SolarRadiation};
