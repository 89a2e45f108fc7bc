//! Extraterrestrial Radiation (Ra)
//!
//! FAO-56 daily Ra from latitude and day of year. Used when no fixed Ra
//! constant is configured.
//!
//! At high latitudes around the solstices `-tan(φ)·tan(δ)` leaves [-1, 1] and
//! the sunset hour angle has no real value. `compute_ra` clamps the argument
//! (polar day → ωs = π, polar night → ωs = 0); `compute_ra_strict` reports it.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Solar constant (MJ·m⁻²·min⁻¹)
pub const SOLAR_CONSTANT: f64 = 0.0820;

/// MJ·m⁻²·day⁻¹ → mm/day of equivalent evaporation
pub const MJ_TO_MM: f64 = 0.408;

/// Where Ra comes from for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarRadiation {
    /// Precomputed Ra (MJ·m⁻²·day⁻¹)
    Constant { ra: f64 },

    /// Derive Ra from site latitude and day of year (1..=366)
    Derived { latitude_deg: f64, day_of_year: u32 },
}

impl SolarRadiation {
    /// Ra in MJ·m⁻²·day⁻¹, clamping the polar case
    pub fn resolve(&self) -> f64 {
        match *self {
            SolarRadiation::Constant { ra } => ra,
            SolarRadiation::Derived { latitude_deg, day_of_year } => {
                compute_ra(latitude_deg, day_of_year)
            }
        }
    }

    /// Ra in MJ·m⁻²·day⁻¹, failing on polar day/night
    pub fn resolve_strict(&self) -> Result<f64, CalcError> {
        match *self {
            SolarRadiation::Constant { ra } => Ok(ra),
            SolarRadiation::Derived { latitude_deg, day_of_year } => {
                compute_ra_strict(latitude_deg, day_of_year)
            }
        }
    }
}

struct SolarGeometry {
    lat_rad: f64,
    dr: f64,
    declination: f64,
    /// -tan(φ)·tan(δ), unclamped
    cos_omega_s: f64,
}

fn solar_geometry(latitude_deg: f64, day_of_year: u32) -> SolarGeometry {
    let lat_rad = latitude_deg * PI / 180.0;
    let j = day_of_year as f64;
    let dr = 1.0 + 0.033 * (2.0 * PI / 365.0 * j).cos();
    let declination = 0.409 * (2.0 * PI / 365.0 * j - 1.39).sin();
    let cos_omega_s = -lat_rad.tan() * declination.tan();

    SolarGeometry { lat_rad, dr, declination, cos_omega_s }
}

fn ra_from_geometry(g: &SolarGeometry, omega_s: f64) -> f64 {
    (24.0 * 60.0 / PI)
        * SOLAR_CONSTANT
        * g.dr
        * (omega_s * g.lat_rad.sin() * g.declination.sin()
            + g.lat_rad.cos() * g.declination.cos() * omega_s.sin())
}

/// Extraterrestrial radiation (MJ·m⁻²·day⁻¹), polar cases clamped.
pub fn compute_ra(latitude_deg: f64, day_of_year: u32) -> f64 {
    let g = solar_geometry(latitude_deg, day_of_year);
    let omega_s = g.cos_omega_s.clamp(-1.0, 1.0).acos();
    ra_from_geometry(&g, omega_s)
}

/// Extraterrestrial radiation, returning `PolarGeometry` where the sunset
/// hour angle is undefined.
pub fn compute_ra_strict(latitude_deg: f64, day_of_year: u32) -> Result<f64, CalcError> {
    let g = solar_geometry(latitude_deg, day_of_year);
    if !(-1.0..=1.0).contains(&g.cos_omega_s) {
        return Err(CalcError::PolarGeometry { latitude_deg, day_of_year });
    }
    Ok(ra_from_geometry(&g, g.cos_omega_s.acos()))
}

/// Ra expressed as equivalent evaporation (mm/day)
#[inline]
pub fn ra_to_mm_per_day(ra: f64) -> f64 {
    MJ_TO_MM * ra
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mid_latitude_summer_solstice() {
        assert_abs_diff_eq!(compute_ra(45.0, 172), 41.91, epsilon = 0.01);
    }

    #[test]
    fn test_strict_matches_clamped_when_defined() {
        let strict = compute_ra_strict(45.0, 172).unwrap();
        assert_eq!(strict, compute_ra(45.0, 172));
    }

    #[test]
    fn test_polar_day_clamps_to_pi() {
        // 80°N in June: sun never sets
        let ra = compute_ra(80.0, 172);
        assert!(ra.is_finite());
        assert!(ra > 40.0);
    }

    #[test]
    fn test_polar_night_is_zero() {
        assert_abs_diff_eq!(compute_ra(80.0, 355), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(compute_ra(-80.0, 172), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_strict_rejects_polar() {
        assert_eq!(
            compute_ra_strict(80.0, 172),
            Err(CalcError::PolarGeometry { latitude_deg: 80.0, day_of_year: 172 })
        );
        assert!(compute_ra_strict(-80.0, 172).is_err());
    }

    #[test]
    fn test_solar_radiation_resolve() {
        assert_eq!(SolarRadiation::Constant { ra: 20.0 }.resolve(), 20.0);
        let derived = SolarRadiation::Derived { latitude_deg: 45.0, day_of_year: 172 };
        assert_eq!(derived.resolve(), compute_ra(45.0, 172));
        let polar = SolarRadiation::Derived { latitude_deg: 80.0, day_of_year: 172 };
        assert!(polar.resolve_strict().is_err());
    }

    #[test]
    fn test_ra_to_mm() {
        assert_abs_diff_eq!(ra_to_mm_per_day(10.0), 4.08, epsilon = 1e-12);
    }
}
