//! Reference Evapotranspiration (Hargreaves)
//!
//! ET0 = 0.0023 × (Tavg + 17.8) × √(Tmax − Tmin) × Ra
//!
//! Temperatures in °C, Ra in MJ·m⁻²·day⁻¹, result in mm/day.

/// Hargreaves empirical coefficient
pub const HARGREAVES_COEFF: f64 = 0.0023;

/// Temperature offset added to Tavg (°C)
pub const HARGREAVES_T_OFFSET: f64 = 17.8;

/// Daily min/max air temperature (°C)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeatherExtremes {
    pub t_min_c: f64,
    pub t_max_c: f64,
}

impl WeatherExtremes {
    pub fn new(t_min_c: f64, t_max_c: f64) -> Self {
        Self { t_min_c, t_max_c }
    }

    /// Mean of the two extremes
    pub fn mean(&self) -> f64 {
        (self.t_min_c + self.t_max_c) / 2.0
    }

    /// Diurnal range, clamped at zero when the pair is inverted
    pub fn range(&self) -> f64 {
        (self.t_max_c - self.t_min_c).max(0.0)
    }

    /// ET0 for these extremes
    pub fn et0(&self, ra: f64) -> f64 {
        calculate_et0(self.t_min_c, self.t_max_c, ra)
    }
}

/// Reference evapotranspiration (mm/day).
///
/// An inverted pair (`t_min_c > t_max_c`) is treated as a zero range, so the
/// result is 0 rather than NaN. Callers are not told.
#[inline]
pub fn calculate_et0(t_min_c: f64, t_max_c: f64, ra: f64) -> f64 {
    let t_avg = (t_min_c + t_max_c) / 2.0;
    let temp_range = (t_max_c - t_min_c).max(0.0);
    HARGREAVES_COEFF * (t_avg + HARGREAVES_T_OFFSET) * temp_range.sqrt() * ra
}
