//! Weather provider payload and temperature conversion

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;
use crate::evapotranspiration::WeatherExtremes;

pub const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Unit the provider reported temperatures in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => kelvin_to_celsius(value),
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }
}

/// Current conditions as returned by a weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub unit: TemperatureUnit,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Rain over the last 3 hours (mm), when reported
    #[serde(default)]
    pub rain_3h_mm: Option<f64>,
}

impl WeatherReport {
    pub fn celsius(temp_min: f64, temp_max: f64) -> Self {
        Self {
            temp_min,
            temp_max,
            unit: TemperatureUnit::Celsius,
            description: String::new(),
            icon: String::new(),
            rain_3h_mm: None,
        }
    }

    /// Extremes in °C, ready for the ET0 formula
    pub fn extremes_celsius(&self) -> Result<WeatherExtremes, WeatherError> {
        let t_min = self.unit.to_celsius(self.temp_min);
        let t_max = self.unit.to_celsius(self.temp_max);
        if !(t_min.is_finite() && t_max.is_finite()) {
            return Err(WeatherError::InvalidPayload(format!(
                "non-finite temperatures ({}, {})",
                self.temp_min, self.temp_max
            )));
        }
        Ok(WeatherExtremes::new(t_min, t_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_conversions() {
        assert_abs_diff_eq!(kelvin_to_celsius(293.15), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fahrenheit_to_celsius(212.0), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fahrenheit_to_celsius(32.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_kelvin_report() {
        let report = WeatherReport {
            temp_min: 283.15,
            temp_max: 293.15,
            unit: TemperatureUnit::Kelvin,
            description: "few clouds".to_string(),
            icon: "02d".to_string(),
            rain_3h_mm: None,
        };
        let w = report.extremes_celsius().unwrap();
        assert_abs_diff_eq!(w.t_min_c, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(w.t_max_c, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_defaults_to_kelvin() {
        let report: WeatherReport =
            serde_json::from_str(r#"{ "temp_min": 280.0, "temp_max": 290.0 }"#).unwrap();
        assert_eq!(report.unit, TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_nan_payload_rejected() {
        let report = WeatherReport::celsius(f64::NAN, 20.0);
        assert!(matches!(report.extremes_celsius(), Err(WeatherError::InvalidPayload(_))));
    }
}
