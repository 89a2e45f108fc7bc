//! Error types for the irrigation estimator
//!
//! The pure formula functions never return errors. These types belong to the
//! boundary: request validation, the strict radiation variant, and the weather
//! collaborator.

use thiserror::Error;

/// Errors raised at the calculator boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Input rejected before any formula runs (non-positive geometry etc.)
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Sunset hour angle undefined (polar day or polar night)
    #[error("sunset hour angle undefined at latitude {latitude_deg}° on day {day_of_year} (polar day/night)")]
    PolarGeometry {
        latitude_deg: f64,
        day_of_year: u32,
    },

    /// Weather lookup failed; no estimate was computed
    #[error("weather unavailable: {0}")]
    Weather(#[from] WeatherError),
}

impl CalcError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CalcError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Failures reported by a weather provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
