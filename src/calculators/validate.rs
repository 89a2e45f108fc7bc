//! Boundary validation shared by the calculator requests

use crate::error::CalcError;
use crate::evapotranspiration::SolarRadiation;

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::validation(field, format!("must be > 0 (got {})", value)))
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::validation(field, format!("must be >= 0 (got {})", value)))
    }
}

pub(crate) fn fraction(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::validation(field, format!("must be within 0-1 (got {})", value)))
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::validation(field, format!("must be a finite number (got {})", value)))
    }
}

/// Inverted pairs are allowed; ET0 clamps them
pub(crate) fn temperatures(t_min_c: f64, t_max_c: f64) -> Result<(), CalcError> {
    finite("t_min_c", t_min_c)?;
    finite("t_max_c", t_max_c)
}

pub(crate) fn radiation(radiation: &SolarRadiation) -> Result<(), CalcError> {
    match *radiation {
        SolarRadiation::Constant { ra } => non_negative("ra", ra),
        SolarRadiation::Derived { latitude_deg, day_of_year } => {
            if !(latitude_deg.is_finite() && (-90.0..=90.0).contains(&latitude_deg)) {
                return Err(CalcError::validation(
                    "latitude_deg",
                    format!("must be within -90..90 (got {})", latitude_deg),
                ));
            }
            if !(1..=366).contains(&day_of_year) {
                return Err(CalcError::validation(
                    "day_of_year",
                    format!("must be within 1..366 (got {})", day_of_year),
                ));
            }
            Ok(())
        }
    }
}
