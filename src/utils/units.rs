//! Unit conversions and display rounding

use serde::{Deserialize, Serialize};

/// US fluid ounce in millilitres
pub const ML_PER_FL_OZ: f64 = 29.5735;

pub const CM_PER_INCH: f64 = 2.54;

pub fn ml_to_fl_oz(ml: f64) -> f64 {
    ml / ML_PER_FL_OZ
}

pub fn fl_oz_to_ml(fl_oz: f64) -> f64 {
    fl_oz * ML_PER_FL_OZ
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Nearest whole millilitre
pub fn round_ml(ml: f64) -> f64 {
    ml.round()
}

/// Liters to 2 decimals
pub fn round_liters(liters: f64) -> f64 {
    (liters * 100.0).round() / 100.0
}

/// Unit a pot diameter was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    #[serde(alias = "cm")]
    Centimeters,
    #[serde(alias = "in")]
    Inches,
}

impl LengthUnit {
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Centimeters => value,
            LengthUnit::Inches => inches_to_cm(value),
        }
    }
}
