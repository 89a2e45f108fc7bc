//! Calculator output types

use serde::{Deserialize, Serialize};

use crate::utils::units::{ml_to_fl_oz, round_liters, round_ml};

/// Recommended water volume, in the unit its calculator produces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Volume {
    Milliliters(f64),
    Liters(f64),
}

impl Volume {
    pub fn as_ml(&self) -> f64 {
        match *self {
            Volume::Milliliters(ml) => ml,
            Volume::Liters(l) => l * 1000.0,
        }
    }

    pub fn as_liters(&self) -> f64 {
        match *self {
            Volume::Milliliters(ml) => ml / 1000.0,
            Volume::Liters(l) => l,
        }
    }

    pub fn as_fl_oz(&self) -> f64 {
        ml_to_fl_oz(self.as_ml())
    }

    /// Rounded for display: whole mL, or liters to 2 decimals
    pub fn display_value(&self) -> f64 {
        match *self {
            Volume::Milliliters(ml) => round_ml(ml),
            Volume::Liters(l) => round_liters(l),
        }
    }

    /// E.g. "30 mL" or "80.46 L"
    pub fn display_text(&self) -> String {
        match *self {
            Volume::Milliliters(_) => format!("{:.0} mL", self.display_value()),
            Volume::Liters(_) => format!("{:.2} L", self.display_value()),
        }
    }
}

/// Outcome of one irrigation estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrigationResult {
    /// Reference evapotranspiration (mm/day)
    pub et0_mm: f64,

    /// Crop evapotranspiration (mm/day)
    pub etc_mm: f64,

    pub volume: Volume,
}
