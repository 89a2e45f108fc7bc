//! Coefficient Configuration
//!
//! Crop coefficients, bed coefficients and the fallback Ra constant. Passed
//! explicitly into every pipeline call so callers can override per request.
//!
//! JSON layout (all keys optional, missing ones take the built-in defaults):
//! ```json
//! {
//!   "default_kc": 0.8,
//!   "default_ra": 20.0,
//!   "default_kr": 1.0,
//!   "kc_map": { "succulent": 0.3, "houseplant": 0.8 },
//!   "bed_map": { "vegetable": { "kcb": 0.95, "kc_soil": 1.1 } }
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Plant type used when a lookup key is missing or unknown
pub const DEFAULT_PLANT_TYPE: &str = "houseplant";

/// Single crop coefficient per plant type (pot calculator)
const DEFAULT_KC_MAP: &[(&str, f64)] = &[
    ("succulent", 0.3),
    ("houseplant", 0.8),
    ("vegetable", 1.0),
    ("flower", 0.9),
    ("cacti", 0.28),
];

/// Dual coefficients per plant type (bed calculator): (kcb, kc_soil)
const DEFAULT_BED_MAP: &[(&str, f64, f64)] = &[
    ("succulent", 0.25, 0.9),
    ("houseplant", 0.7, 1.0),
    ("vegetable", 0.95, 1.1),
    ("flower", 0.8, 1.05),
    ("cacti", 0.2, 0.9),
];

/// Basal + soil coefficients for one plant type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BedCoefficients {
    pub kcb: f64,
    pub kc_soil: f64,
}

/// All coefficient tables used by the calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoefficientConfig {
    /// Kc used when the plant type is absent or unknown
    pub default_kc: f64,

    /// Ra (MJ·m⁻²·day⁻¹) used when no latitude/day of year is supplied
    pub default_ra: f64,

    /// Soil evaporation reduction coefficient used when a bed request omits it
    pub default_kr: f64,

    pub kc_map: FxHashMap<String, f64>,

    pub bed_map: FxHashMap<String, BedCoefficients>,
}

impl Default for CoefficientConfig {
    fn default() -> Self {
        let kc_map = DEFAULT_KC_MAP
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();

        let bed_map = DEFAULT_BED_MAP
            .iter()
            .map(|(k, kcb, kc_soil)| {
                (k.to_string(), BedCoefficients { kcb: *kcb, kc_soil: *kc_soil })
            })
            .collect();

        Self {
            default_kc: 0.8,
            default_ra: 20.0,
            default_kr: 1.0,
            kc_map,
            bed_map,
        }
    }
}

impl CoefficientConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read coefficient file: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid coefficient file: {:?}", path))
    }

    /// Parse configuration from a JSON string, normalising map keys
    pub fn from_json(contents: &str) -> Result<Self> {
        let mut config: CoefficientConfig = serde_json::from_str(contents)
            .with_context(|| "Failed to parse coefficient JSON")?;

        config.kc_map = config
            .kc_map
            .into_iter()
            .map(|(k, v)| (normalize_key(&k), v))
            .collect();
        config.bed_map = config
            .bed_map
            .into_iter()
            .map(|(k, v)| (normalize_key(&k), v))
            .collect();

        config.check_values()?;

        Ok(config)
    }

    /// Every coefficient and the fallback Ra must be finite and >= 0
    fn check_values(&self) -> Result<()> {
        check_non_negative("default_kc", self.default_kc)?;
        check_non_negative("default_ra", self.default_ra)?;
        check_non_negative("default_kr", self.default_kr)?;

        for (plant_type, kc) in &self.kc_map {
            check_non_negative(&format!("kc_map.{}", plant_type), *kc)?;
        }
        for (plant_type, coeff) in &self.bed_map {
            check_non_negative(&format!("bed_map.{}.kcb", plant_type), coeff.kcb)?;
            check_non_negative(&format!("bed_map.{}.kc_soil", plant_type), coeff.kc_soil)?;
        }

        Ok(())
    }

    /// Load from `path` if given, otherwise the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Crop coefficient for a plant type; unknown or absent → `default_kc`
    pub fn kc_for(&self, plant_type: Option<&str>) -> f64 {
        plant_type
            .and_then(|t| self.kc_map.get(&normalize_key(t)))
            .copied()
            .unwrap_or(self.default_kc)
    }

    /// Bed coefficients for a plant type; unknown or absent → houseplant entry.
    ///
    /// Returns `None` only when the map has no houseplant entry either.
    pub fn bed_coefficients_for(&self, plant_type: Option<&str>) -> Option<BedCoefficients> {
        plant_type
            .and_then(|t| self.bed_map.get(&normalize_key(t)))
            .or_else(|| self.bed_map.get(DEFAULT_PLANT_TYPE))
            .copied()
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        anyhow::bail!("{} must be a non-negative number (got {})", key, value);
    }
    Ok(())
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
