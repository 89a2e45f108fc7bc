//! Single-Pot Calculator
//!
//! ET0 → ETc (single Kc) → pot surface area → daily volume.
//!
//! 1 mm of water over 1 cm² is 0.1 mL, hence `volume_ml = etc × area × 0.1`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculators::result::{IrrigationResult, Volume};
use crate::calculators::{resolve_ra, validate};
use crate::config::CoefficientConfig;
use crate::error::CalcError;
use crate::evapotranspiration::{calculate_et0, SolarRadiation};
use crate::utils::units::LengthUnit;

/// mL delivered by 1 mm of depth over 1 cm²
pub const ML_PER_MM_CM2: f64 = 0.1;

/// Circular pot surface area (cm²). No sign check: 0 → 0, negative → positive.
#[inline]
pub fn compute_area(diameter_cm: f64) -> f64 {
    PI * (diameter_cm / 2.0).powi(2)
}

/// Daily water need for one pot (mL)
pub fn estimate_pot_water_ml(t_min_c: f64, t_max_c: f64, ra: f64, kc: f64, diameter_cm: f64) -> f64 {
    let et0 = calculate_et0(t_min_c, t_max_c, ra);
    let etc = kc * et0;
    etc * compute_area(diameter_cm) * ML_PER_MM_CM2
}

/// Pot calculator input as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotRequest {
    pub t_min_c: f64,
    pub t_max_c: f64,

    /// Ra source; `None` uses the configured constant
    #[serde(default)]
    pub radiation: Option<SolarRadiation>,

    /// Fail on polar day/night instead of clamping the sunset hour angle
    #[serde(default)]
    pub strict_radiation: bool,

    /// Explicit Kc; takes precedence over `plant_type`
    #[serde(default)]
    pub kc: Option<f64>,

    /// Key into the Kc map (e.g. "succulent")
    #[serde(default)]
    pub plant_type: Option<String>,

    pub diameter: f64,

    #[serde(default)]
    pub diameter_unit: LengthUnit,
}

impl PotRequest {
    pub fn new(t_min_c: f64, t_max_c: f64, diameter_cm: f64) -> Self {
        Self {
            t_min_c,
            t_max_c,
            radiation: None,
            strict_radiation: false,
            kc: None,
            plant_type: None,
            diameter: diameter_cm,
            diameter_unit: LengthUnit::Centimeters,
        }
    }

    pub fn with_radiation(mut self, radiation: SolarRadiation) -> Self {
        self.radiation = Some(radiation);
        self
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = Some(kc);
        self
    }

    pub fn with_plant_type(mut self, plant_type: &str) -> Self {
        self.plant_type = Some(plant_type.to_string());
        self
    }

    pub fn diameter_cm(&self) -> f64 {
        self.diameter_unit.to_cm(self.diameter)
    }

    /// Boundary checks; the formulas themselves accept anything
    pub fn validate(&self) -> Result<(), CalcError> {
        validate::temperatures(self.t_min_c, self.t_max_c)?;
        validate::positive("diameter", self.diameter)?;
        if let Some(kc) = self.kc {
            validate::non_negative("kc", kc)?;
        }
        if let Some(radiation) = &self.radiation {
            validate::radiation(radiation)?;
        }
        Ok(())
    }
}

/// Validated pot pipeline: resolve Ra and Kc, then compute.
pub fn estimate_pot(request: &PotRequest, config: &CoefficientConfig) -> Result<IrrigationResult, CalcError> {
    if let Err(e) = request.validate() {
        tracing::warn!("Rejected pot request: {}", e);
        return Err(e);
    }

    let ra = resolve_ra(request.radiation.as_ref(), request.strict_radiation, config)?;
    let kc = request
        .kc
        .unwrap_or_else(|| config.kc_for(request.plant_type.as_deref()));
    let diameter_cm = request.diameter_cm();

    let et0 = calculate_et0(request.t_min_c, request.t_max_c, ra);
    let etc = kc * et0;
    let volume_ml = etc * compute_area(diameter_cm) * ML_PER_MM_CM2;

    tracing::debug!(
        "Pot estimate: ra={:.3} kc={} diameter={:.1}cm -> {:.1} mL",
        ra, kc, diameter_cm, volume_ml
    );

    Ok(IrrigationResult {
        et0_mm: et0,
        etc_mm: etc,
        volume: Volume::Milliliters(volume_ml),
    })
}
