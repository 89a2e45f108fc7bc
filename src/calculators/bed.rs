//! Garden-Bed Calculator
//!
//! Dual crop coefficient (FAO-56 style) with a single-step soil-water balance.
//! No state is kept between calls: callers persist the returned storage and
//! pass it back as `prev_storage_mm` next time.
//!
//! 1 mm of water over 1 m² is exactly 1 L.

use serde::{Deserialize, Serialize};

use crate::calculators::result::{IrrigationResult, Volume};
use crate::calculators::{resolve_ra, validate};
use crate::config::CoefficientConfig;
use crate::error::CalcError;
use crate::evapotranspiration::{calculate_et0, SolarRadiation};

/// Every intermediate of the bed water balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BedBalance {
    pub et0_mm: f64,
    /// Soil evaporation component
    pub ke_mm: f64,
    pub etc_mm: f64,
    /// Water held at field capacity over the root zone
    pub fc_storage_mm: f64,
    /// Readily depletable water
    pub readily_depletable_mm: f64,
    /// Updated storage, capped at field capacity
    pub storage_mm: f64,
    pub needed_mm: f64,
    pub liters: f64,
}

impl BedBalance {
    pub fn irrigation_result(&self) -> IrrigationResult {
        IrrigationResult {
            et0_mm: self.et0_mm,
            etc_mm: self.etc_mm,
            volume: Volume::Liters(self.liters),
        }
    }
}

/// Dual coefficients for one bed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualCoefficient {
    pub kcb: f64,
    pub kc_soil: f64,
    pub kr: f64,
}

/// Root-zone soil parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootZone {
    pub root_depth_cm: f64,
    pub field_capacity_frac: f64,
    pub wilting_point_frac: f64,
    pub depletion_frac: f64,
}

/// Full bed water balance from already-resolved inputs.
pub fn bed_balance(
    et0: f64,
    coeff: &DualCoefficient,
    bed_area_m2: f64,
    zone: &RootZone,
    prev_storage_mm: f64,
    rainfall_mm: f64,
) -> BedBalance {
    let ke = coeff.kr * (et0 * (coeff.kc_soil - coeff.kcb));
    let etc = coeff.kcb * et0 + ke;

    let zroot_m = zone.root_depth_cm / 100.0;
    let fc_storage = zone.field_capacity_frac * zroot_m * 1000.0;
    let dr = (zone.field_capacity_frac - zone.wilting_point_frac)
        * zroot_m
        * zone.depletion_frac
        * 1000.0;

    let s_n = fc_storage.min(prev_storage_mm + rainfall_mm - etc);
    let needed_mm = ((fc_storage - dr) - s_n).max(0.0);

    BedBalance {
        et0_mm: et0,
        ke_mm: ke,
        etc_mm: etc,
        fc_storage_mm: fc_storage,
        readily_depletable_mm: dr,
        storage_mm: s_n,
        needed_mm,
        liters: needed_mm * bed_area_m2,
    }
}

/// Irrigation volume for a bed (L), scalar form.
#[allow(clippy::too_many_arguments)]
pub fn estimate_bed_irrigation_liters(
    t_min_c: f64,
    t_max_c: f64,
    ra: f64,
    kcb: f64,
    kc_soil: f64,
    kr: f64,
    bed_area_m2: f64,
    root_depth_cm: f64,
    field_capacity_frac: f64,
    wilting_point_frac: f64,
    depletion_frac: f64,
    prev_storage_mm: f64,
    rainfall_mm: f64,
) -> f64 {
    let et0 = calculate_et0(t_min_c, t_max_c, ra);
    let coeff = DualCoefficient { kcb, kc_soil, kr };
    let zone = RootZone {
        root_depth_cm,
        field_capacity_frac,
        wilting_point_frac,
        depletion_frac,
    };
    bed_balance(et0, &coeff, bed_area_m2, &zone, prev_storage_mm, rainfall_mm).liters
}

/// Bed calculator input as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedRequest {
    pub t_min_c: f64,
    pub t_max_c: f64,

    #[serde(default)]
    pub radiation: Option<SolarRadiation>,

    /// Fail on polar day/night instead of clamping the sunset hour angle
    #[serde(default)]
    pub strict_radiation: bool,

    /// Key into the bed map; explicit `kcb`/`kc_soil` override it
    #[serde(default)]
    pub plant_type: Option<String>,
    #[serde(default)]
    pub kcb: Option<f64>,
    #[serde(default)]
    pub kc_soil: Option<f64>,
    #[serde(default)]
    pub kr: Option<f64>,

    pub bed_area_m2: f64,

    #[serde(flatten)]
    pub root_zone: RootZone,

    #[serde(default)]
    pub prev_storage_mm: f64,
    #[serde(default)]
    pub rainfall_mm: f64,
}

impl BedRequest {
    pub fn validate(&self) -> Result<(), CalcError> {
        validate::temperatures(self.t_min_c, self.t_max_c)?;
        validate::positive("bed_area_m2", self.bed_area_m2)?;
        validate::positive("root_depth_cm", self.root_zone.root_depth_cm)?;
        validate::fraction("field_capacity_frac", self.root_zone.field_capacity_frac)?;
        validate::fraction("wilting_point_frac", self.root_zone.wilting_point_frac)?;
        validate::fraction("depletion_frac", self.root_zone.depletion_frac)?;
        if self.root_zone.wilting_point_frac > self.root_zone.field_capacity_frac {
            return Err(CalcError::validation(
                "wilting_point_frac",
                format!(
                    "must not exceed field_capacity_frac ({} > {})",
                    self.root_zone.wilting_point_frac, self.root_zone.field_capacity_frac
                ),
            ));
        }
        validate::finite("prev_storage_mm", self.prev_storage_mm)?;
        validate::non_negative("rainfall_mm", self.rainfall_mm)?;
        for (field, value) in [("kcb", self.kcb), ("kc_soil", self.kc_soil), ("kr", self.kr)] {
            if let Some(v) = value {
                validate::non_negative(field, v)?;
            }
        }
        if let Some(radiation) = &self.radiation {
            validate::radiation(radiation)?;
        }
        Ok(())
    }

    /// Explicit coefficients first, then the bed map, then the config's kr
    pub fn resolve_coefficients(&self, config: &CoefficientConfig) -> Result<DualCoefficient, CalcError> {
        let mapped = config.bed_coefficients_for(self.plant_type.as_deref());

        let kcb = self.kcb.or(mapped.map(|m| m.kcb));
        let kc_soil = self.kc_soil.or(mapped.map(|m| m.kc_soil));

        match (kcb, kc_soil) {
            (Some(kcb), Some(kc_soil)) => Ok(DualCoefficient {
                kcb,
                kc_soil,
                kr: self.kr.unwrap_or(config.default_kr),
            }),
            _ => Err(CalcError::validation(
                "plant_type",
                "no bed coefficients configured and none supplied",
            )),
        }
    }
}

/// Validated bed pipeline
pub fn estimate_bed(request: &BedRequest, config: &CoefficientConfig) -> Result<BedBalance, CalcError> {
    let coeff = request
        .validate()
        .and_then(|_| request.resolve_coefficients(config))
        .map_err(|e| {
            tracing::warn!("Rejected bed request: {}", e);
            e
        })?;

    let ra = resolve_ra(request.radiation.as_ref(), request.strict_radiation, config)?;
    let et0 = calculate_et0(request.t_min_c, request.t_max_c, ra);

    let balance = bed_balance(
        et0,
        &coeff,
        request.bed_area_m2,
        &request.root_zone,
        request.prev_storage_mm,
        request.rainfall_mm,
    );

    tracing::debug!(
        "Bed estimate: ra={:.3} kcb={} kc_soil={} area={}m² -> {:.2} L",
        ra, coeff.kcb, coeff.kc_soil, request.bed_area_m2, balance.liters
    );

    Ok(balance)
}
