//! Weather provider seam
//!
//! Fetching weather is someone else's job. The calculators only run once a
//! provider has answered; a provider error is returned as-is and no estimate
//! is made.

use rustc_hash::FxHashMap;

use crate::calculators::{estimate_bed, estimate_pot, BedBalance, BedRequest, IrrigationResult, PotRequest};
use crate::config::CoefficientConfig;
use crate::error::{CalcError, WeatherError};
use crate::weather::locations::Location;
use crate::weather::report::WeatherReport;

/// Source of current conditions for a location
pub trait WeatherProvider: Send + Sync {
    fn current(&self, location: &Location) -> Result<WeatherReport, WeatherError>;
}

/// Provider serving canned reports keyed by location code
#[derive(Debug, Clone, Default)]
pub struct FixedWeather {
    reports: FxHashMap<String, WeatherReport>,
}

impl FixedWeather {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, location: &Location, report: WeatherReport) -> Self {
        self.reports.insert(location.code(), report);
        self
    }
}

impl WeatherProvider for FixedWeather {
    fn current(&self, location: &Location) -> Result<WeatherReport, WeatherError> {
        self.reports
            .get(&location.code())
            .cloned()
            .ok_or_else(|| WeatherError::Unavailable(format!("no report for {}", location.name)))
    }
}

fn fetch(provider: &dyn WeatherProvider, location: &Location) -> Result<WeatherReport, CalcError> {
    provider.current(location).map_err(|e| {
        tracing::warn!("Weather lookup failed for {}: {}", location.name, e);
        CalcError::from(e)
    })
}

/// Pot estimate using the provider's extremes and Ra derived from the site.
///
/// Temperatures and radiation in `request` are replaced; Kc and geometry are kept.
pub fn estimate_pot_from_weather(
    provider: &dyn WeatherProvider,
    location: &Location,
    day_of_year: u32,
    mut request: PotRequest,
    config: &CoefficientConfig,
) -> Result<IrrigationResult, CalcError> {
    let extremes = fetch(provider, location)?.extremes_celsius()?;

    request.t_min_c = extremes.t_min_c;
    request.t_max_c = extremes.t_max_c;
    request.radiation = Some(location.radiation(day_of_year));

    estimate_pot(&request, config)
}

/// Bed estimate using the provider's extremes, Ra derived from the site, and
/// the reported 3h rain when present (otherwise the request's rainfall stands).
pub fn estimate_bed_from_weather(
    provider: &dyn WeatherProvider,
    location: &Location,
    day_of_year: u32,
    mut request: BedRequest,
    config: &CoefficientConfig,
) -> Result<BedBalance, CalcError> {
    let report = fetch(provider, location)?;
    let extremes = report.extremes_celsius()?;

    request.t_min_c = extremes.t_min_c;
    request.t_max_c = extremes.t_max_c;
    request.radiation = Some(location.radiation(day_of_year));
    if let Some(rain) = report.rain_3h_mm {
        request.rainfall_mm = rain;
    }

    estimate_bed(&request, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::RootZone;
    use crate::evapotranspiration::{compute_ra, SolarRadiation};
    use crate::weather::locations::{helsinki, london};

    fn provider() -> FixedWeather {
        FixedWeather::new().with_report(&london(), WeatherReport::celsius(10.0, 20.0))
    }

    #[test]
    fn test_pot_from_weather_uses_site_radiation() {
        let config = CoefficientConfig::default();
        let result = estimate_pot_from_weather(
            &provider(),
            &london(),
            172,
            PotRequest::new(0.0, 0.0, 10.0),
            &config,
        )
        .unwrap();

        let direct = estimate_pot(
            &PotRequest::new(10.0, 20.0, 10.0).with_radiation(SolarRadiation::Constant {
                ra: compute_ra(51.51, 172),
            }),
            &config,
        )
        .unwrap();
        assert_eq!(result, direct);
    }

    #[test]
    fn test_provider_failure_skips_calculation() {
        let err = estimate_pot_from_weather(
            &provider(),
            &helsinki(),
            172,
            PotRequest::new(10.0, 20.0, 10.0),
            &CoefficientConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::Weather(WeatherError::Unavailable(_))));
    }

    #[test]
    fn test_bed_takes_reported_rain() {
        let mut report = WeatherReport::celsius(10.0, 20.0);
        report.rain_3h_mm = Some(500.0);
        let provider = FixedWeather::new().with_report(&london(), report);

        let request = BedRequest {
            t_min_c: 0.0,
            t_max_c: 0.0,
            radiation: None,
            strict_radiation: false,
            plant_type: Some("vegetable".to_string()),
            kcb: None,
            kc_soil: None,
            kr: None,
            bed_area_m2: 2.0,
            root_zone: RootZone {
                root_depth_cm: 30.0,
                field_capacity_frac: 0.3,
                wilting_point_frac: 0.1,
                depletion_frac: 0.5,
            },
            prev_storage_mm: 20.0,
            rainfall_mm: 0.0,
        };

        let balance = estimate_bed_from_weather(
            &provider,
            &london(),
            172,
            request,
            &CoefficientConfig::default(),
        )
        .unwrap();
        assert_eq!(balance.storage_mm, balance.fc_storage_mm);
        assert_eq!(balance.liters, 0.0);
    }
}
