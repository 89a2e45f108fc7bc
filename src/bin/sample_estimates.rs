//! Sample Estimates
//!
//! Prints pot and bed estimates for the sample locations (Singapore, London,
//! Helsinki) from canned weather, with Ra derived from each site's latitude.
//!
//! Run with: cargo run --bin sample_estimates [day_of_year]

use std::path::PathBuf;

use anyhow::Context;
use irrigation_estimator_rust::calculators::{BedRequest, PotRequest, RootZone};
use irrigation_estimator_rust::utils::{frequency_label, ml_to_fl_oz};
use irrigation_estimator_rust::weather::{
    estimate_bed_from_weather, estimate_pot_from_weather, sample_locations, FixedWeather,
    TemperatureUnit, WeatherReport,
};
use irrigation_estimator_rust::CoefficientConfig;
use tracing_subscriber::EnvFilter;

/// (location code, t_min, t_max in Kelvin, 3h rain mm)
const SAMPLE_WEATHER: &[(&str, f64, f64, Option<f64>)] = &[
    ("singapore", 298.15, 304.15, Some(4.0)),
    ("london", 285.15, 296.15, None),
    ("helsinki", 283.15, 294.15, Some(1.5)),
];

/// (plant type, pot diameter in cm)
const SAMPLE_POTS: &[(&str, f64)] = &[
    ("succulent", 12.0),
    ("houseplant", 18.0),
    ("vegetable", 30.0),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irrigation_estimator_rust=info,warn".into()),
        )
        .init();

    let day_of_year: u32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid day of year: {}", arg))?,
        None => 172,
    };

    let config_path = std::env::var("IRRIGATION_CONFIG").ok().map(PathBuf::from);
    let config = CoefficientConfig::load_or_default(config_path.as_deref())?;

    let locations = sample_locations();
    let mut provider = FixedWeather::new();
    for location in &locations {
        if let Some((_, t_min, t_max, rain)) =
            SAMPLE_WEATHER.iter().find(|(code, ..)| *code == location.code())
        {
            let report = WeatherReport {
                temp_min: *t_min,
                temp_max: *t_max,
                unit: TemperatureUnit::Kelvin,
                description: String::new(),
                icon: String::new(),
                rain_3h_mm: *rain,
            };
            provider = provider.with_report(location, report);
        }
    }

    println!("Irrigation estimates for day {}\n", day_of_year);

    for location in &locations {
        println!("## {} (lat {:.2})", location.name, location.latitude_deg);
        println!("   Ra: {:.2} MJ/m²/day\n", location.radiation(day_of_year).resolve());

        for (plant_type, diameter_cm) in SAMPLE_POTS {
            let request = PotRequest::new(0.0, 0.0, *diameter_cm).with_plant_type(plant_type);
            match estimate_pot_from_weather(&provider, location, day_of_year, request, &config) {
                Ok(result) => println!(
                    "   {:<11} {:>4.0} cm pot: ET0 {:.2} mm, ETc {:.2} mm → {} ({:.1} fl oz) {}",
                    plant_type,
                    diameter_cm,
                    result.et0_mm,
                    result.etc_mm,
                    result.volume.display_text(),
                    ml_to_fl_oz(result.volume.as_ml()),
                    frequency_label(1),
                ),
                Err(e) => println!("   {:<11} skipped: {}", plant_type, e),
            }
        }

        let bed = BedRequest {
            t_min_c: 0.0,
            t_max_c: 0.0,
            radiation: None,
            strict_radiation: false,
            plant_type: Some("vegetable".to_string()),
            kcb: None,
            kc_soil: None,
            kr: None,
            bed_area_m2: 4.0,
            root_zone: RootZone {
                root_depth_cm: 30.0,
                field_capacity_frac: 0.3,
                wilting_point_frac: 0.1,
                depletion_frac: 0.5,
            },
            prev_storage_mm: 45.0,
            rainfall_mm: 0.0,
        };
        match estimate_bed_from_weather(&provider, location, day_of_year, bed, &config) {
            Ok(balance) => println!(
                "   vegetable bed 4 m²: ETc {:.2} mm, storage {:.1} mm → {}\n",
                balance.etc_mm,
                balance.storage_mm,
                balance.irrigation_result().volume.display_text(),
            ),
            Err(e) => println!("   vegetable bed skipped: {}\n", e),
        }
    }

    Ok(())
}
