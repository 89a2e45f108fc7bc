//! Calculator Integration Tests
//!
//! Runs the public pipelines end to end with the reference inputs used
//! throughout the crate docs, plus the boundary cases callers rely on.

use approx::assert_abs_diff_eq;
use irrigation_estimator_rust::calculators::{estimate_beds_parallel, RootZone};
use irrigation_estimator_rust::weather::{
    estimate_pot_from_weather, find_location, FixedWeather, TemperatureUnit, WeatherReport,
};
use irrigation_estimator_rust::{
    calculate_et0, compute_area, compute_ra, estimate_bed, estimate_bed_irrigation_liters,
    estimate_pot, estimate_pot_water_ml, BedRequest, CalcError, CoefficientConfig, PotRequest,
    SolarRadiation, Volume,
};

fn reference_bed() -> BedRequest {
    BedRequest {
        t_min_c: 10.0,
        t_max_c: 20.0,
        radiation: Some(SolarRadiation::Constant { ra: 20.0 }),
        strict_radiation: false,
        plant_type: None,
        kcb: Some(0.3),
        kc_soil: Some(1.1),
        kr: Some(1.0),
        bed_area_m2: 2.0,
        root_zone: RootZone {
            root_depth_cm: 30.0,
            field_capacity_frac: 0.3,
            wilting_point_frac: 0.1,
            depletion_frac: 0.5,
        },
        prev_storage_mm: 20.0,
        rainfall_mm: 5.0,
    }
}

#[test]
fn test_reference_values() {
    assert_abs_diff_eq!(compute_area(10.0), 78.5398, epsilon = 0.0001);
    assert_abs_diff_eq!(calculate_et0(10.0, 20.0, 20.0), 4.7712, epsilon = 0.0001);
    assert_abs_diff_eq!(compute_ra(45.0, 172), 41.91, epsilon = 0.01);
    assert_abs_diff_eq!(estimate_pot_water_ml(10.0, 20.0, 20.0, 0.8, 10.0), 29.98, epsilon = 0.1);
    assert_abs_diff_eq!(
        estimate_bed_irrigation_liters(10.0, 20.0, 20.0, 0.3, 1.1, 1.0, 2.0, 30.0, 0.3, 0.1, 0.5, 20.0, 5.0),
        80.46,
        epsilon = 0.1
    );
}

#[test]
fn test_inverted_temperatures_both_directions() {
    let forward = calculate_et0(10.0, 20.0, 20.0);
    let inverted = calculate_et0(20.0, 10.0, 20.0);
    assert_eq!(inverted, calculate_et0(10.0, 10.0, 20.0));
    assert_eq!(inverted, 0.0);
    assert!(forward > 4.77);
}

#[test]
fn test_pure_functions_are_bit_identical() {
    let a = estimate_bed_irrigation_liters(10.0, 20.0, 20.0, 0.3, 1.1, 1.0, 2.0, 30.0, 0.3, 0.1, 0.5, 20.0, 5.0);
    let b = estimate_bed_irrigation_liters(10.0, 20.0, 20.0, 0.3, 1.1, 1.0, 2.0, 30.0, 0.3, 0.1, 0.5, 20.0, 5.0);
    assert_eq!(a.to_bits(), b.to_bits());

    let r1 = compute_ra(-33.9, 15);
    let r2 = compute_ra(-33.9, 15);
    assert_eq!(r1.to_bits(), r2.to_bits());
}

#[test]
fn test_zero_diameter_scalar_is_zero_but_pipeline_rejects() {
    assert_eq!(estimate_pot_water_ml(10.0, 30.0, 40.0, 1.2, 0.0), 0.0);

    let err = estimate_pot(&PotRequest::new(10.0, 30.0, 0.0), &CoefficientConfig::default()).unwrap_err();
    assert!(matches!(err, CalcError::Validation { field: "diameter", .. }));
}

#[test]
fn test_storage_overflow_clamps_to_field_capacity() {
    let mut req = reference_bed();
    req.rainfall_mm = 250.0;
    let balance = estimate_bed(&req, &CoefficientConfig::default()).unwrap();
    assert_eq!(balance.storage_mm, balance.fc_storage_mm);
    assert_eq!(balance.needed_mm, 0.0);
}

#[test]
fn test_bed_display_value() {
    let balance = estimate_bed(&reference_bed(), &CoefficientConfig::default()).unwrap();
    let result = balance.irrigation_result();
    assert!(matches!(result.volume, Volume::Liters(_)));
    assert_eq!(result.volume.display_value(), 80.5);
    assert_eq!(result.volume.display_text(), "80.50 L");
}

#[test]
fn test_config_override_changes_estimate() {
    let json = r#"{ "kc_map": { "houseplant": 1.0 } }"#;
    let config = CoefficientConfig::from_json(json).unwrap();
    let request = PotRequest::new(10.0, 20.0, 10.0).with_plant_type("houseplant");

    let overridden = estimate_pot(&request, &config).unwrap();
    let default = estimate_pot(&request, &CoefficientConfig::default()).unwrap();
    assert_abs_diff_eq!(overridden.volume.as_ml() / default.volume.as_ml(), 1.25, epsilon = 1e-9);
}

#[test]
fn test_parallel_beds() {
    let requests: Vec<BedRequest> = (0..20)
        .map(|i| {
            let mut r = reference_bed();
            r.prev_storage_mm = i as f64 * 5.0;
            r
        })
        .collect();

    let results = estimate_beds_parallel(&requests, &CoefficientConfig::default());
    let liters: Vec<f64> = results.iter().map(|r| r.as_ref().unwrap().liters).collect();

    // More water already stored means less to add
    assert!(liters.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(*liters.last().unwrap(), 0.0);
}

#[test]
fn test_weather_driven_pot_estimate() {
    let london = find_location("london").unwrap();
    let provider = FixedWeather::new().with_report(
        &london,
        WeatherReport {
            temp_min: 50.0,
            temp_max: 68.0,
            unit: TemperatureUnit::Fahrenheit,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            rain_3h_mm: None,
        },
    );

    let config = CoefficientConfig::default();
    let result = estimate_pot_from_weather(
        &provider,
        &london,
        172,
        PotRequest::new(0.0, 0.0, 10.0),
        &config,
    )
    .unwrap();

    // 50°F/68°F = 10°C/20°C
    let expected = estimate_pot_water_ml(10.0, 20.0, compute_ra(london.latitude_deg, 172), 0.8, 10.0);
    assert_abs_diff_eq!(result.volume.as_ml(), expected, epsilon = 1e-9);
}
