//! Batch estimates across many pots or beds
//!
//! Each estimate is independent, so batches fan out over Rayon. Results keep
//! the input order; one bad request does not fail the rest.

use rayon::prelude::*;

use crate::calculators::bed::{estimate_bed, BedBalance, BedRequest};
use crate::calculators::pot::{estimate_pot, PotRequest};
use crate::calculators::result::IrrigationResult;
use crate::config::CoefficientConfig;
use crate::error::CalcError;

pub fn estimate_pots_parallel(
    requests: &[PotRequest],
    config: &CoefficientConfig,
) -> Vec<Result<IrrigationResult, CalcError>> {
    requests
        .par_iter()
        .map(|req| estimate_pot(req, config))
        .collect()
}

pub fn estimate_beds_parallel(
    requests: &[BedRequest],
    config: &CoefficientConfig,
) -> Vec<Result<BedBalance, CalcError>> {
    requests
        .par_iter()
        .map(|req| estimate_bed(req, config))
        .collect()
}

/// Sum of the successful pot volumes (mL)
pub fn total_pot_ml(results: &[Result<IrrigationResult, CalcError>]) -> f64 {
    results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|r| r.volume.as_ml())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::pot::estimate_pot_water_ml;

    #[test]
    fn test_parallel_matches_sequential() {
        let config = CoefficientConfig::default();
        let requests: Vec<PotRequest> = (1..=50)
            .map(|d| PotRequest::new(8.0, 24.0, d as f64).with_plant_type("flower"))
            .collect();

        let parallel = estimate_pots_parallel(&requests, &config);
        assert_eq!(parallel.len(), requests.len());

        for (req, res) in requests.iter().zip(&parallel) {
            let sequential = estimate_pot(req, &config).unwrap();
            assert_eq!(res.as_ref().unwrap(), &sequential);
        }
    }

    #[test]
    fn test_bad_request_does_not_poison_batch() {
        let config = CoefficientConfig::default();
        let requests = vec![
            PotRequest::new(10.0, 20.0, 10.0),
            PotRequest::new(10.0, 20.0, -1.0),
            PotRequest::new(10.0, 20.0, 10.0),
        ];
        let results = estimate_pots_parallel(&requests, &config);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let expected = 2.0 * estimate_pot_water_ml(10.0, 20.0, 20.0, 0.8, 10.0);
        assert!((total_pot_ml(&results) - expected).abs() < 1e-9);
    }
}
