//! End-to-end quality check
//!
//! 500,000 draws reduced to 16 bits must spread over the full 65,536-value
//! domain with an efficiency of at least 0.99.

use pseudo_random::rand_core::{OsRng, RngCore};
use pseudo_random::{Algorithm, AnyGenerator, ShannonEntropy};

const SAMPLES: usize = 500_000;
const DOMAIN_COUNT: usize = 1 << 16;
const MIN_EFFICIENCY: f64 = 0.99;

fn efficiency<G: RngCore>(mut rng: G) -> f64 {
    let mut analysis = ShannonEntropy::new(DOMAIN_COUNT);
    for _ in 0..SAMPLES {
        analysis.add(rng.next_u64() as u16);
    }
    analysis.efficiency()
}

#[test]
fn test_host_randomness() {
    let efficiency = efficiency(OsRng);
    assert!(efficiency >= MIN_EFFICIENCY, "OsRng efficiency {}", efficiency);
}

#[test]
fn test_every_algorithm_seeded_with_zero() {
    for algorithm in Algorithm::ALL {
        let efficiency = efficiency(AnyGenerator::with_seed(algorithm, 0));
        assert!(
            efficiency >= MIN_EFFICIENCY,
            "{} efficiency {} below {}",
            algorithm,
            efficiency,
            MIN_EFFICIENCY
        );
    }
}
