//! Tests for the Shannon entropy estimator bounds

use proptest::prelude::*;
use pseudo_random::{next_below, ShannonEntropy, Xoshiro256StarStar};

fn uniform_efficiency(domain_count: usize, seed: u64) -> f64 {
    let mut rng = Xoshiro256StarStar::with_seed(seed);
    let mut analysis = ShannonEntropy::new(domain_count);

    for _ in 0..50 * domain_count {
        analysis.add(next_below(&mut rng, domain_count as u64));
    }
    analysis.efficiency()
}

fn repeated_efficiency(domain_count: usize, value: u64) -> f64 {
    let mut analysis = ShannonEntropy::new(domain_count);
    analysis.add_all(std::iter::repeat(value).take(domain_count));
    analysis.efficiency()
}

#[test]
fn test_uniform_samples_are_efficient() {
    for domain_count in [16, 100, 256, 1000] {
        let efficiency = uniform_efficiency(domain_count, 0);
        assert!(
            efficiency > 0.95,
            "domain {}: efficiency {} not above 0.95",
            domain_count,
            efficiency
        );
    }
}

#[test]
fn test_repeated_value_is_inefficient() {
    for domain_count in [2, 3, 16, 65_536] {
        assert!(repeated_efficiency(domain_count, 1) < 0.5);
    }
}

#[test]
fn test_observation_count_tracks_batches() {
    let mut analysis = ShannonEntropy::new(8);
    analysis.add_all(0u8..8);
    analysis.add_all(0u8..4);

    assert_eq!(analysis.observation_count(), 12);
    assert_eq!(analysis.observations().len(), 8);
    assert_eq!(analysis.observations()[&0], 2);
    assert_eq!(analysis.observations()[&7], 1);
}

#[test]
fn test_order_of_observations_is_irrelevant() {
    let mut forward = ShannonEntropy::new(10);
    let mut backward = ShannonEntropy::new(10);
    forward.add_all([1u8, 2, 2, 3, 3, 3]);
    backward.add_all([3u8, 3, 3, 2, 2, 1]);

    assert!((forward.entropy() - backward.entropy()).abs() < 1e-12);
}

#[test]
fn test_scores_are_repeatable() {
    let mut analysis = ShannonEntropy::new(4);
    analysis.add_all(["a", "b", "b", "c"]);

    let first = analysis.efficiency();
    assert_eq!(analysis.efficiency(), first);
    assert_eq!(analysis.observation_count(), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_uniform_efficiency_above_bound(domain_count in 8usize..=512, seed in any::<u64>()) {
        let efficiency = uniform_efficiency(domain_count, seed);
        prop_assert!(efficiency > 0.95, "efficiency {}", efficiency);
    }

    #[test]
    fn prop_repeated_value_below_half(domain_count in 2usize..=4096, value in any::<u64>()) {
        prop_assert!(repeated_efficiency(domain_count, value) < 0.5);
    }

    #[test]
    fn prop_efficiency_in_unit_interval(values in prop::collection::vec(0u8..16, 1..200)) {
        let mut analysis = ShannonEntropy::new(16);
        analysis.add_all(values);
        let efficiency = analysis.efficiency();
        prop_assert!((0.0..=1.0 + 1e-12).contains(&efficiency));
    }
}
