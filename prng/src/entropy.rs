//! Shannon entropy / efficiency estimator
//!
//! Tallies observations from a bounded discrete domain and scores how close
//! their distribution is to uniform. Used as the quality oracle for every
//! generator in this crate.

use std::collections::HashMap;
use std::hash::Hash;

/// Shannon entropy analysis over a domain of `domain_count` possible values
///
/// # Example
/// ```
/// use pseudo_random::ShannonEntropy;
///
/// let mut analysis = ShannonEntropy::new(4);
/// analysis.add_all([0u8, 1, 2, 3]);
/// assert!((analysis.efficiency() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ShannonEntropy<T> {
    observations: HashMap<T, usize>,
    observation_count: usize,
    domain_count: usize,
}

impl<T: Eq + Hash> ShannonEntropy<T> {
    /// Create an empty analysis
    ///
    /// # Arguments
    /// * `domain_count` - Number of possible unique values in the domain
    ///
    /// # Panics
    /// Panics if `domain_count` is zero
    pub fn new(domain_count: usize) -> Self {
        assert!(domain_count > 0, "The domain count must be positive");

        Self {
            observations: HashMap::new(),
            observation_count: 0,
            domain_count,
        }
    }

    /// Record one observation
    pub fn add(&mut self, observation: T) {
        *self.observations.entry(observation).or_insert(0) += 1;
        self.observation_count += 1;
    }

    /// Record every observation of a sequence, in order
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, observations: I) {
        for observation in observations {
            self.add(observation);
        }
    }

    /// Occurrence count per observed value
    pub fn observations(&self) -> &HashMap<T, usize> {
        &self.observations
    }

    /// Total number of observations recorded
    pub fn observation_count(&self) -> usize {
        self.observation_count
    }

    /// Declared domain size
    pub fn domain_count(&self) -> usize {
        self.domain_count
    }

    /// Shannon entropy of the observed distribution, in bits
    ///
    /// With no observations the sum is empty and the result is `-0.0`; score
    /// at least one observation before relying on it.
    ///
    /// # Panics
    /// Panics if more distinct values were observed than the domain holds
    pub fn entropy(&self) -> f64 {
        assert!(
            self.observations.len() <= self.domain_count,
            "Observed {} distinct values in a domain of {}",
            self.observations.len(),
            self.domain_count
        );

        let domain_scale = 1.0 / self.domain_count as f64;
        let scaled: Vec<f64> = self
            .observations
            .values()
            .map(|&count| count as f64 * domain_scale)
            .collect();

        let total_probability: f64 = scaled.iter().sum();
        let probability_scale = 1.0 / total_probability;

        let entropy: f64 = scaled
            .iter()
            .map(|&scaled_probability| {
                let probability = scaled_probability * probability_scale;
                probability * probability.log2()
            })
            .sum();

        -entropy
    }

    /// Entropy normalized by `log2(domain_count)`, in `[0, 1]`
    ///
    /// 1.0 means the observations are spread uniformly over the full domain.
    /// A single-value domain has zero maximum entropy, which yields NaN.
    pub fn efficiency(&self) -> f64 {
        self.entropy() / (self.domain_count as f64).log2()
    }
}

impl<T: Eq + Hash> Extend<T> for ShannonEntropy<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_observations() {
        let mut analysis = ShannonEntropy::new(10);
        analysis.add(3u32);
        analysis.add(3);
        analysis.add(7);

        assert_eq!(analysis.observation_count(), 3);
        assert_eq!(analysis.observations().get(&3), Some(&2));
        assert_eq!(analysis.observations().get(&7), Some(&1));
        assert_eq!(analysis.domain_count(), 10);
    }

    #[test]
    fn test_uniform_two_values_is_one_bit() {
        let mut analysis = ShannonEntropy::new(2);
        analysis.add_all([true, false, true, false]);

        assert!((analysis.entropy() - 1.0).abs() < 1e-12);
        assert!((analysis.efficiency() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_skewed_distribution() {
        // p = (3/4, 1/4) → H = 0.811278...
        let mut analysis = ShannonEntropy::new(2);
        analysis.add_all([0u8, 0, 0, 1]);

        let expected = -(0.75f64 * 0.75f64.log2() + 0.25f64 * 0.25f64.log2());
        assert!((analysis.entropy() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_entropy() {
        let mut analysis = ShannonEntropy::new(256);
        analysis.add_all(std::iter::repeat(42u8).take(256));

        assert_eq!(analysis.entropy(), 0.0);
        assert!(analysis.efficiency() < 0.5);
    }

    #[test]
    fn test_partial_domain_coverage_lowers_efficiency() {
        // Uniform over 4 of 16 values → 2 bits of a possible 4.
        let mut analysis = ShannonEntropy::new(16);
        analysis.extend([0u8, 1, 2, 3]);

        assert!((analysis.efficiency() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_analysis_is_not_guarded() {
        let analysis: ShannonEntropy<u8> = ShannonEntropy::new(4);
        assert_eq!(analysis.entropy(), 0.0);
    }

    #[test]
    #[should_panic(expected = "The domain count must be positive")]
    fn test_zero_domain_rejected() {
        let _ = ShannonEntropy::<u8>::new(0);
    }

    #[test]
    #[should_panic(expected = "distinct values in a domain of 2")]
    fn test_observations_outside_domain_rejected() {
        let mut analysis = ShannonEntropy::new(2);
        analysis.add_all([1u8, 2, 3]);
        analysis.entropy();
    }
}
