//! Generator selection and construction
//!
//! Callers that pick a generator at runtime (from a config file or a
//! command-line flag) describe it with a `GeneratorConfig` and get back an
//! `AnyGenerator`.

use crate::error::ConfigError;
use crate::splitmix::SplitMix64;
use crate::xoroshiro::{
    Xoroshiro1024PlusPlus, Xoroshiro1024Star, Xoroshiro1024StarStar, Xoroshiro128Plus,
    Xoroshiro128PlusPlus, Xoroshiro128StarStar,
};
use crate::xoshiro::{
    Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512Plus, Xoshiro512PlusPlus,
    Xoshiro512StarStar,
};
use rand_core::{Error, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generator algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[serde(rename = "splitmix64")]
    SplitMix64,
    Xoroshiro128Plus,
    Xoroshiro128PlusPlus,
    Xoroshiro128StarStar,
    Xoroshiro1024Star,
    Xoroshiro1024StarStar,
    Xoroshiro1024PlusPlus,
    Xoshiro256Plus,
    Xoshiro256PlusPlus,
    Xoshiro256StarStar,
    Xoshiro512Plus,
    Xoshiro512PlusPlus,
    Xoshiro512StarStar,
}

impl Algorithm {
    /// Every algorithm, seed expander first
    pub const ALL: [Algorithm; 13] = [
        Algorithm::SplitMix64,
        Algorithm::Xoroshiro128Plus,
        Algorithm::Xoroshiro128PlusPlus,
        Algorithm::Xoroshiro128StarStar,
        Algorithm::Xoroshiro1024Star,
        Algorithm::Xoroshiro1024StarStar,
        Algorithm::Xoroshiro1024PlusPlus,
        Algorithm::Xoshiro256Plus,
        Algorithm::Xoshiro256PlusPlus,
        Algorithm::Xoshiro256StarStar,
        Algorithm::Xoshiro512Plus,
        Algorithm::Xoshiro512PlusPlus,
        Algorithm::Xoshiro512StarStar,
    ];

    /// Stable name, identical to the serde representation
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SplitMix64 => "splitmix64",
            Algorithm::Xoroshiro128Plus => "xoroshiro128-plus",
            Algorithm::Xoroshiro128PlusPlus => "xoroshiro128-plus-plus",
            Algorithm::Xoroshiro128StarStar => "xoroshiro128-star-star",
            Algorithm::Xoroshiro1024Star => "xoroshiro1024-star",
            Algorithm::Xoroshiro1024StarStar => "xoroshiro1024-star-star",
            Algorithm::Xoroshiro1024PlusPlus => "xoroshiro1024-plus-plus",
            Algorithm::Xoshiro256Plus => "xoshiro256-plus",
            Algorithm::Xoshiro256PlusPlus => "xoshiro256-plus-plus",
            Algorithm::Xoshiro256StarStar => "xoshiro256-star-star",
            Algorithm::Xoshiro512Plus => "xoshiro512-plus",
            Algorithm::Xoshiro512PlusPlus => "xoshiro512-plus-plus",
            Algorithm::Xoshiro512StarStar => "xoshiro512-star-star",
        }
    }

    /// Number of state bits
    pub fn state_bits(self) -> u32 {
        match self {
            Algorithm::SplitMix64 => 64,
            Algorithm::Xoroshiro128Plus
            | Algorithm::Xoroshiro128PlusPlus
            | Algorithm::Xoroshiro128StarStar => 128,
            Algorithm::Xoroshiro1024Star
            | Algorithm::Xoroshiro1024StarStar
            | Algorithm::Xoroshiro1024PlusPlus => 1024,
            Algorithm::Xoshiro256Plus
            | Algorithm::Xoshiro256PlusPlus
            | Algorithm::Xoshiro256StarStar => 256,
            Algorithm::Xoshiro512Plus
            | Algorithm::Xoshiro512PlusPlus
            | Algorithm::Xoshiro512StarStar => 512,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// Which generator to build and how to seed it
///
/// # Example
/// ```
/// use pseudo_random::{Algorithm, GeneratorConfig};
///
/// let config: GeneratorConfig =
///     serde_json::from_str(r#"{"algorithm": "xoshiro256-plus-plus", "seed": 42}"#).unwrap();
/// assert_eq!(config.algorithm, Algorithm::Xoshiro256PlusPlus);
///
/// let mut rng = config.build();
/// let mut again = config.build();
/// assert_eq!(rng.next(), again.next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub algorithm: Algorithm,

    /// Deterministic seed; host randomness when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Config for a reproducible stream
    pub fn seeded(algorithm: Algorithm, seed: u64) -> Self {
        Self {
            algorithm,
            seed: Some(seed),
        }
    }

    /// Build the configured generator
    pub fn build(&self) -> AnyGenerator {
        match self.seed {
            Some(seed) => AnyGenerator::with_seed(self.algorithm, seed),
            None => AnyGenerator::new(self.algorithm),
        }
    }
}

/// Any generator of this crate, chosen at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    SplitMix64(SplitMix64),
    Xoroshiro128Plus(Xoroshiro128Plus),
    Xoroshiro128PlusPlus(Xoroshiro128PlusPlus),
    Xoroshiro128StarStar(Xoroshiro128StarStar),
    Xoroshiro1024Star(Xoroshiro1024Star),
    Xoroshiro1024StarStar(Xoroshiro1024StarStar),
    Xoroshiro1024PlusPlus(Xoroshiro1024PlusPlus),
    Xoshiro256Plus(Xoshiro256Plus),
    Xoshiro256PlusPlus(Xoshiro256PlusPlus),
    Xoshiro256StarStar(Xoshiro256StarStar),
    Xoshiro512Plus(Xoshiro512Plus),
    Xoshiro512PlusPlus(Xoshiro512PlusPlus),
    Xoshiro512StarStar(Xoshiro512StarStar),
}

/// Apply the same expression to whichever generator is inside.
macro_rules! dispatch {
    ($value:expr, $rng:ident => $body:expr) => {
        match $value {
            AnyGenerator::SplitMix64($rng) => $body,
            AnyGenerator::Xoroshiro128Plus($rng) => $body,
            AnyGenerator::Xoroshiro128PlusPlus($rng) => $body,
            AnyGenerator::Xoroshiro128StarStar($rng) => $body,
            AnyGenerator::Xoroshiro1024Star($rng) => $body,
            AnyGenerator::Xoroshiro1024StarStar($rng) => $body,
            AnyGenerator::Xoroshiro1024PlusPlus($rng) => $body,
            AnyGenerator::Xoshiro256Plus($rng) => $body,
            AnyGenerator::Xoshiro256PlusPlus($rng) => $body,
            AnyGenerator::Xoshiro256StarStar($rng) => $body,
            AnyGenerator::Xoshiro512Plus($rng) => $body,
            AnyGenerator::Xoshiro512PlusPlus($rng) => $body,
            AnyGenerator::Xoshiro512StarStar($rng) => $body,
        }
    };
}

impl AnyGenerator {
    /// Seed `algorithm` from host randomness
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_seed(algorithm, crate::shared::host_seed())
    }

    /// Seed `algorithm` deterministically
    ///
    /// SplitMix64 takes the seed as its state directly.
    pub fn with_seed(algorithm: Algorithm, seed: u64) -> Self {
        match algorithm {
            Algorithm::SplitMix64 => AnyGenerator::SplitMix64(SplitMix64::new(seed)),
            Algorithm::Xoroshiro128Plus => {
                AnyGenerator::Xoroshiro128Plus(Xoroshiro128Plus::with_seed(seed))
            }
            Algorithm::Xoroshiro128PlusPlus => {
                AnyGenerator::Xoroshiro128PlusPlus(Xoroshiro128PlusPlus::with_seed(seed))
            }
            Algorithm::Xoroshiro128StarStar => {
                AnyGenerator::Xoroshiro128StarStar(Xoroshiro128StarStar::with_seed(seed))
            }
            Algorithm::Xoroshiro1024Star => {
                AnyGenerator::Xoroshiro1024Star(Xoroshiro1024Star::with_seed(seed))
            }
            Algorithm::Xoroshiro1024StarStar => {
                AnyGenerator::Xoroshiro1024StarStar(Xoroshiro1024StarStar::with_seed(seed))
            }
            Algorithm::Xoroshiro1024PlusPlus => {
                AnyGenerator::Xoroshiro1024PlusPlus(Xoroshiro1024PlusPlus::with_seed(seed))
            }
            Algorithm::Xoshiro256Plus => AnyGenerator::Xoshiro256Plus(Xoshiro256Plus::with_seed(seed)),
            Algorithm::Xoshiro256PlusPlus => {
                AnyGenerator::Xoshiro256PlusPlus(Xoshiro256PlusPlus::with_seed(seed))
            }
            Algorithm::Xoshiro256StarStar => {
                AnyGenerator::Xoshiro256StarStar(Xoshiro256StarStar::with_seed(seed))
            }
            Algorithm::Xoshiro512Plus => AnyGenerator::Xoshiro512Plus(Xoshiro512Plus::with_seed(seed)),
            Algorithm::Xoshiro512PlusPlus => {
                AnyGenerator::Xoshiro512PlusPlus(Xoshiro512PlusPlus::with_seed(seed))
            }
            Algorithm::Xoshiro512StarStar => {
                AnyGenerator::Xoshiro512StarStar(Xoshiro512StarStar::with_seed(seed))
            }
        }
    }

    /// Algorithm of the wrapped generator
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyGenerator::SplitMix64(_) => Algorithm::SplitMix64,
            AnyGenerator::Xoroshiro128Plus(_) => Algorithm::Xoroshiro128Plus,
            AnyGenerator::Xoroshiro128PlusPlus(_) => Algorithm::Xoroshiro128PlusPlus,
            AnyGenerator::Xoroshiro128StarStar(_) => Algorithm::Xoroshiro128StarStar,
            AnyGenerator::Xoroshiro1024Star(_) => Algorithm::Xoroshiro1024Star,
            AnyGenerator::Xoroshiro1024StarStar(_) => Algorithm::Xoroshiro1024StarStar,
            AnyGenerator::Xoroshiro1024PlusPlus(_) => Algorithm::Xoroshiro1024PlusPlus,
            AnyGenerator::Xoshiro256Plus(_) => Algorithm::Xoshiro256Plus,
            AnyGenerator::Xoshiro256PlusPlus(_) => Algorithm::Xoshiro256PlusPlus,
            AnyGenerator::Xoshiro256StarStar(_) => Algorithm::Xoshiro256StarStar,
            AnyGenerator::Xoshiro512Plus(_) => Algorithm::Xoshiro512Plus,
            AnyGenerator::Xoshiro512PlusPlus(_) => Algorithm::Xoshiro512PlusPlus,
            AnyGenerator::Xoshiro512StarStar(_) => Algorithm::Xoshiro512StarStar,
        }
    }

    /// Generate the next 64-bit word
    pub fn next(&mut self) -> u64 {
        dispatch!(self, rng => rng.next())
    }
}

impl RngCore for AnyGenerator {
    fn next_u32(&mut self) -> u32 {
        dispatch!(self, rng => rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dispatch!(self, rng => rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_names_match_serde() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm));
        }
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(
            " Xoshiro256-Star-Star ".parse::<Algorithm>(),
            Ok(Algorithm::Xoshiro256StarStar)
        );
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "mersenne-twister".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownAlgorithm("mersenne-twister".to_string()));
        assert_eq!(err.to_string(), "Unknown algorithm: mersenne-twister");
    }

    #[test]
    fn test_build_wraps_requested_algorithm() {
        for algorithm in Algorithm::ALL {
            let rng = GeneratorConfig::seeded(algorithm, 1).build();
            assert_eq!(rng.algorithm(), algorithm);
        }
    }

    #[test]
    fn test_seeded_build_matches_concrete_generator() {
        let mut any = GeneratorConfig::seeded(Algorithm::Xoroshiro1024StarStar, 99).build();
        let mut concrete = Xoroshiro1024StarStar::with_seed(99);
        for _ in 0..100 {
            assert_eq!(any.next(), concrete.next());
        }
    }

    #[test]
    fn test_missing_seed_defaults_to_none() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"algorithm": "xoroshiro128-plus"}"#).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.build().algorithm(), Algorithm::Xoroshiro128Plus);
    }

    #[test]
    fn test_state_bits() {
        assert_eq!(Algorithm::SplitMix64.state_bits(), 64);
        assert_eq!(Algorithm::Xoroshiro1024PlusPlus.state_bits(), 1024);
        assert_eq!(Algorithm::Xoshiro512Plus.state_bits(), 512);
    }
}
