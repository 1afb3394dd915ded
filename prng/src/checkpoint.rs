//! Checkpoint - Save/Load Generator State
//!
//! A snapshot captures everything a generator needs to resume its stream:
//! the algorithm, the state words and, for the 1024-bit class, the pointer.
//!
//! # Critical Invariants
//!
//! - **Continuity**: a restored generator emits exactly the words the
//!   original would have emitted next
//! - **Validity**: restore goes through the checked constructors, so an
//!   all-zero state or out-of-range pointer is rejected, never resumed

use crate::config::AnyGenerator;
use crate::error::CheckpointError;
use crate::splitmix::SplitMix64;
use crate::stateful::ARRAY_WORDS;
use crate::xoroshiro::{
    Xoroshiro1024PlusPlus, Xoroshiro1024Star, Xoroshiro1024StarStar, Xoroshiro128Plus,
    Xoroshiro128PlusPlus, Xoroshiro128StarStar,
};
use crate::xoshiro::{
    Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512Plus, Xoshiro512PlusPlus,
    Xoshiro512StarStar,
};
use serde::{Deserialize, Serialize};

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum GeneratorSnapshot {
    #[serde(rename = "splitmix64")]
    SplitMix64 { state: u64 },
    Xoroshiro128Plus { state: [u64; 2] },
    Xoroshiro128PlusPlus { state: [u64; 2] },
    Xoroshiro128StarStar { state: [u64; 2] },
    Xoroshiro1024Star { pointer: usize, state: [u64; ARRAY_WORDS] },
    Xoroshiro1024StarStar { pointer: usize, state: [u64; ARRAY_WORDS] },
    Xoroshiro1024PlusPlus { pointer: usize, state: [u64; ARRAY_WORDS] },
    Xoshiro256Plus { state: [u64; 4] },
    Xoshiro256PlusPlus { state: [u64; 4] },
    Xoshiro256StarStar { state: [u64; 4] },
    Xoshiro512Plus { state: [u64; 8] },
    Xoshiro512PlusPlus { state: [u64; 8] },
    Xoshiro512StarStar { state: [u64; 8] },
}

impl GeneratorSnapshot {
    /// Rebuild the generator, validating the stored state
    pub fn restore(&self) -> Result<AnyGenerator, CheckpointError> {
        let generator = match *self {
            GeneratorSnapshot::SplitMix64 { state } => {
                AnyGenerator::SplitMix64(SplitMix64::new(state))
            }
            GeneratorSnapshot::Xoroshiro128Plus { state } => {
                AnyGenerator::Xoroshiro128Plus(Xoroshiro128Plus::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoroshiro128PlusPlus { state } => {
                AnyGenerator::Xoroshiro128PlusPlus(Xoroshiro128PlusPlus::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoroshiro128StarStar { state } => {
                AnyGenerator::Xoroshiro128StarStar(Xoroshiro128StarStar::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoroshiro1024Star { pointer, state } => {
                AnyGenerator::Xoroshiro1024Star(Xoroshiro1024Star::try_from_state(pointer, state)?)
            }
            GeneratorSnapshot::Xoroshiro1024StarStar { pointer, state } => {
                AnyGenerator::Xoroshiro1024StarStar(Xoroshiro1024StarStar::try_from_state(
                    pointer, state,
                )?)
            }
            GeneratorSnapshot::Xoroshiro1024PlusPlus { pointer, state } => {
                AnyGenerator::Xoroshiro1024PlusPlus(Xoroshiro1024PlusPlus::try_from_state(
                    pointer, state,
                )?)
            }
            GeneratorSnapshot::Xoshiro256Plus { state } => {
                AnyGenerator::Xoshiro256Plus(Xoshiro256Plus::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoshiro256PlusPlus { state } => {
                AnyGenerator::Xoshiro256PlusPlus(Xoshiro256PlusPlus::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoshiro256StarStar { state } => {
                AnyGenerator::Xoshiro256StarStar(Xoshiro256StarStar::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoshiro512Plus { state } => {
                AnyGenerator::Xoshiro512Plus(Xoshiro512Plus::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoshiro512PlusPlus { state } => {
                AnyGenerator::Xoshiro512PlusPlus(Xoshiro512PlusPlus::try_from_state(state)?)
            }
            GeneratorSnapshot::Xoshiro512StarStar { state } => {
                AnyGenerator::Xoshiro512StarStar(Xoshiro512StarStar::try_from_state(state)?)
            }
        };

        log::debug!("restored {} from snapshot", generator.algorithm());
        Ok(generator)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON (state is validated on `restore`, not here)
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&AnyGenerator> for GeneratorSnapshot {
    fn from(generator: &AnyGenerator) -> Self {
        match generator {
            AnyGenerator::SplitMix64(rng) => GeneratorSnapshot::SplitMix64 {
                state: rng.state(),
            },
            AnyGenerator::Xoroshiro128Plus(rng) => GeneratorSnapshot::Xoroshiro128Plus {
                state: rng.state(),
            },
            AnyGenerator::Xoroshiro128PlusPlus(rng) => GeneratorSnapshot::Xoroshiro128PlusPlus {
                state: rng.state(),
            },
            AnyGenerator::Xoroshiro128StarStar(rng) => GeneratorSnapshot::Xoroshiro128StarStar {
                state: rng.state(),
            },
            AnyGenerator::Xoroshiro1024Star(rng) => GeneratorSnapshot::Xoroshiro1024Star {
                pointer: rng.pointer(),
                state: rng.state(),
            },
            AnyGenerator::Xoroshiro1024StarStar(rng) => GeneratorSnapshot::Xoroshiro1024StarStar {
                pointer: rng.pointer(),
                state: rng.state(),
            },
            AnyGenerator::Xoroshiro1024PlusPlus(rng) => GeneratorSnapshot::Xoroshiro1024PlusPlus {
                pointer: rng.pointer(),
                state: rng.state(),
            },
            AnyGenerator::Xoshiro256Plus(rng) => GeneratorSnapshot::Xoshiro256Plus {
                state: rng.state(),
            },
            AnyGenerator::Xoshiro256PlusPlus(rng) => GeneratorSnapshot::Xoshiro256PlusPlus {
                state: rng.state(),
            },
            AnyGenerator::Xoshiro256StarStar(rng) => GeneratorSnapshot::Xoshiro256StarStar {
                state: rng.state(),
            },
            AnyGenerator::Xoshiro512Plus(rng) => GeneratorSnapshot::Xoshiro512Plus {
                state: rng.state(),
            },
            AnyGenerator::Xoshiro512PlusPlus(rng) => GeneratorSnapshot::Xoshiro512PlusPlus {
                state: rng.state(),
            },
            AnyGenerator::Xoshiro512StarStar(rng) => GeneratorSnapshot::Xoshiro512StarStar {
                state: rng.state(),
            },
        }
    }
}

impl AnyGenerator {
    /// Capture the current state
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot::from(self)
    }
}
