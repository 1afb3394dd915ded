//! Pseudo Random - xoroshiro/xoshiro generator family
//!
//! Fast, non-cryptographic 64-bit generators with reproducible streams, plus
//! a Shannon entropy estimator used to score their output.
//!
//! # Architecture
//!
//! - **shared**: rotation primitive, bounded draws, host randomness
//! - **stateful**: the state-in/word-out seam and the shared seeding contract
//! - **splitmix**: SplitMix64 seed expander
//! - **xoroshiro**: 128-bit and 1024-bit generators
//! - **xoshiro**: 256-bit and 512-bit generators
//! - **entropy**: Shannon entropy / efficiency estimator
//! - **config**: runtime generator selection
//! - **checkpoint**: save/restore generator state
//!
//! # Critical Invariants
//!
//! 1. Generator state is never all zeros
//! 2. Same seed → same stream, bit-exact with the public-domain reference code
//! 3. None of these generators is cryptographically secure

// Module declarations
#[macro_use]
mod stateful;

pub mod checkpoint;
pub mod config;
pub mod entropy;
pub mod error;
pub mod shared;
pub mod splitmix;
pub mod xoroshiro;
pub mod xoshiro;

// Re-exports for convenience
pub use checkpoint::GeneratorSnapshot;
pub use config::{Algorithm, AnyGenerator, GeneratorConfig};
pub use entropy::ShannonEntropy;
pub use error::{CheckpointError, ConfigError, StateError};
pub use shared::{next_below, rotl, Seed1024, Seed512};
pub use splitmix::SplitMix64;
pub use stateful::{validate_pointer, validate_state, ExtendedStateful, Stateful, ARRAY_WORDS};
pub use xoroshiro::{
    Xoroshiro1024PlusPlus, Xoroshiro1024Star, Xoroshiro1024StarStar, Xoroshiro128Plus,
    Xoroshiro128PlusPlus, Xoroshiro128StarStar,
};
pub use xoshiro::{
    Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512Plus, Xoshiro512PlusPlus,
    Xoshiro512StarStar,
};

/// Re-exported so callers can use the trait methods without a direct dependency.
pub use rand_core;
