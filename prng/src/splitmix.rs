//! SplitMix64 seed expander
//!
//! Turns a single 64-bit seed into an arbitrarily long stream of well-mixed
//! words. Every seeded constructor in this crate fills its state from it.
//!
//! Reference: <http://xorshift.di.unimi.it/splitmix64.c> (public domain,
//! Sebastiano Vigna).

use crate::config::Algorithm;
use crate::stateful::Stateful;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;
const MIX_1: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_2: u64 = 0x94d0_49bb_1331_11eb;

/// SplitMix64 generator
///
/// Any state is valid, including zero.
///
/// # Example
/// ```
/// use pseudo_random::SplitMix64;
///
/// let mut expander = SplitMix64::new(0);
/// assert_eq!(expander.next(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    /// Internal state (64-bit)
    state: u64,
}

impl SplitMix64 {
    /// Create an expander with the given state
    pub fn new(state: u64) -> Self {
        Self { state }
    }

    /// Current state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate next 64-bit word
    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }
}

impl Stateful for SplitMix64 {
    type State = u64;

    const ALGORITHM: Algorithm = Algorithm::SplitMix64;

    fn state(&self) -> Self::State {
        self.state
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u64; 1];
        le::read_u64_into(&seed, &mut state);
        Self::new(state[0])
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}
