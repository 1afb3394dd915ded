//! Stateful generator seam
//!
//! Every generator is "state in, word out": one call reads the state,
//! computes an output word from the pre-update values, writes the new state
//! and returns the word. Two shapes exist:
//!
//! - **Simple**: a flat word array (`[u64; N]`), transformed by
//!   `fn(&mut [u64; N]) -> u64`.
//! - **Extended**: a word array plus a rotating pointer, transformed by
//!   `fn(&mut usize, &mut [u64; 16]) -> u64`. Both halves are updated inside
//!   the same `&mut self` call, so they can never be observed out of step.
//!
//! The macros below stamp out the construction contract shared by every
//! variant (raw state, 64-bit seed, host randomness) so each variant only
//! supplies its transform.

use crate::config::Algorithm;
use crate::error::StateError;
use crate::splitmix::SplitMix64;
use std::fmt;

/// Upper bound on seed redraws before giving up.
///
/// An all-zero draw from SplitMix64 is astronomically unlikely; hitting the
/// cap means the expander itself is broken.
pub(crate) const MAX_SEED_DRAWS: usize = 1000;

/// Length of the state array of the 1024-bit generators
pub const ARRAY_WORDS: usize = 16;

/// Read access to a generator's state
pub trait Stateful {
    /// Full state of the generator
    type State: Copy + Eq + fmt::Debug;

    /// Which algorithm this generator implements
    const ALGORITHM: Algorithm;

    /// Current state (for checkpointing and comparison)
    fn state(&self) -> Self::State;
}

/// Generators that also carry a rotating parameter next to their state
pub trait ExtendedStateful: Stateful {
    /// Auxiliary parameter advanced by the transform
    type Param: Copy + Eq + fmt::Debug;

    /// Current parameter value
    fn param(&self) -> Self::Param;
}

/// Reject the all-zero state, the fixed point of every linear update.
pub fn validate_state<const N: usize>(state: &[u64; N]) -> Result<(), StateError> {
    if state.iter().all(|&word| word == 0) {
        Err(StateError::AllZero)
    } else {
        Ok(())
    }
}

/// Reject pointers that do not index the 16-word array.
pub fn validate_pointer(pointer: usize) -> Result<(), StateError> {
    if pointer < ARRAY_WORDS {
        Ok(())
    } else {
        Err(StateError::PointerOutOfRange(pointer))
    }
}

/// Fill an `N`-word state from the expander, redrawing the whole state
/// while it is invalid.
///
/// # Panics
/// Panics after `MAX_SEED_DRAWS` consecutive invalid draws
pub(crate) fn draw_state<const N: usize>(
    expander: &mut SplitMix64,
    algorithm: Algorithm,
) -> [u64; N] {
    for attempt in 1..=MAX_SEED_DRAWS {
        let state: [u64; N] = std::array::from_fn(|_| expander.next());
        if validate_state(&state).is_ok() {
            return state;
        }
        log::warn!(
            "{} drew an all-zero state on attempt {}, redrawing",
            algorithm,
            attempt
        );
    }
    panic!(
        "{} could not draw a valid state in {} attempts",
        algorithm, MAX_SEED_DRAWS
    );
}

/// Defines a generator over a flat `[u64; N]` state.
macro_rules! simple_generator {
    (
        $(#[$meta:meta])*
        $name:ident {
            algorithm: $algorithm:ident,
            words: $words:literal,
            seed: $seed:ty,
            transform: $transform:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            s: [u64; $words],
        }

        impl $name {
            /// Create a generator seeded from host randomness
            pub fn new() -> Self {
                Self::with_seed($crate::shared::host_seed())
            }

            /// Create a generator whose state is expanded from `seed` by SplitMix64
            ///
            /// Same seed → same stream.
            pub fn with_seed(seed: u64) -> Self {
                let mut expander = $crate::splitmix::SplitMix64::new(seed);
                let s = $crate::stateful::draw_state::<$words>(
                    &mut expander,
                    $crate::config::Algorithm::$algorithm,
                );
                ::log::trace!(
                    "seeded {} from {:#018x}",
                    $crate::config::Algorithm::$algorithm,
                    seed
                );
                Self { s }
            }

            /// Create a generator from an explicit raw state
            ///
            /// # Panics
            /// Panics if `state` is all zeros
            pub fn from_state(state: [u64; $words]) -> Self {
                Self::try_from_state(state).unwrap_or_else(|err| panic!("{}", err))
            }

            /// Create a generator from an explicit raw state, reporting invalid state
            pub fn try_from_state(
                state: [u64; $words],
            ) -> Result<Self, $crate::error::StateError> {
                $crate::stateful::validate_state(&state)?;
                Ok(Self { s: state })
            }

            /// Current state
            pub fn state(&self) -> [u64; $words] {
                self.s
            }

            /// Generate the next 64-bit word and advance the state
            pub fn next(&mut self) -> u64 {
                $transform(&mut self.s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::stateful::Stateful for $name {
            type State = [u64; $words];

            const ALGORITHM: $crate::config::Algorithm = $crate::config::Algorithm::$algorithm;

            fn state(&self) -> Self::State {
                self.s
            }
        }

        impl ::rand_core::RngCore for $name {
            fn next_u32(&mut self) -> u32 {
                (self.next() >> 32) as u32
            }

            fn next_u64(&mut self) -> u64 {
                self.next()
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                ::rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ::rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl ::rand_core::SeedableRng for $name {
            type Seed = $seed;

            /// Little-endian state words; an all-zero seed falls back to
            /// `with_seed(0)`.
            fn from_seed(mut seed: Self::Seed) -> Self {
                let bytes: &mut [u8] = seed.as_mut();
                let mut state = [0u64; $words];
                ::rand_core::le::read_u64_into(bytes, &mut state);
                Self::try_from_state(state).unwrap_or_else(|_| Self::with_seed(0))
            }

            fn seed_from_u64(seed: u64) -> Self {
                Self::with_seed(seed)
            }
        }
    };
}

/// Defines a generator over a 16-word array with a rotating pointer.
macro_rules! extended_generator {
    (
        $(#[$meta:meta])*
        $name:ident {
            algorithm: $algorithm:ident,
            transform: $transform:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            p: usize,
            s: [u64; $crate::stateful::ARRAY_WORDS],
        }

        impl $name {
            /// Create a generator seeded from host randomness
            pub fn new() -> Self {
                Self::with_seed($crate::shared::host_seed())
            }

            /// Create a generator whose pointer and state are drawn from a
            /// SplitMix64 expander seeded with `seed`
            ///
            /// The pointer is drawn first, then the sixteen state words.
            pub fn with_seed(seed: u64) -> Self {
                let mut expander = $crate::splitmix::SplitMix64::new(seed);
                let p = $crate::shared::next_below(
                    &mut expander,
                    $crate::stateful::ARRAY_WORDS as u64,
                ) as usize;
                let s = $crate::stateful::draw_state::<{ $crate::stateful::ARRAY_WORDS }>(
                    &mut expander,
                    $crate::config::Algorithm::$algorithm,
                );
                ::log::trace!(
                    "seeded {} from {:#018x} (pointer {})",
                    $crate::config::Algorithm::$algorithm,
                    seed,
                    p
                );
                Self { p, s }
            }

            /// Create a generator from an explicit pointer and raw state
            ///
            /// # Panics
            /// Panics if `pointer` is not within `0..16` or `state` is all zeros
            pub fn from_state(
                pointer: usize,
                state: [u64; $crate::stateful::ARRAY_WORDS],
            ) -> Self {
                Self::try_from_state(pointer, state).unwrap_or_else(|err| panic!("{}", err))
            }

            /// Create a generator from an explicit pointer and raw state,
            /// reporting invalid input
            pub fn try_from_state(
                pointer: usize,
                state: [u64; $crate::stateful::ARRAY_WORDS],
            ) -> Result<Self, $crate::error::StateError> {
                $crate::stateful::validate_pointer(pointer)?;
                $crate::stateful::validate_state(&state)?;
                Ok(Self { p: pointer, s: state })
            }

            /// Current rotation pointer
            pub fn pointer(&self) -> usize {
                self.p
            }

            /// Current state array
            pub fn state(&self) -> [u64; $crate::stateful::ARRAY_WORDS] {
                self.s
            }

            /// Generate the next 64-bit word and advance pointer and state
            pub fn next(&mut self) -> u64 {
                $transform(&mut self.p, &mut self.s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::stateful::Stateful for $name {
            type State = [u64; $crate::stateful::ARRAY_WORDS];

            const ALGORITHM: $crate::config::Algorithm = $crate::config::Algorithm::$algorithm;

            fn state(&self) -> Self::State {
                self.s
            }
        }

        impl $crate::stateful::ExtendedStateful for $name {
            type Param = usize;

            fn param(&self) -> Self::Param {
                self.p
            }
        }

        impl ::rand_core::RngCore for $name {
            fn next_u32(&mut self) -> u32 {
                (self.next() >> 32) as u32
            }

            fn next_u64(&mut self) -> u64 {
                self.next()
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                ::rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ::rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl ::rand_core::SeedableRng for $name {
            type Seed = $crate::shared::Seed1024;

            /// Little-endian state words with the pointer at zero; an
            /// all-zero seed falls back to `with_seed(0)`.
            fn from_seed(mut seed: Self::Seed) -> Self {
                let bytes: &mut [u8] = seed.as_mut();
                let mut state = [0u64; $crate::stateful::ARRAY_WORDS];
                ::rand_core::le::read_u64_into(bytes, &mut state);
                Self::try_from_state(0, state).unwrap_or_else(|_| Self::with_seed(0))
            }

            fn seed_from_u64(seed: u64) -> Self {
                Self::with_seed(seed)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_state_rejects_all_zero() {
        assert_eq!(validate_state(&[0u64; 4]), Err(StateError::AllZero));
        assert_eq!(validate_state(&[0u64; 16]), Err(StateError::AllZero));
    }

    #[test]
    fn test_validate_state_accepts_single_bit() {
        assert!(validate_state(&[0, 0, 0, 1]).is_ok());
        assert!(validate_state(&[1u64 << 63, 0]).is_ok());
    }

    #[test]
    fn test_validate_pointer_bounds() {
        assert!(validate_pointer(0).is_ok());
        assert!(validate_pointer(15).is_ok());
        assert_eq!(validate_pointer(16), Err(StateError::PointerOutOfRange(16)));
    }

    #[test]
    fn test_draw_state_consumes_one_word_per_slot() {
        let mut expander = SplitMix64::new(7);
        let state: [u64; 8] = draw_state(&mut expander, Algorithm::Xoshiro512Plus);

        let mut reference = SplitMix64::new(7);
        for word in state {
            assert_eq!(word, reference.next());
        }
        assert_eq!(expander, reference);
    }
}
