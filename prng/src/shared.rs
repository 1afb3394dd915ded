//! Primitives shared by every generator

use rand_core::{OsRng, RngCore};

/// Rotate `x` left by `k` bits.
///
/// Callers must keep `0 < k < 64`. Generators only pass fixed constants, so
/// the shift amount is not checked here.
#[inline(always)]
pub fn rotl(x: u64, k: u64) -> u64 {
    (x << k) | (x >> 64u64.wrapping_sub(k))
}

/// Draw a uniform value in `[0, bound)` using the multiply-high method.
///
/// The low half of the 128-bit product is used to reject the biased tail,
/// which never happens for power-of-two bounds.
///
/// # Panics
/// Panics if `bound` is zero
pub fn next_below<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    assert!(bound > 0, "bound must be positive");

    let mut product = u128::from(rng.next_u64()) * u128::from(bound);
    if (product as u64) < bound {
        let threshold = bound.wrapping_neg() % bound;
        while (product as u64) < threshold {
            product = u128::from(rng.next_u64()) * u128::from(bound);
        }
    }
    (product >> 64) as u64
}

/// One word from the operating system's randomness source.
pub(crate) fn host_seed() -> u64 {
    OsRng.next_u64()
}

/// Seed bytes for the 512-bit generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed512(pub [u8; 64]);

impl Default for Seed512 {
    fn default() -> Self {
        Self([0; 64])
    }
}

impl AsMut<[u8]> for Seed512 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// Seed bytes for the 1024-bit generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed1024(pub [u8; 128]);

impl Default for Seed1024 {
    fn default() -> Self {
        Self([0; 128])
    }
}

impl AsMut<[u8]> for Seed1024 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitMix64;

    #[test]
    fn test_rotl_matches_native_rotation() {
        let x = 0x0123_4567_89ab_cdef_u64;
        for k in 1..64u64 {
            assert_eq!(rotl(x, k), x.rotate_left(k as u32), "rotl mismatch for k={}", k);
        }
    }

    #[test]
    fn test_next_below_power_of_two_uses_top_bits() {
        let mut expander = SplitMix64::new(0);
        let mut reference = SplitMix64::new(0);

        for _ in 0..100 {
            let value = next_below(&mut expander, 16);
            assert_eq!(value, reference.next() >> 60);
        }
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SplitMix64::new(12345);
        for bound in [1u64, 3, 7, 10, 1000, u64::MAX] {
            for _ in 0..100 {
                assert!(next_below(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_next_below_zero_bound() {
        let mut rng = SplitMix64::new(1);
        next_below(&mut rng, 0);
    }
}
