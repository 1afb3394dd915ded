//! 1024-bit xoroshiro generators
//!
//! State is sixteen words plus a pointer `p` into them. Each call moves the
//! pointer from `q` to `p = (q + 1) & 15` and only rewrites `s[q]` and `s[p]`.

use crate::shared::rotl;
use crate::stateful::ARRAY_WORDS;

const STAR_MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c13;

/// Advance pointer and state, returning `scramble(s[p], s[q])` computed
/// from the pre-update words.
#[inline(always)]
fn step(
    p: &mut usize,
    s: &mut [u64; ARRAY_WORDS],
    scramble: impl FnOnce(u64, u64) -> u64,
) -> u64 {
    let q = *p;
    *p = (q + 1) & (ARRAY_WORDS - 1);

    let s0 = s[*p];
    let mut s15 = s[q];
    let result = scramble(s0, s15);

    s15 ^= s0;
    s[q] = rotl(s0, 25) ^ s15 ^ (s15 << 27);
    s[*p] = rotl(s15, 36);
    result
}

fn star(p: &mut usize, s: &mut [u64; ARRAY_WORDS]) -> u64 {
    step(p, s, |s0, _| s0.wrapping_mul(STAR_MULTIPLIER))
}

fn star_star(p: &mut usize, s: &mut [u64; ARRAY_WORDS]) -> u64 {
    step(p, s, |s0, _| rotl(s0.wrapping_mul(5), 7).wrapping_mul(9))
}

fn plus_plus(p: &mut usize, s: &mut [u64; ARRAY_WORDS]) -> u64 {
    step(p, s, |s0, s15| rotl(s0.wrapping_add(s15), 23).wrapping_add(s15))
}

extended_generator! {
    /// xoroshiro1024* 1.0
    ///
    /// Large-state generator for floating-point numbers. The lowest three
    /// bits may fail linearity tests; use the upper bits.
    Xoroshiro1024Star {
        algorithm: Xoroshiro1024Star,
        transform: star,
    }
}

extended_generator! {
    /// xoroshiro1024** 1.0, an all-purpose large-state generator
    Xoroshiro1024StarStar {
        algorithm: Xoroshiro1024StarStar,
        transform: star_star,
    }
}

extended_generator! {
    /// xoroshiro1024++ 1.0, an all-purpose large-state generator
    ///
    /// # Example
    /// ```
    /// use pseudo_random::Xoroshiro1024PlusPlus;
    ///
    /// let mut rng = Xoroshiro1024PlusPlus::with_seed(42);
    /// let before = rng.pointer();
    /// rng.next();
    /// assert_eq!(rng.pointer(), (before + 1) % 16);
    /// ```
    Xoroshiro1024PlusPlus {
        algorithm: Xoroshiro1024PlusPlus,
        transform: plus_plus,
    }
}
