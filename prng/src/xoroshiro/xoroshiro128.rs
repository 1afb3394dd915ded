//! 128-bit xoroshiro generators
//!
//! State is a pair of words `(s0, s1)` that must never both be zero.
//! `+` and `**` share the (24, 16, 37) update; `++` has its own
//! (49, 21, 28) constants.

use crate::shared::rotl;

/// Shared update for `+` and `**`, given the pre-update words.
#[inline(always)]
fn advance(s: &mut [u64; 2], s0: u64, s1: u64) {
    let s1 = s1 ^ s0;
    s[0] = rotl(s0, 24) ^ s1 ^ (s1 << 16); // a, b
    s[1] = rotl(s1, 37); // c
}

fn plus(s: &mut [u64; 2]) -> u64 {
    let [s0, s1] = *s;
    let result = s0.wrapping_add(s1);
    advance(s, s0, s1);
    result
}

fn plus_plus(s: &mut [u64; 2]) -> u64 {
    let [s0, s1] = *s;
    let result = rotl(s0.wrapping_add(s1), 17).wrapping_add(s0);

    let s1 = s1 ^ s0;
    s[0] = rotl(s0, 49) ^ s1 ^ (s1 << 21); // a, b
    s[1] = rotl(s1, 28); // c
    result
}

fn star_star(s: &mut [u64; 2]) -> u64 {
    let [s0, s1] = *s;
    let result = rotl(s0.wrapping_mul(5), 7).wrapping_mul(9);
    advance(s, s0, s1);
    result
}

simple_generator! {
    /// xoroshiro128+ 1.0
    ///
    /// Fastest of the 128-bit family and intended for floating-point
    /// generation: the lowest bits have low linear complexity, so prefer the
    /// upper bits when extracting fewer than 64.
    ///
    /// # Example
    /// ```
    /// use pseudo_random::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::from_state([1, 2]);
    /// assert_eq!(rng.next(), 3);
    /// ```
    Xoroshiro128Plus {
        algorithm: Xoroshiro128Plus,
        words: 2,
        seed: [u8; 16],
        transform: plus,
    }
}

simple_generator! {
    /// xoroshiro128++ 1.0, an all-purpose 128-bit generator
    Xoroshiro128PlusPlus {
        algorithm: Xoroshiro128PlusPlus,
        words: 2,
        seed: [u8; 16],
        transform: plus_plus,
    }
}

simple_generator! {
    /// xoroshiro128** 1.0, an all-purpose 128-bit generator
    Xoroshiro128StarStar {
        algorithm: Xoroshiro128StarStar,
        words: 2,
        seed: [u8; 16],
        transform: star_star,
    }
}
