//! 256-bit xoshiro generators

use crate::shared::rotl;

/// Compute `scramble` on the pre-update words, then advance the state.
#[inline(always)]
fn step(s: &mut [u64; 4], scramble: impl FnOnce(&[u64; 4]) -> u64) -> u64 {
    let result = scramble(s);

    let t = s[1] << 17;

    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];

    s[2] ^= t;

    s[3] = rotl(s[3], 45);

    result
}

fn plus(s: &mut [u64; 4]) -> u64 {
    step(s, |s| s[0].wrapping_add(s[3]))
}

fn plus_plus(s: &mut [u64; 4]) -> u64 {
    step(s, |s| rotl(s[0].wrapping_add(s[3]), 23).wrapping_add(s[0]))
}

fn star_star(s: &mut [u64; 4]) -> u64 {
    step(s, |s| rotl(s[1].wrapping_mul(5), 7).wrapping_mul(9))
}

simple_generator! {
    /// xoshiro256+ 1.0
    ///
    /// Meant for floating-point generation; the lowest bits are weak, use
    /// the upper bits.
    Xoshiro256Plus {
        algorithm: Xoshiro256Plus,
        words: 4,
        seed: [u8; 32],
        transform: plus,
    }
}

simple_generator! {
    /// xoshiro256++ 1.0, an all-purpose generator
    ///
    /// # Example
    /// ```
    /// use pseudo_random::Xoshiro256PlusPlus;
    ///
    /// let mut a = Xoshiro256PlusPlus::with_seed(7);
    /// let mut b = Xoshiro256PlusPlus::with_seed(7);
    /// assert_eq!(a.next(), b.next());
    /// ```
    Xoshiro256PlusPlus {
        algorithm: Xoshiro256PlusPlus,
        words: 4,
        seed: [u8; 32],
        transform: plus_plus,
    }
}

simple_generator! {
    /// xoshiro256** 1.0, an all-purpose generator
    Xoshiro256StarStar {
        algorithm: Xoshiro256StarStar,
        words: 4,
        seed: [u8; 32],
        transform: star_star,
    }
}
