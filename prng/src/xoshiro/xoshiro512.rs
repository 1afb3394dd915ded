//! 512-bit xoshiro generators

use crate::shared::rotl;

/// Compute `scramble` on the pre-update words, then advance the state.
#[inline(always)]
fn step(s: &mut [u64; 8], scramble: impl FnOnce(&[u64; 8]) -> u64) -> u64 {
    let result = scramble(s);

    let t = s[1] << 11;

    s[2] ^= s[0];
    s[5] ^= s[1];
    s[1] ^= s[2];
    s[7] ^= s[3];
    s[3] ^= s[4];
    s[4] ^= s[5];
    s[0] ^= s[6];
    s[6] ^= s[7];

    s[6] ^= t;

    s[7] = rotl(s[7], 21);

    result
}

fn plus(s: &mut [u64; 8]) -> u64 {
    step(s, |s| s[0].wrapping_add(s[2]))
}

fn plus_plus(s: &mut [u64; 8]) -> u64 {
    step(s, |s| rotl(s[0].wrapping_add(s[2]), 17).wrapping_add(s[2]))
}

fn star_star(s: &mut [u64; 8]) -> u64 {
    step(s, |s| rotl(s[1].wrapping_mul(5), 7).wrapping_mul(9))
}

simple_generator! {
    /// xoshiro512+ 1.0, for floating-point generation
    Xoshiro512Plus {
        algorithm: Xoshiro512Plus,
        words: 8,
        seed: crate::shared::Seed512,
        transform: plus,
    }
}

simple_generator! {
    /// xoshiro512++ 1.0, an all-purpose generator with a larger state
    Xoshiro512PlusPlus {
        algorithm: Xoshiro512PlusPlus,
        words: 8,
        seed: crate::shared::Seed512,
        transform: plus_plus,
    }
}

simple_generator! {
    /// xoshiro512** 1.0, an all-purpose generator with a larger state
    Xoshiro512StarStar {
        algorithm: Xoshiro512StarStar,
        words: 8,
        seed: crate::shared::Seed512,
        transform: star_star,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    const COUNTING: [u64; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn test_plus_reference_output() {
        let mut rng = Xoshiro512Plus::from_state(COUNTING);
        assert_eq!(rng.next(), 0x4);
        assert_eq!(rng.next(), 0x8);
        assert_eq!(rng.next(), 0x1011);
    }

    #[test]
    fn test_plus_plus_reference_output() {
        let mut rng = Xoshiro512PlusPlus::from_state(COUNTING);
        assert_eq!(rng.next(), 0x8_0003);
        assert_eq!(rng.next(), 0x10_0002);
        assert_eq!(rng.next(), 0x2022_0004);
    }

    #[test]
    fn test_star_star_reference_output() {
        let mut rng = Xoshiro512StarStar::from_state(COUNTING);
        assert_eq!(rng.next(), 0x2d00);
        assert_eq!(rng.next(), 0x0);
        assert_eq!(rng.next(), 0x5a00);
    }

    #[test]
    fn test_from_seed_reads_little_endian_words() {
        let mut bytes = [0u8; 64];
        for (i, chunk) in bytes.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&COUNTING[i].to_le_bytes());
        }
        let rng = Xoshiro512Plus::from_seed(crate::shared::Seed512(bytes));
        assert_eq!(rng.state(), COUNTING);
    }

    #[test]
    fn test_from_seed_all_zero_falls_back_to_seed_zero() {
        let rng = Xoshiro512StarStar::from_seed(crate::shared::Seed512::default());
        assert_eq!(rng, Xoshiro512StarStar::with_seed(0));
    }
}
