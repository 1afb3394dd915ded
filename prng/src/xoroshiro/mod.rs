//! xoroshiro family (xor, rotate, shift, rotate)
//!
//! Blackman & Vigna, "Scrambled Linear Pseudorandom Number Generators"
//! (<http://vigna.di.unimi.it/ftp/papers/ScrambledLinear.pdf>).

mod xoroshiro1024;
mod xoroshiro128;

pub use xoroshiro1024::{Xoroshiro1024PlusPlus, Xoroshiro1024Star, Xoroshiro1024StarStar};
pub use xoroshiro128::{Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128StarStar};
