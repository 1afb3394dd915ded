//! xoshiro family (xor, shift, rotate)
//!
//! Blackman & Vigna, "Scrambled Linear Pseudorandom Number Generators"
//! (<http://vigna.di.unimi.it/ftp/papers/ScrambledLinear.pdf>).

mod xoshiro256;
mod xoshiro512;

pub use xoshiro256::{Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar};
pub use xoshiro512::{Xoshiro512Plus, Xoshiro512PlusPlus, Xoshiro512StarStar};
