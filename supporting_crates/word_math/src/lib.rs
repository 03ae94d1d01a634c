#![cfg_attr(not(test), no_std)]

// Helpers for treating arbitrary-precision integers as 256-bit EVM words.
// The 256-bit domain is a contract of the boundary functions (`u256`, the
// parse range check), not of the integer type: intermediate values may be
// wider or negative.

extern crate alloc;

pub mod bits;
pub mod bytes;
pub mod errors;
pub mod parse;
pub mod text;
pub mod word;

pub use num_bigint::{BigInt, BigUint};

pub use self::bits::*;
pub use self::bytes::*;
pub use self::errors::*;
pub use self::parse::*;
pub use self::text::*;
pub use self::word::*;

/// Number of bits in a word.
pub const WORD_BITS: usize = 256;

/// Number of bytes in a word.
pub const WORD_BYTES: usize = WORD_BITS / 8;
