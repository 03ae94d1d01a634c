use num_bigint::BigInt;
use num_traits::{One, Pow};

use crate::WORD_BITS;

/// `2^255`, the smallest word with the sign bit set.
#[inline(always)]
pub fn two_pow_255() -> BigInt {
    BigInt::one() << (WORD_BITS - 1)
}

/// `2^256`, the word modulus.
#[inline(always)]
pub fn two_pow_256() -> BigInt {
    BigInt::one() << WORD_BITS
}

/// `2^256 - 1`, the largest unsigned word.
#[inline(always)]
pub fn max_big256() -> BigInt {
    two_pow_256() - 1u32
}

/// `2^63 - 1`, the largest value that fits a signed 64-bit integer.
#[inline(always)]
pub fn max_big63() -> BigInt {
    BigInt::from(i64::MAX)
}

/// Returns `base^exponent` without any reduction.
///
/// The exponent is unsigned on purpose: there is no integer result for
/// negative powers, so callers that need "a very small number" have to
/// spell it out.
pub fn big_pow(base: i64, exponent: u32) -> BigInt {
    Pow::pow(BigInt::from(base), exponent)
}

/// Returns the larger of `x` or `y`. On a tie `y` is returned.
#[inline(always)]
pub fn big_max<'a>(x: &'a BigInt, y: &'a BigInt) -> &'a BigInt {
    if x <= y { y } else { x }
}

/// Returns the smaller of `x` or `y`. On a tie `y` is returned.
#[inline(always)]
pub fn big_min<'a>(x: &'a BigInt, y: &'a BigInt) -> &'a BigInt {
    if x >= y { y } else { x }
}

/// Returns the index of the lowest set bit of `value`'s magnitude.
///
/// Zero has no set bit and yields 0, the same as odd values do.
#[inline(always)]
pub fn first_bit_set(value: &BigInt) -> usize {
    value.trailing_zeros().unwrap_or(0) as usize
}
