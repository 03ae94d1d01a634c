use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed};
use ruint::aliases::U256;

use crate::bits::{two_pow_255, two_pow_256};
use crate::bytes::u256_bytes;
use crate::WORD_BITS;

/// Wraps `value` into `[0, 2^256)` in place, i.e. reduces it modulo `2^256`
/// with a non-negative result.
#[inline]
pub fn u256(value: &mut BigInt) {
    if value.is_negative() || value.bits() > WORD_BITS as u64 {
        *value = value.mod_floor(&two_pow_256());
    }
}

/// By-value form of [`u256`].
#[inline]
pub fn to_u256(mut value: BigInt) -> BigInt {
    u256(&mut value);
    value
}

/// Interprets a canonical unsigned word as a two's-complement signed one.
///
/// `value` must already be in `[0, 2^256)`. Values with the top bit clear are
/// returned unchanged, the rest map to `value - 2^256`.
pub fn s256(value: &BigInt) -> BigInt {
    if *value < two_pow_255() {
        value.clone()
    } else {
        value - two_pow_256()
    }
}

/// Computes `base^exponent mod 2^256` by square-and-multiply.
///
/// `exponent == 0` yields 1 for every base, 0 included.
pub fn exp(base: &BigInt, exponent: &BigUint) -> BigInt {
    let mask = (BigUint::one() << WORD_BITS) - 1u32;
    let mut word = to_u256(base.clone()).magnitude().clone();
    let mut result = BigUint::one();

    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result *= &word;
            result &= &mask;
        }
        // the last squaring is never used
        if i + 1 < exponent.bits() {
            word = &word * &word;
            word &= &mask;
        }
    }

    BigInt::from_biguint(Sign::Plus, result)
}

/// Converts `value` into the fixed-width machine word, wrapping it modulo
/// `2^256`.
pub fn to_word(value: &BigInt) -> U256 {
    U256::from_be_bytes(u256_bytes(value))
}

/// Converts a machine word into its unsigned integer value.
pub fn from_word(word: &U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &word.to_be_bytes::<32>())
}
