use alloc::vec;
use alloc::vec::Vec;
use num_bigint::BigInt;

use crate::word::to_u256;
use crate::WORD_BYTES;

const LIMB_BYTES: usize = 8;

/// Encodes the magnitude of `value` as exactly `n` big-endian bytes.
///
/// Shorter encodings are left-padded with zeroes.
///
/// **Longer encodings are truncated**: only the low-order `n` bytes are
/// kept and the high-order ones are dropped without an error. Callers that
/// cannot accept that must check `value.bits()` against `8 * n` first.
///
/// The sign is ignored. Use [`u256_bytes`] for the two's-complement word
/// encoding of a possibly negative value.
pub fn padded_big_bytes(value: &BigInt, n: usize) -> Vec<u8> {
    let mut result = vec![0u8; n];
    read_bits(value, &mut result);

    result
}

/// Encodes the magnitude of `value` big-endian into `buf`, filling it
/// completely.
///
/// Same result as [`padded_big_bytes`] with `n == buf.len()`, but written
/// straight from the limbs into the caller's buffer.
pub fn read_bits(value: &BigInt, buf: &mut [u8]) {
    let mut i = buf.len();
    'limbs: for limb in value.magnitude().iter_u64_digits() {
        for byte in limb.to_le_bytes() {
            if i == 0 {
                break 'limbs;
            }
            i -= 1;
            buf[i] = byte;
        }
    }
    // remaining top bytes
    buf[..i].fill(0);

    if value.bits() > (buf.len() * 8) as u64 {
        log::debug!("truncated {}-bit value to {} bytes", value.bits(), buf.len());
    }
}

/// Encodes `value` as a canonical 32-byte word, wrapping it into
/// `[0, 2^256)` first.
pub fn u256_bytes(value: &BigInt) -> [u8; WORD_BYTES] {
    let wrapped = to_u256(value.clone());
    let mut result = [0u8; WORD_BYTES];
    read_bits(&wrapped, &mut result);

    result
}

/// Returns byte `n` of the magnitude of `value`, counting from the least
/// significant byte.
pub fn big_endian_byte_at(value: &BigInt, n: usize) -> u8 {
    match value.magnitude().iter_u64_digits().nth(n / LIMB_BYTES) {
        Some(limb) => (limb >> (8 * (n % LIMB_BYTES))) as u8,
        None => 0,
    }
}

/// Returns byte `n` of `value` padded to `padlength` big-endian bytes, so
/// `n == 0` is the most significant byte. Positions past the padding are 0.
///
/// E.g. value 5 with `padlength = 32` has byte 31 equal to 5.
pub fn byte_at(value: &BigInt, padlength: usize, n: usize) -> u8 {
    if n >= padlength {
        return 0;
    }
    big_endian_byte_at(value, padlength - 1 - n)
}
