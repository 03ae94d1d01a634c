use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};

use crate::errors::ParseBigError;
use crate::WORD_BITS;

/// Parses `s` as a 256-bit unsigned integer in decimal or `0x`/`0X` prefixed
/// hexadecimal syntax. The empty string is 0.
///
/// Leading zeros never select octal. Signs, whitespace and digit
/// separators are rejected.
pub fn try_parse_big256(s: &str) -> Result<BigInt, ParseBigError> {
    if s.is_empty() {
        return Ok(BigInt::zero());
    }

    let (digits, radix) = match s.get(..2) {
        Some("0x") | Some("0X") => (&s[2..], 16),
        _ => (s, 10),
    };

    // `from_str_radix` also takes a leading `+` and `_`, so digits are
    // checked up front
    if digits.is_empty() || digits.bytes().any(|b| !(b as char).is_digit(radix)) {
        log::trace!("rejected {s:?}: not a base {radix} integer");
        return Err(ParseBigError::InvalidSyntax);
    }
    let magnitude =
        BigUint::from_str_radix(digits, radix).map_err(|_| ParseBigError::InvalidSyntax)?;

    if magnitude.bits() > WORD_BITS as u64 {
        log::trace!("rejected {s:?}: {} bits", magnitude.bits());
        return Err(ParseBigError::OutOfRange);
    }

    Ok(BigInt::from_biguint(Sign::Plus, magnitude))
}

/// Same as [`try_parse_big256`], dropping the failure reason.
#[inline]
pub fn parse_big256(s: &str) -> Option<BigInt> {
    try_parse_big256(s).ok()
}

/// Parses `s` like [`parse_big256`], panicking if it is invalid.
///
/// Only for literals known to be valid, never for external input.
pub fn must_parse_big256(s: &str) -> BigInt {
    match try_parse_big256(s) {
        Ok(value) => value,
        Err(err) => panic!("invalid 256 bit integer {s:?}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{max_big256, two_pow_256};

    #[test]
    fn parses_decimal_and_hex() {
        let cases: [(&str, i64); 10] = [
            ("", 0),
            ("0", 0),
            ("0x0", 0),
            ("12345678", 12345678),
            ("0x12345678", 0x12345678),
            ("0X12345678", 0x12345678),
            ("0xabCDef", 0xabcdef),
            ("00", 0),
            ("0x00", 0),
            ("0x012345678abc", 0x12345678abc),
        ];
        for (input, expected) in cases {
            assert_eq!(
                parse_big256(input),
                Some(BigInt::from(expected)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn leading_zeros_are_not_octal() {
        assert_eq!(parse_big256("0123456789"), Some(BigInt::from(123456789)));
        assert_eq!(parse_big256("010"), Some(BigInt::from(10)));
    }

    #[test]
    fn rejects_invalid_syntax() {
        let inputs = [
            "abcdef", "0xgg", "0x", "0X", " 1", "1 ", "+1", "-1", "0x-1", "0x+1", "1_000", "0b101",
            "1e3", "0o17", "x12",
        ];
        for input in inputs {
            assert_eq!(
                try_parse_big256(input),
                Err(ParseBigError::InvalidSyntax),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn rejects_values_above_256_bits() {
        let too_large =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert_eq!(try_parse_big256(too_large), Err(ParseBigError::OutOfRange));
        assert_eq!(parse_big256(too_large), None);

        let hex_too_large = format!("0x1{}", "0".repeat(64));
        assert_eq!(
            try_parse_big256(&hex_too_large),
            Err(ParseBigError::OutOfRange)
        );
    }

    #[test]
    fn accepts_word_maximum() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_big256(max), Some(max_big256()));

        let hex_max = format!("0x{}", "f".repeat(64));
        assert_eq!(parse_big256(&hex_max), Some(max_big256()));

        // leading zeros do not count against the width
        let padded = format!("0x0000{}", "f".repeat(64));
        assert_eq!(parse_big256(&padded), Some(two_pow_256() - 1u32));
    }

    #[test]
    #[should_panic(expected = "invalid 256 bit integer")]
    fn must_parse_panics_on_invalid_syntax() {
        must_parse_big256("ggg");
    }

    #[test]
    #[should_panic]
    fn must_parse_panics_on_out_of_range() {
        must_parse_big256(
            "115792089237316195423570985008687907853269984665640564039457584007913129639936",
        );
    }

    #[test]
    fn must_parse_returns_value() {
        assert_eq!(must_parse_big256("0x100"), BigInt::from(256));
    }
}
