use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;

use crate::errors::ParseBigError;
use crate::parse::try_parse_big256;

/// Integer that reads as decimal or `0x` hex and prints as `0x` hex.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexOrDecimal256(pub BigInt);

/// Integer that reads as decimal or `0x` hex and prints as decimal.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal256(pub BigInt);

macro_rules! impl_text_integer {
    ($ty:ident) => {
        impl From<BigInt> for $ty {
            #[inline(always)]
            fn from(value: BigInt) -> Self {
                Self(value)
            }
        }

        impl From<$ty> for BigInt {
            #[inline(always)]
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl AsRef<BigInt> for $ty {
            #[inline(always)]
            fn as_ref(&self) -> &BigInt {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = ParseBigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                try_parse_big256(s).map(Self)
            }
        }
    };
}

impl_text_integer!(HexOrDecimal256);
impl_text_integer!(Decimal256);

impl fmt::Display for HexOrDecimal256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for Decimal256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use alloc::string::ToString;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Accepts strings and unsigned numbers through `deserialize_any`, so only
    // self-describing formats (JSON, TOML, ...) can decode these wrappers.
    struct TextIntegerVisitor;

    impl<'de> Visitor<'de> for TextIntegerVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a hex or decimal integer of at most 256 bits")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            try_parse_big256(v).map_err(|err| {
                E::custom(format_args!("invalid hex or decimal integer {v:?}: {err}"))
            })
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            if v < 0 {
                return Err(E::invalid_value(de::Unexpected::Signed(v), &self));
            }
            Ok(BigInt::from(v))
        }
    }

    macro_rules! impl_serde {
        ($ty:ident) => {
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.to_string())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_any(TextIntegerVisitor).map(Self)
                }
            }
        };
    }

    impl_serde!(HexOrDecimal256);
    impl_serde!(Decimal256);
}
