use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBigError {
    /// Empty digit string after a prefix, or a character outside the
    /// selected base.
    InvalidSyntax,
    /// Lexically valid, but above `2^256 - 1`.
    OutOfRange,
}

impl fmt::Display for ParseBigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBigError::InvalidSyntax => write!(f, "invalid hex or decimal integer syntax"),
            ParseBigError::OutOfRange => write!(f, "integer does not fit 256 bits"),
        }
    }
}
