//! crates/encoding/src/base.rs
//!
//! The bases a message may be supplied in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Encoding of a user-supplied message.
///
/// All bases describe the same underlying bit sequence; the base only decides
/// how the characters of the input map onto bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InputBase {
    /// UTF-8 text; eight bits per byte.
    #[default]
    Text,
    /// A string of `0` and `1` characters; one bit each.
    Binary,
    /// Hexadecimal digits; four bits each.
    Hex,
}

/// Error returned when parsing an [`InputBase`] from an unrecognised string fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unrecognised input base; expected text, binary or hex")]
pub struct InputBaseParseError;

impl InputBase {
    /// Every base, in the order presented to users.
    pub const ALL: [Self; 3] = [Self::Text, Self::Binary, Self::Hex];

    /// Canonical lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
            Self::Hex => "hex",
        }
    }

    /// Bit length a message must be a multiple of to be written in this base.
    #[must_use]
    pub const fn alignment_bits(self) -> u64 {
        match self {
            Self::Text => 8,
            Self::Binary => 1,
            Self::Hex => 4,
        }
    }
}

impl fmt::Display for InputBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputBase {
    type Err = InputBaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for (base, aliases) in [
            (Self::Text, ["text", "txt", "utf8"]),
            (Self::Binary, ["binary", "bin", "bits"]),
            (Self::Hex, ["hex", "hexadecimal", "base16"]),
        ] {
            if aliases.iter().any(|alias| s.eq_ignore_ascii_case(alias)) {
                return Ok(base);
            }
        }
        Err(InputBaseParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for base in InputBase::ALL {
            assert_eq!(base.label().parse::<InputBase>(), Ok(base));
            assert_eq!(base.to_string(), base.label());
        }
    }

    #[test]
    fn aliases_ignore_case_and_whitespace() {
        assert_eq!(" BIN ".parse::<InputBase>(), Ok(InputBase::Binary));
        assert_eq!("Txt".parse::<InputBase>(), Ok(InputBase::Text));
        assert_eq!("HEX".parse::<InputBase>(), Ok(InputBase::Hex));
    }

    #[test]
    fn unknown_base_is_rejected() {
        assert_eq!("octal".parse::<InputBase>(), Err(InputBaseParseError));
        assert_eq!("".parse::<InputBase>(), Err(InputBaseParseError));
    }

    #[test]
    fn default_is_text() {
        assert_eq!(InputBase::default(), InputBase::Text);
        assert_eq!(InputBase::Text.alignment_bits(), 8);
        assert_eq!(InputBase::Hex.alignment_bits(), 4);
    }
}
