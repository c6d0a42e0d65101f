//! crates/encoding/src/codec.rs
//!
//! Decoding user input into a [`BitString`] and rendering it back.

use std::fmt::Write as _;

use stepper::BitString;

use crate::base::InputBase;
use crate::error::EncodingError;

/// Decodes `input` written in `base` into its bit sequence.
///
/// Text contributes its UTF-8 bytes. Binary and hex inputs may be of any
/// length (a hex digit is four bits, so an odd digit count yields a message
/// that is not byte aligned); ASCII whitespace between digits is ignored.
/// Hex digits are accepted in either case.
pub fn decode(input: &str, base: InputBase) -> Result<BitString, EncodingError> {
    let bits = match base {
        InputBase::Text => BitString::from_bytes(input.as_bytes())?,
        InputBase::Binary => digits(input, base)
            .map(|digit| digit.map(|value| value == 1))
            .collect::<Result<BitString, _>>()?,
        InputBase::Hex => {
            let mut bits = BitString::new();
            for digit in digits(input, base) {
                bits.push_bits(u64::from(digit?), 4);
            }
            bits
        }
    };

    logging::trace_input!(base = base.label(), bits = bits.len(), "decoded message");
    Ok(bits)
}

/// Renders `bits` in `base`.
///
/// Binary always succeeds. Hex needs a multiple of four bits and text needs
/// whole bytes that form valid UTF-8.
pub fn encode(bits: &BitString, base: InputBase) -> Result<String, EncodingError> {
    match base {
        InputBase::Binary => Ok(bits.to_binary_string()),
        InputBase::Hex => {
            if bits.len() % base.alignment_bits() != 0 {
                return Err(EncodingError::Misaligned {
                    bits: bits.len(),
                    base,
                });
            }
            let mut out = String::with_capacity(bits.as_bytes().len() * 2);
            for byte in bits.as_bytes() {
                let _ = write!(out, "{byte:02x}");
            }
            // A trailing half byte leaves one digit too many.
            out.truncate((bits.len() / 4) as usize);
            Ok(out)
        }
        InputBase::Text => {
            if !bits.is_byte_aligned() {
                return Err(EncodingError::Misaligned {
                    bits: bits.len(),
                    base,
                });
            }
            String::from_utf8(bits.as_bytes().to_vec()).map_err(|_| EncodingError::InvalidUtf8)
        }
    }
}

/// Re-encodes `input` from one base to another.
pub fn convert(input: &str, from: InputBase, to: InputBase) -> Result<String, EncodingError> {
    encode(&decode(input, from)?, to)
}

/// Yields the numeric value of every non-whitespace digit of `input`.
fn digits(input: &str, base: InputBase) -> impl Iterator<Item = Result<u8, EncodingError>> + '_ {
    let radix = match base {
        InputBase::Binary => 2,
        InputBase::Hex | InputBase::Text => 16,
    };
    input
        .chars()
        .enumerate()
        .filter(|(_, character)| !character.is_ascii_whitespace())
        .map(move |(position, character)| {
            character
                .to_digit(radix)
                .map(|value| value as u8)
                .ok_or(EncodingError::InvalidDigit {
                    base,
                    character,
                    position,
                })
        })
}
