//! crates/stepper/src/bits.rs
//!
//! MSB-first bit storage used as the canonical message representation.

use std::fmt;

use crate::error::StepperError;

/// An ordered sequence of bits with an explicit length.
///
/// Bits are packed most-significant first, so a byte-aligned `BitString`
/// shares its byte layout with the message it was built from. Lengths that
/// are not a multiple of eight are supported; the unused low bits of the last
/// byte are always zero, which keeps derived equality meaningful.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bytes: Vec<u8>,
    len: u64,
}

impl BitString {
    /// Creates an empty bit string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Creates a bit string holding every bit of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StepperError> {
        let len = u64::try_from(bytes.len())
            .ok()
            .and_then(|count| count.checked_mul(8))
            .ok_or(StepperError::LengthOverflow {
                bits: bytes.len() as u128 * 8,
            })?;
        Ok(Self {
            bytes: bytes.to_vec(),
            len,
        })
    }

    /// Number of bits stored.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Reports whether the bit string holds no bits.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reports whether the length is a whole number of bytes.
    #[inline]
    #[must_use]
    pub const fn is_byte_aligned(&self) -> bool {
        self.len % 8 == 0
    }

    /// Appends a single bit.
    ///
    /// # Panics
    ///
    /// Panics if the bit string already holds `u64::MAX` bits.
    pub fn push(&mut self, bit: bool) {
        let offset = (self.len % 8) as u8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len = self
            .len
            .checked_add(1)
            .expect("bit string length exceeds u64::MAX");
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u64, width: u32) {
        debug_assert!(width <= 64);
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Returns the bit at `index`, or `None` past the end.
    #[must_use]
    pub fn bit(&self, index: u64) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[(index / 8) as usize];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    /// Iterates over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(|index| self.bit(index))
    }

    /// Returns the packed bytes; a trailing partial byte is zero-filled.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Renders the bits as a string of `0` and `1` characters.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bits = Self::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitString")
            .field("len", &self.len)
            .field("bits", &format_args!("{self}"))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
