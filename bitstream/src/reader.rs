//! Bit-level reader with bounded operations.

use crate::error::{BitError, BitResult};

/// A bit-level reader for decoding packed binary data.
///
/// All read operations are bounds-checked against the reader's bit length and
/// return errors on failure. The reader never panics on malformed input.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_len: usize,
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` over every bit of a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_len: data.len().saturating_mul(8),
            bit_pos: 0,
        }
    }

    /// Creates a `BitReader` limited to the first `bits` bits of `data`.
    ///
    /// Trailing padding bits of the last byte are never visible to reads.
    /// A `bits` larger than the slice is clamped to the slice.
    #[must_use]
    pub const fn with_bit_len(data: &'a [u8], bits: usize) -> Self {
        let total = data.len().saturating_mul(8);
        Self {
            data,
            bit_len: if bits < total { bits } else { total },
            bit_pos: 0,
        }
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.bit_len.saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Reads a single bit as a boolean.
    pub fn read_bit(&mut self) -> BitResult<bool> {
        self.ensure_bits(1)?;
        let bit = (self.data[self.bit_pos / 8] >> (7 - self.bit_pos % 8)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads up to 64 bits as an unsigned integer.
    pub fn read_bits(&mut self, bits: usize) -> BitResult<u64> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        self.ensure_bits(bits)?;

        let mut value = 0u64;
        for _ in 0..bits {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// Reads `bits` bits of any width as a right-aligned big-endian integer.
    ///
    /// The result has `bits.div_ceil(8)` bytes; unused high bits of the first
    /// byte are zero.
    pub fn read_wide(&mut self, bits: usize) -> BitResult<Vec<u8>> {
        self.ensure_bits(bits)?;

        let len = bits.div_ceil(8);
        let mut out = vec![0u8; len];
        let pad = len * 8 - bits;
        for i in pad..len * 8 {
            if self.read_bit()? {
                out[i / 8] |= 1 << (7 - i % 8);
            }
        }
        Ok(out)
    }

    fn ensure_bits(&self, bits: usize) -> BitResult<()> {
        let available = self.bits_remaining();
        if bits > available {
            return Err(BitError::UnexpectedEof {
                requested: bits,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = BitReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.bits_remaining(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = BitReader::new(&[]);
        let result = reader.read_bit();
        assert!(matches!(result, Err(BitError::UnexpectedEof { .. })));
    }

    #[test]
    fn read_bits_across_bytes() {
        let mut reader = BitReader::new(&[0b1111_0000, 0b0000_1111]);
        assert_eq!(reader.read_bits(12).unwrap(), 0b1111_0000_0000);
        assert_eq!(reader.bits_remaining(), 4);
    }

    #[test]
    fn read_bits_zero_is_noop() {
        let mut reader = BitReader::new(&[0xFF]);
        assert_eq!(reader.read_bits(0).unwrap(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_bits_invalid_count() {
        let mut reader = BitReader::new(&[0; 16]);
        let err = reader.read_bits(65).unwrap_err();
        assert_eq!(
            err,
            BitError::InvalidBitCount {
                bits: 65,
                max_bits: 64
            }
        );
    }

    #[test]
    fn bit_len_hides_padding() {
        let mut reader = BitReader::with_bit_len(&[0b1010_1111], 3);
        assert_eq!(reader.bits_remaining(), 3);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        let err = reader.read_bit().unwrap_err();
        assert_eq!(
            err,
            BitError::UnexpectedEof {
                requested: 1,
                available: 0
            }
        );
    }

    #[test]
    fn bit_len_is_clamped_to_slice() {
        let reader = BitReader::with_bit_len(&[0xFF], 100);
        assert_eq!(reader.bits_remaining(), 8);
    }

    #[test]
    fn read_wide_right_aligns() {
        let mut reader = BitReader::new(&[0b1111_1111, 0b1100_0000]);
        reader.read_bit().unwrap();
        let wide = reader.read_wide(9).unwrap();
        assert_eq!(wide, vec![0x01, 0xFF]);
    }

    #[test]
    fn read_wide_zero_bits() {
        let mut reader = BitReader::new(&[0xFF]);
        assert!(reader.read_wide(0).unwrap().is_empty());
    }

    #[test]
    fn read_wide_past_end_fails() {
        let mut reader = BitReader::with_bit_len(&[0xFF, 0xFF], 10);
        let err = reader.read_wide(11).unwrap_err();
        assert!(matches!(
            err,
            BitError::UnexpectedEof {
                requested: 11,
                available: 10
            }
        ));
        assert_eq!(reader.bit_position(), 0);
    }
}
