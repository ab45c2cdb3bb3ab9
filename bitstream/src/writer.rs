//! Bit-level writer for encoding packed binary data.

use crate::error::{BitError, BitResult};

/// A bit-level writer that accumulates fields most significant bit first.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// The accumulated bytes.
    bytes: Vec<u8>,
    /// Current byte being written (not yet pushed to bytes).
    current_byte: u8,
    /// Number of bits written to `current_byte` (0-7).
    bit_count: u8,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BitWriter` with room for `bits` bits.
    #[must_use]
    pub fn with_bit_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            current_byte: 0,
            bit_count: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub fn bits_written(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Writes a single bit.
    pub fn write_bool(&mut self, value: bool) {
        self.current_byte = (self.current_byte << 1) | u8::from(value);
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// Writes up to 64 bits from an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 64`.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    pub fn write_bits(&mut self, value: u64, bits: usize) -> BitResult<()> {
        if bits > 64 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 64 });
        }
        if bits == 0 {
            return Ok(());
        }
        if bits < 64 && value >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange { value, bits });
        }

        for i in (0..bits).rev() {
            self.write_bool((value >> i) & 1 == 1);
        }
        Ok(())
    }

    /// Writes the low `bits` bits of a big-endian unsigned integer of any size.
    ///
    /// Used for fields wider than 64 bits. Bits of `value` above `bits` must be
    /// zero; nothing is written when they are not.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits` exceeds the slice width.
    /// Returns [`BitError::ValueTooWide`] if a bit above `bits` is set.
    pub fn write_wide(&mut self, value: &[u8], bits: usize) -> BitResult<()> {
        let total = value.len() * 8;
        if bits > total {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: total,
            });
        }

        let skip = total - bits;
        if (0..skip).any(|i| bit_at(value, i)) {
            return Err(BitError::ValueTooWide { bits });
        }
        for i in skip..total {
            self.write_bool(bit_at(value, i));
        }
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// If the last byte is incomplete, it is padded with zeros on the right.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.current_byte <<= 8 - self.bit_count;
            self.bytes.push(self.current_byte);
        }
        self.bytes
    }
}

fn bit_at(bytes: &[u8], index: usize) -> bool {
    (bytes[index / 8] >> (7 - index % 8)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = BitWriter::new();
        assert_eq!(writer.bits_written(), 0);
        let bytes = writer.finish();
        assert!(bytes.is_empty());
    }

    #[test]
    fn write_single_bit_true() {
        let mut writer = BitWriter::new();
        writer.write_bool(true);
        assert_eq!(writer.bits_written(), 1);
        let bytes = writer.finish();
        // Single bit 1, padded with 7 zeros = 0b1000_0000
        assert_eq!(bytes, vec![0b1000_0000]);
    }

    #[test]
    fn write_partial_byte_with_padding() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b11010, 5).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b1101_0000]);
    }

    #[test]
    fn write_bits_zero() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFF, 0).unwrap();
        assert_eq!(writer.bits_written(), 0);
    }

    #[test]
    fn write_bits_across_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1111, 4).unwrap();
        writer.write_bits(0b1010_1010, 8).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b1111_1010, 0b1010_0000]);
    }

    #[test]
    fn write_bits_invalid_count() {
        let mut writer = BitWriter::new();
        let result = writer.write_bits(0, 65);
        assert!(matches!(
            result,
            Err(BitError::InvalidBitCount {
                bits: 65,
                max_bits: 64
            })
        ));
    }

    #[test]
    fn write_bits_value_out_of_range() {
        let mut writer = BitWriter::new();
        let result = writer.write_bits(256, 8);
        assert!(matches!(
            result,
            Err(BitError::ValueOutOfRange {
                value: 256,
                bits: 8
            })
        ));
    }

    #[test]
    fn write_bits_64_bits() {
        let mut writer = BitWriter::new();
        writer.write_bits(u64::MAX, 64).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0xFF; 8]);
    }

    #[test]
    fn write_wide_skips_leading_zero_bits() {
        let mut writer = BitWriter::new();
        writer.write_bool(true);
        // 0x01FF holds a 9-bit value.
        writer.write_wide(&[0x01, 0xFF], 9).unwrap();
        assert_eq!(writer.bits_written(), 10);
        assert_eq!(writer.finish(), vec![0xFF, 0b1100_0000]);
    }

    #[test]
    fn write_wide_rejects_bits_above_width() {
        let mut writer = BitWriter::new();
        let result = writer.write_wide(&[0x02, 0x00], 9);
        assert_eq!(result, Err(BitError::ValueTooWide { bits: 9 }));
        assert_eq!(writer.bits_written(), 0, "nothing written on failure");
    }

    #[test]
    fn write_wide_rejects_width_beyond_slice() {
        let mut writer = BitWriter::new();
        let result = writer.write_wide(&[0xFF], 9);
        assert!(matches!(
            result,
            Err(BitError::InvalidBitCount {
                bits: 9,
                max_bits: 8
            })
        ));
    }

    #[test]
    fn write_wide_over_64_bits() {
        let value = [0xAA; 10];
        let mut writer = BitWriter::new();
        writer.write_wide(&value, 80).unwrap();
        assert_eq!(writer.finish(), value.to_vec());
    }

    #[test]
    fn with_bit_capacity() {
        let writer = BitWriter::with_bit_capacity(75);
        assert_eq!(writer.bits_written(), 0);
    }
}
