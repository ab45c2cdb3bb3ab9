//! MSB-first bit packing primitives for the seedcode codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for bit-level encoding and decoding.
//! Fields are laid out most significant bit first, so a sequence of writes forms
//! one big unsigned integer whose leading field is the first one written.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are checked against an exact bit length.
//! - **No domain knowledge** - This crate knows nothing about seeds, symbols, or options.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bool(true);
//! writer.write_bits(42, 7).unwrap();
//! writer.write_wide(&[0x01, 0x23], 9).unwrap();
//!
//! let bits = writer.bits_written();
//! let bytes = writer.finish();
//!
//! let mut reader = BitReader::with_bit_len(&bytes, bits);
//! assert_eq!(reader.read_bit().unwrap(), true);
//! assert_eq!(reader.read_bits(7).unwrap(), 42);
//! assert_eq!(reader.read_wide(9).unwrap(), vec![0x01, 0x23]);
//! assert!(reader.is_empty());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use reader::BitReader;
pub use writer::BitWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = BitWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = BitReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn bits_roundtrip_various_sizes() {
        let test_cases = [
            (0b1010u64, 4),
            (0xFFu64, 8),
            (0x1Fu64, 5),
            (0x1234_5678u64, 32),
            (u64::MAX, 64),
        ];

        for (value, bits) in test_cases {
            let mut writer = BitWriter::new();
            writer.write_bits(value, bits).unwrap();
            let bytes = writer.finish();

            let mut reader = BitReader::new(&bytes);
            let read_value = reader.read_bits(bits).unwrap();
            assert_eq!(
                read_value, value,
                "roundtrip failed for {bits}-bit value {value}"
            );
        }
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = BitWriter::new();
        writer.write_bits(3, 8).unwrap();
        writer.write_bool(true);
        writer.write_bits(0b01, 2).unwrap();
        let wide = [0x01, 0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00, 0x00, 0x01];
        writer.write_wide(&wide, 65).unwrap();
        let bits = writer.bits_written();
        assert_eq!(bits, 76);
        let bytes = writer.finish();

        let mut reader = BitReader::with_bit_len(&bytes, bits);
        assert_eq!(reader.read_bits(8).unwrap(), 3);
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_bits(2).unwrap(), 0b01);
        assert_eq!(reader.read_wide(65).unwrap(), wide.to_vec());
        assert!(reader.is_empty());
    }
}
