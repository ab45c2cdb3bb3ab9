//! Conversion between packed bit buffers and symbol indices.

use bitstream::{BitReader, BitResult, BitWriter};

/// Splits the first `bit_len` bits of `bytes` into `bits_per_symbol` groups,
/// most significant group first.
///
/// `bit_len` must be a multiple of `bits_per_symbol`.
pub fn bits_to_symbols(bytes: &[u8], bit_len: usize, bits_per_symbol: u8) -> BitResult<Vec<u8>> {
    let width = usize::from(bits_per_symbol);
    if width == 0 {
        return Ok(Vec::new());
    }
    let mut reader = BitReader::with_bit_len(bytes, bit_len);
    let mut symbols = Vec::with_capacity(bit_len / width);
    while !reader.is_empty() {
        let group = reader.read_bits(width)?;
        // A group is at most 8 bits wide.
        symbols.push(group as u8);
    }
    Ok(symbols)
}

/// Concatenates symbol indices into a packed buffer, first symbol in the
/// most significant position. Returns the bytes and their bit length.
pub fn symbols_to_bits(symbols: &[u8], bits_per_symbol: u8) -> BitResult<(Vec<u8>, usize)> {
    let width = usize::from(bits_per_symbol);
    let mut writer = BitWriter::with_bit_capacity(symbols.len() * width);
    for &symbol in symbols {
        writer.write_bits(u64::from(symbol), width)?;
    }
    let bit_len = writer.bits_written();
    Ok((writer.finish(), bit_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_five_bit_groups() {
        // 0b00001_00010_00011_0 packed into two bytes (15 bits used).
        let bytes = [0b0000_1000, 0b1000_0110];
        let symbols = bits_to_symbols(&bytes, 15, 5).unwrap();
        assert_eq!(symbols, vec![1, 2, 3]);
    }

    #[test]
    fn join_is_inverse_of_split() {
        let symbols = vec![31, 0, 17, 4, 9];
        let (bytes, bit_len) = symbols_to_bits(&symbols, 5).unwrap();
        assert_eq!(bit_len, 25);
        assert_eq!(bits_to_symbols(&bytes, bit_len, 5).unwrap(), symbols);
    }

    #[test]
    fn join_rejects_symbol_wider_than_group() {
        assert!(symbols_to_bits(&[32], 5).is_err());
    }

    #[test]
    fn split_rejects_partial_group() {
        assert!(bits_to_symbols(&[0xFF], 7, 5).is_err());
    }
}
