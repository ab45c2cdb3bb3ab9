use bitstream::{BitReader, BitWriter};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Bit(bool),
    Bits { bits: usize, value: u64 },
    Wide { bits: usize, value: Vec<u8> },
}

fn mask_value(bits: usize, value: u64) -> u64 {
    if bits >= 64 {
        value
    } else {
        let mask = (1u64 << bits) - 1;
        value & mask
    }
}

fn mask_wide(bits: usize, mut value: Vec<u8>) -> Vec<u8> {
    let pad = value.len() * 8 - bits;
    if pad > 0 {
        value[0] &= 0xFFu8 >> pad;
    }
    value
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Bit),
        (0usize..=64, any::<u64>()).prop_map(|(bits, value)| Op::Bits {
            bits,
            value: mask_value(bits, value),
        }),
        (1usize..=160).prop_flat_map(|bits| {
            prop::collection::vec(any::<u8>(), bits.div_ceil(8)).prop_map(move |value| Op::Wide {
                bits,
                value: mask_wide(bits, value),
            })
        }),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..48)) {
        let mut writer = BitWriter::new();

        for op in &ops {
            match op {
                Op::Bit(b) => writer.write_bool(*b),
                Op::Bits { bits, value } => writer.write_bits(*value, *bits).unwrap(),
                Op::Wide { bits, value } => writer.write_wide(value, *bits).unwrap(),
            }
        }

        let bit_len = writer.bits_written();
        let bytes = writer.finish();
        prop_assert_eq!(bytes.len(), bit_len.div_ceil(8));
        let mut reader = BitReader::with_bit_len(&bytes, bit_len);

        for op in &ops {
            match op {
                Op::Bit(b) => {
                    prop_assert_eq!(reader.read_bit().unwrap(), *b);
                }
                Op::Bits { bits, value } => {
                    prop_assert_eq!(reader.read_bits(*bits).unwrap(), *value);
                }
                Op::Wide { bits, value } => {
                    prop_assert_eq!(&reader.read_wide(*bits).unwrap(), value);
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_reader_never_panics(data in prop::collection::vec(any::<u8>(), 0..32), widths in prop::collection::vec(0usize..=96, 0..16)) {
        let mut reader = BitReader::new(&data);
        for width in widths {
            let _ = reader.read_bits(width);
            let _ = reader.read_wide(width);
        }
    }
}
