#![no_main]

use bitstream::BitReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let mut reader = BitReader::with_bit_len(rest, usize::from(first) * 4);
    let mut idx = 0usize;

    // Input bytes drive a bounded sequence of reads.
    while idx < rest.len() && idx < 1024 {
        let op = rest[idx] % 3;
        let bits = usize::from(rest[idx] >> 2);
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_bit();
            }
            1 => {
                let _ = reader.read_bits(bits.min(64));
            }
            _ => {
                let _ = reader.read_wide(bits);
            }
        }
        assert!(reader.bit_position() <= usize::from(first) * 4);
    }
});
