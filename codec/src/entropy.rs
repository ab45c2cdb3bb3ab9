//! Fixed-width entropy fields.

use std::fmt;

use rand::Rng;

/// An unsigned integer of exactly `bits` bits, stored big-endian.
///
/// Widths are arbitrary: a 15-symbol base32 seed carries well over 64
/// entropy bits. Constructors keep the low `bits` bits of their input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entropy {
    bits: usize,
    bytes: Vec<u8>,
}

impl Entropy {
    /// The all-zero value of the given width.
    #[must_use]
    pub fn zero(bits: usize) -> Self {
        Self {
            bits,
            bytes: vec![0; bits.div_ceil(8)],
        }
    }

    /// Keeps the low `bits` bits of a big-endian integer.
    #[must_use]
    pub fn from_be_bytes(bits: usize, value: &[u8]) -> Self {
        let mut entropy = Self::zero(bits);
        let len = entropy.bytes.len();
        let take = len.min(value.len());
        entropy.bytes[len - take..].copy_from_slice(&value[value.len() - take..]);
        entropy.mask();
        entropy
    }

    /// Keeps the low `bits` bits of `value`.
    #[must_use]
    pub fn from_u64(bits: usize, value: u64) -> Self {
        Self::from_be_bytes(bits, &value.to_be_bytes())
    }

    /// Keeps the low `bits` bits of `value`.
    #[must_use]
    pub fn from_u128(bits: usize, value: u128) -> Self {
        Self::from_be_bytes(bits, &value.to_be_bytes())
    }

    /// Samples a uniformly random value of the given width.
    pub fn random<R: Rng + ?Sized>(bits: usize, rng: &mut R) -> Self {
        let mut entropy = Self::zero(bits);
        rng.fill(entropy.bytes.as_mut_slice());
        entropy.mask();
        entropy
    }

    /// Width in bits.
    #[must_use]
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Big-endian bytes; unused high bits of the first byte are zero.
    #[must_use]
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the value if it fits in a `u128`.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        let significant = self.bytes.iter().position(|&b| b != 0).unwrap_or(self.bytes.len());
        let tail = &self.bytes[significant..];
        if tail.len() > 16 {
            return None;
        }
        Some(tail.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b)))
    }

    /// Lowercase hexadecimal, zero-padded to the byte width.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    fn mask(&mut self) {
        let pad = self.bytes.len() * 8 - self.bits;
        if let Some(first) = self.bytes.first_mut() {
            *first &= 0xFFu8 >> pad;
        }
    }
}

impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
