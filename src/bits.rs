//! Raw 256-bit vector storage
//!
//! A 32-byte aggregate with no lane interpretation of its own. The typed
//! vector wrappers ([`crate::Vec16U16`], [`crate::Vec32U8`],
//! [`crate::Vec8U32`], [`crate::Vec8F32`]) each view the same bytes at a
//! fixed lane width; which view applies is decided by the wrapper's static
//! type, not by any stored tag — every interpretation is valid
//! simultaneously, and conversions between views copy nothing.

use std::fmt;
use std::fmt::Write as _;

/// Raw 256-bit storage shared by all typed vectors.
///
/// Plain `Copy` value semantics: every operation on a vector produces a new
/// value. The 32-byte layout is the crate's one externally visible artifact
/// and must stay bit-identical to the hardware registers it stands in for.
#[repr(C, align(32))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bits256([u8; 32]);

impl Bits256 {
    /// All 256 bits clear.
    #[inline]
    pub const fn zero() -> Self {
        Self([0; 32])
    }

    /// Build from 32 raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Load exactly 32 bytes from caller memory. No alignment assumed.
    ///
    /// The fixed-size reference makes a short buffer a compile error; the
    /// transfer itself performs no runtime checks, matching the unaligned
    /// load instruction it emulates.
    #[inline]
    pub fn load(src: &[u8; 32]) -> Self {
        Self(*src)
    }

    /// Store all 32 bytes into caller memory. No alignment assumed.
    #[inline]
    pub fn store(&self, dst: &mut [u8; 32]) {
        *dst = self.0;
    }

    /// Clear all 256 bits.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = [0; 32];
    }

    /// Borrow the underlying bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the underlying bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

/// Renders the 256 bits as a literal `'0'`/`'1'` string, least-significant
/// bit first within each byte: `format!("{:b}", v)`.
///
/// Diagnostic only — for test assertions and debugging, never a hot path.
impl fmt::Binary for Bits256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.0.iter() {
            for bit in 0..8 {
                f.write_char(if (byte >> bit) & 1 == 1 { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_all_clear() {
        let v = Bits256::zero();
        assert_eq!(v.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn test_clear() {
        let mut v = Bits256::from_bytes([0xff; 32]);
        v.clear();
        assert_eq!(v, Bits256::zero());
    }

    #[test]
    fn test_load_store_round_trip() {
        let mut src = [0u8; 32];
        for (i, b) in src.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let v = Bits256::load(&src);
        let mut dst = [0u8; 32];
        v.store(&mut dst);
        assert_eq!(src, dst);
    }

    #[test]
    fn test_bit_string_lsb_first() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0b0000_0001; // bit 0 set
        bytes[1] = 0b1000_0000; // bit 15 set
        let s = format!("{:b}", Bits256::from_bytes(bytes));
        assert_eq!(s.len(), 256);
        assert_eq!(&s[0..8], "10000000");
        assert_eq!(&s[8..16], "00000001");
        assert!(s[16..].bytes().all(|c| c == b'0'));
    }
}
