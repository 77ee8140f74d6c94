//! 32 × u8 vector
//!
//! Byte lanes plus the lane-restricted table lookup that the quantization
//! code paths of the consuming engine are built around.

use std::fmt;
use std::ops::{Add, AddAssign, BitAnd};

use crate::bits::Bits256;
use crate::lane;

/// 32 lanes of `u8` viewing 256 bits.
///
/// Arithmetic wraps modulo 2^8, matching the hardware instructions being
/// emulated.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec32U8(Bits256);

impl Vec32U8 {
    /// Number of lanes.
    pub const LANES: usize = 32;

    /// All lanes zero.
    #[inline]
    pub const fn zero() -> Self {
        Self(Bits256::zero())
    }

    /// Broadcast `x` to every lane.
    #[inline]
    pub const fn splat(x: u8) -> Self {
        Self(Bits256::from_bytes([x; 32]))
    }

    /// Build from a lane array; lane 0 occupies byte 0.
    #[inline]
    pub const fn from_array(lanes: [u8; 32]) -> Self {
        Self(Bits256::from_bytes(lanes))
    }

    /// Copy all lanes out as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Load 32 lanes from caller memory. No alignment assumed.
    #[inline]
    pub fn load(src: &[u8; 32]) -> Self {
        Self(Bits256::load(src))
    }

    /// Store all lanes into caller memory. Bulk extraction path.
    #[inline]
    pub fn store(&self, dst: &mut [u8; 32]) {
        self.0.store(dst);
    }

    /// Reinterpret raw 256-bit storage. Zero-copy.
    #[inline]
    pub const fn from_bits(bits: Bits256) -> Self {
        Self(bits)
    }

    /// The raw 256-bit storage. Zero-copy.
    #[inline]
    pub const fn to_bits(self) -> Bits256 {
        self.0
    }

    /// Read one lane by index. Debug aid only; use [`Vec32U8::store`] on
    /// hot paths.
    #[inline]
    pub fn lane(self, i: usize) -> u8 {
        self.0.as_bytes()[i]
    }

    #[inline]
    fn binary(a: Self, b: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        Self::from_array(lane::zip(a.to_array(), b.to_array(), f))
    }

    /// Lane-restricted 16-entry table lookup.
    ///
    /// The 32 output positions form two independent 16-entry tables:
    /// positions 0–15 draw from source bytes 0–15, positions 16–31 from
    /// source bytes 16–31. For output position `j`, an index byte with its
    /// high bit set yields 0 (disabled lookup); otherwise the low 4 bits of
    /// `idx[j]` select a byte strictly within `j`'s own half. A lookup
    /// never reads across the 16/16 boundary; the distance-table layout of
    /// the consuming engine depends on that exact behavior.
    #[inline]
    pub fn lookup_2_lanes(self, idx: Self) -> Self {
        let table = self.to_array();
        let idx = idx.to_array();
        let mut out = [0u8; 32];
        for (j, out_byte) in out.iter_mut().enumerate() {
            if idx[j] & 0x80 != 0 {
                continue;
            }
            let half = j & 16;
            *out_byte = table[half + (idx[j] & 15) as usize];
        }
        Self::from_array(out)
    }
}

impl Add for Vec32U8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::binary(self, rhs, u8::wrapping_add)
    }
}

impl AddAssign for Vec32U8 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl BitAnd for Vec32U8 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::binary(self, rhs, |a, b| a & b)
    }
}

impl From<Bits256> for Vec32U8 {
    #[inline]
    fn from(bits: Bits256) -> Self {
        Self(bits)
    }
}

impl From<Vec32U8> for Bits256 {
    #[inline]
    fn from(v: Vec32U8) -> Self {
        v.0
    }
}

impl From<u8> for Vec32U8 {
    #[inline]
    fn from(x: u8) -> Self {
        Self::splat(x)
    }
}

/// Decimal lane dump, lane 0 first.
impl fmt::Debug for Vec32U8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_array()).finish()
    }
}

/// Hex lane dump, lane 0 first, comma separated.
impl fmt::LowerHex for Vec32U8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lane) in self.to_array().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:02x}", lane)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat_and_add_wraps() {
        let a = Vec32U8::splat(250);
        let b = Vec32U8::splat(10);
        assert_eq!((a + b).to_array(), [4u8; 32]);
    }

    #[test]
    fn test_bitand() {
        let a = Vec32U8::splat(0b1100);
        let b = Vec32U8::splat(0b1010);
        assert_eq!((a & b).to_array(), [0b1000u8; 32]);
    }

    #[test]
    fn test_lookup_stays_in_own_half() {
        let table = Vec32U8::from_array(core::array::from_fn(|i| (i as u8) + 100));
        // every output position asks for entry 0 of its table
        let idx = Vec32U8::zero();
        let out = table.lookup_2_lanes(idx).to_array();
        for (j, &b) in out.iter().enumerate() {
            // low half reads byte 0, high half reads byte 16
            assert_eq!(b, if j < 16 { 100 } else { 116 });
        }
    }

    #[test]
    fn test_lookup_ignores_upper_index_bits() {
        let table = Vec32U8::from_array(core::array::from_fn(|i| i as u8));
        // 0x73 & 15 == 3
        let out = table.lookup_2_lanes(Vec32U8::splat(0x73)).to_array();
        for (j, &b) in out.iter().enumerate() {
            assert_eq!(b, if j < 16 { 3 } else { 19 });
        }
    }
}
