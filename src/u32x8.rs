//! 8 × u32 vector
//!
//! Deliberately minimal: broadcast construction, lane array conversion, and
//! diagnostic dumps. Callers that grow a need for 32-bit lane arithmetic
//! add it here by instantiating the same elementwise combinator the other
//! widths use, not by inventing new semantics.

use std::fmt;

use crate::bits::Bits256;

/// 8 lanes of `u32` viewing 256 bits.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec8U32(Bits256);

impl Vec8U32 {
    /// Number of lanes.
    pub const LANES: usize = 8;

    /// All lanes zero.
    #[inline]
    pub const fn zero() -> Self {
        Self(Bits256::zero())
    }

    /// Broadcast `x` to every lane.
    #[inline]
    pub fn splat(x: u32) -> Self {
        Self::from_array([x; 8])
    }

    /// Build from a lane array; lane 0 occupies the lowest bytes.
    #[inline]
    pub fn from_array(lanes: [u32; 8]) -> Self {
        let mut bytes = [0u8; 32];
        for (chunk, lane) in bytes.chunks_exact_mut(4).zip(lanes) {
            chunk.copy_from_slice(&lane.to_ne_bytes());
        }
        Self(Bits256::from_bytes(bytes))
    }

    /// Copy all lanes out as an array.
    #[inline]
    pub fn to_array(self) -> [u32; 8] {
        let mut out = [0u32; 8];
        for (lane, chunk) in out.iter_mut().zip(self.0.as_bytes().chunks_exact(4)) {
            *lane = u32::from_ne_bytes(chunk.try_into().unwrap());
        }
        out
    }

    /// Load 8 lanes from 32 bytes of caller memory. No alignment assumed.
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

    /// Read one lane by index. Debug aid only.
    #[inline]
    pub fn lane(self, i: usize) -> u32 {
        self.to_array()[i]
    }
}

impl From<Bits256> for Vec8U32 {
    #[inline]
    fn from(bits: Bits256) -> Self {
        Self(bits)
    }
}

impl From<Vec8U32> for Bits256 {
    #[inline]
    fn from(v: Vec8U32) -> Self {
        v.0
    }
}

impl From<u32> for Vec8U32 {
    #[inline]
    fn from(x: u32) -> Self {
        Self::splat(x)
    }
}

/// Decimal lane dump, lane 0 first.
impl fmt::Debug for Vec8U32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_array()).finish()
    }
}

/// Hex lane dump, lane 0 first, comma separated.
impl fmt::LowerHex for Vec8U32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lane) in self.to_array().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:08x}", lane)?;
        }
        Ok(())
    }
}
