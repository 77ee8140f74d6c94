//! 16 × u16 vector
//!
//! The workhorse type of the distance-accumulation paths: elementwise
//! integer arithmetic, compile-time-immediate shifts, running min/max
//! accumulation, and the two comparison-mask encodings.
//!
//! # Mask encodings
//!
//! Two packed boolean encodings come out of this module and must never be
//! conflated at a call site:
//!
//! - **2 bits per lane** — [`Vec16U16::ge_mask`] and friends set *both*
//!   bits of a lane's pair when the comparison holds (16 lanes × 2 = 32
//!   bits).
//! - **1 bit per lane over two vectors** — [`cmp_ge32`]/[`cmp_le32`] pack
//!   lane `i` of the first operand into bit `i` and lane `i` of the second
//!   into bit `i + 16`.

use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Not, Sub, SubAssign};

use crate::bits::Bits256;
use crate::lane;

/// 16 lanes of `u16` viewing 256 bits.
///
/// Arithmetic wraps modulo 2^16, matching the hardware instructions being
/// emulated.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec16U16(Bits256);

impl Vec16U16 {
    /// Number of lanes.
    pub const LANES: usize = 16;

    /// All lanes zero.
    #[inline]
    pub const fn zero() -> Self {
        Self(Bits256::zero())
    }

    /// Broadcast `x` to every lane.
    #[inline]
    pub fn splat(x: u16) -> Self {
        Self::from_array([x; 16])
    }

    /// Build from a lane array; lane 0 occupies the lowest bytes.
    #[inline]
    pub fn from_array(lanes: [u16; 16]) -> Self {
        let mut bytes = [0u8; 32];
        for (chunk, lane) in bytes.chunks_exact_mut(2).zip(lanes) {
            chunk.copy_from_slice(&lane.to_ne_bytes());
        }
        Self(Bits256::from_bytes(bytes))
    }

    /// Copy all lanes out as an array.
    #[inline]
    pub fn to_array(self) -> [u16; 16] {
        let mut out = [0u16; 16];
        for (lane, chunk) in out.iter_mut().zip(self.0.as_bytes().chunks_exact(2)) {
            *lane = u16::from_ne_bytes(chunk.try_into().unwrap());
        }
        out
    }

    /// Load 16 lanes from 32 bytes of caller memory. No alignment assumed.
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

    /// Read one lane by index.
    ///
    /// Debug aid only — goes through a full lane decode and is not meant
    /// for bulk extraction; use [`Vec16U16::store`] on hot paths.
    #[inline]
    pub fn lane(self, i: usize) -> u16 {
        self.to_array()[i]
    }

    /// Lane 0.
    #[inline]
    pub fn first(self) -> u16 {
        self.lane(0)
    }

    #[inline]
    fn unary(self, f: impl Fn(u16) -> u16) -> Self {
        Self::from_array(lane::map(self.to_array(), f))
    }

    #[inline]
    fn binary(a: Self, b: Self, f: impl Fn(u16, u16) -> u16) -> Self {
        Self::from_array(lane::zip(a.to_array(), b.to_array(), f))
    }

    /// Lanewise equality: lane = `0xffff` where equal, `0` elsewhere.
    #[inline]
    pub fn lanes_eq(self, other: Self) -> Self {
        Self::binary(self, other, |a, b| if a == b { 0xffff } else { 0 })
    }

    /// Shift every lane left by a compile-time amount.
    ///
    /// The emulated instruction takes its shift count as an immediate
    /// operand; the const generic keeps that constraint, so a runtime
    /// shift amount is a build error. `SHIFT` must be below 16.
    #[inline]
    pub fn shl<const SHIFT: u32>(self) -> Self {
        self.unary(|a| a << SHIFT)
    }

    /// Shift every lane right by a compile-time amount. `SHIFT` must be
    /// below 16.
    #[inline]
    pub fn shr<const SHIFT: u32>(self) -> Self {
        self.unary(|a| a >> SHIFT)
    }

    /// Mask of lanes where `self >= thresh`.
    ///
    /// 2 bits per lane, both set when the comparison holds: 16 × 2 = 32
    /// bits. Not interchangeable with the 1-bit-per-lane encoding of
    /// [`cmp_ge32`].
    #[inline]
    pub fn ge_mask(self, thresh: Self) -> u32 {
        let a = self.to_array();
        let t = thresh.to_array();
        let mut mask = 0u32;
        for j in 0..Self::LANES {
            if a[j] >= t[j] {
                mask |= 3 << (j * 2);
            }
        }
        mask
    }

    /// Mask of lanes where `self <= thresh`, 2 bits per lane.
    #[inline]
    pub fn le_mask(self, thresh: Self) -> u32 {
        thresh.ge_mask(self)
    }

    /// Mask of lanes where `self > thresh`, 2 bits per lane; the bitwise
    /// complement of [`Vec16U16::le_mask`].
    #[inline]
    pub fn gt_mask(self, thresh: Self) -> u32 {
        !self.le_mask(thresh)
    }

    /// True iff every lane is strictly greater than its threshold lane.
    #[inline]
    pub fn all_gt(self, thresh: Self) -> bool {
        self.le_mask(thresh) == 0
    }

    /// Replace each lane with the minimum of itself and `incoming`.
    ///
    /// Running-minimum accumulation across successive partial vectors.
    #[inline]
    pub fn accu_min(&mut self, incoming: Self) {
        *self = min(*self, incoming);
    }

    /// Replace each lane with the maximum of itself and `incoming`.
    #[inline]
    pub fn accu_max(&mut self, incoming: Self) {
        *self = max(*self, incoming);
    }
}

// ============================================================
// Operators
// ============================================================

impl Add for Vec16U16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::binary(self, rhs, u16::wrapping_add)
    }
}

impl Sub for Vec16U16 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::binary(self, rhs, u16::wrapping_sub)
    }
}

impl AddAssign for Vec16U16 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec16U16 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl BitAnd for Vec16U16 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::binary(self, rhs, |a, b| a & b)
    }
}

impl BitOr for Vec16U16 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::binary(self, rhs, |a, b| a | b)
    }
}

impl Not for Vec16U16 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.unary(|a| !a)
    }
}

impl From<Bits256> for Vec16U16 {
    #[inline]
    fn from(bits: Bits256) -> Self {
        Self(bits)
    }
}

impl From<Vec16U16> for Bits256 {
    #[inline]
    fn from(v: Vec16U16) -> Self {
        v.0
    }
}

impl From<u16> for Vec16U16 {
    #[inline]
    fn from(x: u16) -> Self {
        Self::splat(x)
    }
}

/// Decimal lane dump, lane 0 first.
impl fmt::Debug for Vec16U16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_array()).finish()
    }
}

/// Hex lane dump, lane 0 first, comma separated.
impl fmt::LowerHex for Vec16U16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lane) in self.to_array().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:04x}", lane)?;
        }
        Ok(())
    }
}

// ============================================================
// Free functions
// ============================================================

/// Elementwise minimum.
#[inline]
pub fn min(a: Vec16U16, b: Vec16U16) -> Vec16U16 {
    Vec16U16::binary(a, b, u16::min)
}

/// Elementwise maximum.
#[inline]
pub fn max(a: Vec16U16, b: Vec16U16) -> Vec16U16 {
    Vec16U16::binary(a, b, u16::max)
}

/// Pairwise fold of two vectors' 8-lane halves into one vector.
///
/// Treats each operand as two 8-lane halves: output lane `j` (`j < 8`) is
/// `a[j] + a[j + 8]`, output lane `j + 8` is `b[j] + b[j + 8]`. Merges two
/// 8-wide partial results into one combined vector.
#[inline]
pub fn combine2x2(a: Vec16U16, b: Vec16U16) -> Vec16U16 {
    let a = a.to_array();
    let b = b.to_array();
    let mut out = [0u16; 16];
    for j in 0..8 {
        out[j] = a[j].wrapping_add(a[j + 8]);
        out[j + 8] = b[j].wrapping_add(b[j + 8]);
    }
    Vec16U16::from_array(out)
}

/// Compare `d0` and `d1` against `thr` lanewise with `>=`.
///
/// 1 bit per lane: bit `i` (`i < 16`) reflects `d0` lane `i`, bit `i + 16`
/// reflects `d1` lane `i`. This encoding is distinct from the 2-bit-per-lane
/// masks of [`Vec16U16::ge_mask`]; callers must not mix the two.
#[inline]
pub fn cmp_ge32(d0: Vec16U16, d1: Vec16U16, thr: Vec16U16) -> u32 {
    let d0 = d0.to_array();
    let d1 = d1.to_array();
    let thr = thr.to_array();
    let mut mask = 0u32;
    for j in 0..Vec16U16::LANES {
        if d0[j] >= thr[j] {
            mask |= 1 << j;
        }
        if d1[j] >= thr[j] {
            mask |= 1 << (j + 16);
        }
    }
    mask
}

/// Compare `d0` and `d1` against `thr` lanewise with `<=`.
///
/// Same 1-bit-per-lane packing as [`cmp_ge32`].
#[inline]
pub fn cmp_le32(d0: Vec16U16, d1: Vec16U16, thr: Vec16U16) -> u32 {
    let d0 = d0.to_array();
    let d1 = d1.to_array();
    let thr = thr.to_array();
    let mut mask = 0u32;
    for j in 0..Vec16U16::LANES {
        if d0[j] <= thr[j] {
            mask |= 1 << j;
        }
        if d1[j] <= thr[j] {
            mask |= 1 << (j + 16);
        }
    }
    mask
}
