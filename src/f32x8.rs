//! 8 × f32 vector
//!
//! Elementwise float arithmetic plus the cross-lane-restricted helpers the
//! distance kernels need: fused multiply-add, half-local horizontal add,
//! and pair interleaves. The horizontal helpers never mix a vector's two
//! 4-float halves; the instructions they emulate do not either.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::bits::Bits256;
use crate::lane;

/// 8 lanes of `f32` viewing 256 bits.
///
/// No lanewise `PartialEq` is provided; an oracle compares bit patterns,
/// so tests go through [`Vec8F32::to_array`] or [`Vec8F32::to_bits`].
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Vec8F32(Bits256);

impl Vec8F32 {
    /// Number of lanes.
    pub const LANES: usize = 8;

    /// All lanes zero.
    #[inline]
    pub const fn zero() -> Self {
        Self(Bits256::zero())
    }

    /// Broadcast `x` to every lane.
    #[inline]
    pub fn splat(x: f32) -> Self {
        Self::from_array([x; 8])
    }

    /// Build from a lane array; lane 0 occupies the lowest bytes.
    #[inline]
    pub fn from_array(lanes: [f32; 8]) -> Self {
        let mut bytes = [0u8; 32];
        for (chunk, lane) in bytes.chunks_exact_mut(4).zip(lanes) {
            chunk.copy_from_slice(&lane.to_ne_bytes());
        }
        Self(Bits256::from_bytes(bytes))
    }

    /// Copy all lanes out as an array.
    #[inline]
    pub fn to_array(self) -> [f32; 8] {
        let mut out = [0f32; 8];
        for (lane, chunk) in out.iter_mut().zip(self.0.as_bytes().chunks_exact(4)) {
            *lane = f32::from_ne_bytes(chunk.try_into().unwrap());
        }
        out
    }

    /// Load 8 floats from caller memory. No alignment assumed.
    #[inline]
    pub fn from_floats(src: &[f32; 8]) -> Self {
        Self::from_array(*src)
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

    /// Read one lane by index. Debug aid only; use [`Vec8F32::store`] on
    /// hot paths.
    #[inline]
    pub fn lane(self, i: usize) -> f32 {
        self.to_array()[i]
    }

    #[inline]
    fn binary(a: Self, b: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::from_array(lane::zip(a.to_array(), b.to_array(), f))
    }
}

impl Add for Vec8F32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::binary(self, rhs, |a, b| a + b)
    }
}

impl Sub for Vec8F32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::binary(self, rhs, |a, b| a - b)
    }
}

impl Mul for Vec8F32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::binary(self, rhs, |a, b| a * b)
    }
}

impl From<Bits256> for Vec8F32 {
    #[inline]
    fn from(bits: Bits256) -> Self {
        Self(bits)
    }
}

impl From<Vec8F32> for Bits256 {
    #[inline]
    fn from(v: Vec8F32) -> Self {
        v.0
    }
}

impl From<f32> for Vec8F32 {
    #[inline]
    fn from(x: f32) -> Self {
        Self::splat(x)
    }
}

/// Lane dump, lane 0 first.
impl fmt::Debug for Vec8F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_array()).finish()
    }
}

/// Per-lane `a * b + c` with a single rounding step.
///
/// Goes through [`f32::mul_add`]; a separate multiply-then-add would round
/// twice and invalidate this layer as an oracle for the hardware fused
/// instruction.
#[inline]
pub fn fmadd(a: Vec8F32, b: Vec8F32, c: Vec8F32) -> Vec8F32 {
    let a = a.to_array();
    let b = b.to_array();
    let c = c.to_array();
    let mut out = [0f32; 8];
    for j in 0..Vec8F32::LANES {
        out[j] = a[j].mul_add(b[j], c[j]);
    }
    Vec8F32::from_array(out)
}

/// Horizontal add restricted to each 4-float half.
///
/// Output lanes 0–1 sum adjacent pairs of `a`'s first half, lanes 2–3 of
/// `b`'s first half, lanes 4–5 of `a`'s second half, lanes 6–7 of `b`'s
/// second half. Never sums across the 4/4 boundary.
#[inline]
pub fn hadd(a: Vec8F32, b: Vec8F32) -> Vec8F32 {
    let a = a.to_array();
    let b = b.to_array();
    Vec8F32::from_array([
        a[0] + a[1],
        a[2] + a[3],
        b[0] + b[1],
        b[2] + b[3],
        a[4] + a[5],
        a[6] + a[7],
        b[4] + b[5],
        b[6] + b[7],
    ])
}

/// Interleave the low pairs of each 4-float half of `a` and `b`.
///
/// Never crosses the 4/4 boundary.
#[inline]
pub fn unpacklo(a: Vec8F32, b: Vec8F32) -> Vec8F32 {
    let a = a.to_array();
    let b = b.to_array();
    Vec8F32::from_array([a[0], b[0], a[1], b[1], a[4], b[4], a[5], b[5]])
}

/// Interleave the high pairs of each 4-float half of `a` and `b`.
///
/// Never crosses the 4/4 boundary.
#[inline]
pub fn unpackhi(a: Vec8F32, b: Vec8F32) -> Vec8F32 {
    let a = a.to_array();
    let b = b.to_array();
    Vec8F32::from_array([a[2], b[2], a[3], b[3], a[6], b[6], a[7], b[7]])
}
