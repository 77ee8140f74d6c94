//! Portable 256-bit vector emulation
//!
//! Scalar-emulated fixed-width vector value types that reproduce, bit for
//! bit, the semantics of real 256-bit hardware vector instructions.
//!
//! # Overview
//!
//! All types are 32-byte `Copy` values viewing the same raw storage
//! ([`Bits256`]) at a fixed lane width:
//!
//! - [`Vec16U16`] - 16 x u16, distance accumulation and comparison masks
//! - [`Vec32U8`] - 32 x u8, codes and the lane-restricted table lookup
//! - [`Vec8U32`] - 8 x u32, minimal (extension point)
//! - [`Vec8F32`] - 8 x f32, float arithmetic, fused multiply-add,
//!   half-local horizontal helpers
//!
//! Conversions between typed views go through [`Bits256`] and copy nothing;
//! every interpretation of the 32 bytes is valid simultaneously.
//!
//! # Why emulated
//!
//! Code written against this abstraction runs correctly on platforms with
//! no hardware vector support, and the emulation doubles as a reference
//! oracle for validating a hardware-accelerated implementation of the same
//! operations. Exact lane semantics therefore matter more than speed:
//! integer arithmetic wraps, shifts take compile-time immediates,
//! [`fmadd`] rounds once, and the lookup and horizontal operations never
//! cross their documented half boundaries.
//!
//! # What does NOT belong here
//!
//! - Runtime CPU-feature detection or dispatch to hardware paths
//! - Vector widths other than 256 bits
//! - Saturating arithmetic variants
//! - Heap allocation, I/O, or synchronization; everything is pure value
//!   computation on `Copy` data
//!
//! # Example
//!
//! ```
//! use simd256::{combine2x2, Vec16U16};
//!
//! let a = Vec16U16::splat(5);
//! let b = Vec16U16::splat(3);
//! assert_eq!((a - b).lane(0), 2);
//! assert_eq!(a.shl::<1>().lane(0), 10);
//!
//! let parts = combine2x2(a, b);
//! assert_eq!(parts.lane(0), 10); // 5 + 5
//! assert_eq!(parts.lane(8), 6); // 3 + 3
//! ```

#![warn(missing_docs)]

pub mod bits;
pub mod f32x8;
mod lane;
pub mod u16x16;
pub mod u32x8;
pub mod u8x32;

pub use bits::Bits256;
pub use f32x8::{fmadd, hadd, unpackhi, unpacklo, Vec8F32};
pub use u16x16::{cmp_ge32, cmp_le32, combine2x2, max, min, Vec16U16};
pub use u32x8::Vec8U32;
pub use u8x32::Vec32U8;
