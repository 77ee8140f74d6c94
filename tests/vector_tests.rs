//! Scenario tests for the 256-bit vector types
//!
//! Concrete-value checks for:
//! - Raw storage round-trips and the bit-string dump
//! - u16 lane arithmetic, shifts, and half-pairwise combination
//! - The two comparison-mask encodings
//! - The lane-restricted byte table lookup
//! - Float horizontal helpers and fused multiply-add

use simd256::{
    cmp_ge32, cmp_le32, combine2x2, fmadd, hadd, max, min, Bits256, Vec16U16, Vec32U8, Vec8F32,
    Vec8U32,
};

// ============================================================
// Raw storage
// ============================================================

mod bits_tests {
    use super::*;

    #[test]
    fn test_store_load_round_trip() {
        let src: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(83).wrapping_add(7));
        let v = Bits256::load(&src);
        let mut dst = [0u8; 32];
        v.store(&mut dst);
        assert_eq!(Bits256::load(&dst), v);
    }

    #[test]
    fn test_typed_views_alias_identical_bytes() {
        let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
        let bits = Bits256::from_bytes(bytes);
        assert_eq!(Vec32U8::from_bits(bits).to_bits(), bits);
        assert_eq!(Vec16U16::from_bits(bits).to_bits(), bits);
        assert_eq!(Vec8U32::from_bits(bits).to_bits(), bits);
        // reinterpreting through a different width touches no byte
        let through_u16 = Vec16U16::from_bits(Vec32U8::from_array(bytes).to_bits());
        assert_eq!(through_u16.to_bits().to_bytes(), bytes);
    }

    #[test]
    fn test_bit_dump_of_broadcast() {
        // 0x01 in every byte: bit pattern "10000000" per byte, 32 times
        let s = format!("{:b}", Vec32U8::splat(1).to_bits());
        assert_eq!(s, "10000000".repeat(32));
    }
}

// ============================================================
// 16 x u16
// ============================================================

mod u16_tests {
    use super::*;

    #[test]
    fn test_broadcast_arithmetic_scenario() {
        let a = Vec16U16::splat(5);
        let b = Vec16U16::splat(3);
        assert_eq!((a - b).lane(0), 2);
        assert_eq!(a.shr::<1>().lane(0), 2);
        assert_eq!(a.shl::<1>().lane(0), 10);
    }

    #[test]
    fn test_combine2x2_scenario() {
        let a = Vec16U16::from_array(core::array::from_fn(|i| i as u16));
        let b = Vec16U16::from_array(core::array::from_fn(|i| 100 + i as u16));
        let c = combine2x2(a, b);
        assert_eq!(c.lane(0), 8); // a[0] + a[8]
        assert_eq!(c.lane(7), 7 + 15);
        assert_eq!(c.lane(8), 208); // b[0] + b[8]
        assert_eq!(c.lane(15), 107 + 115);
    }

    #[test]
    fn test_min_max_elementwise() {
        let a = Vec16U16::from_array(core::array::from_fn(|i| i as u16));
        let b = Vec16U16::splat(7);
        for j in 0..16 {
            assert_eq!(min(a, b).lane(j), (j as u16).min(7));
            assert_eq!(max(a, b).lane(j), (j as u16).max(7));
        }
    }

    #[test]
    fn test_bitwise_ops() {
        let a = Vec16U16::splat(0b1100);
        let b = Vec16U16::splat(0b1010);
        assert_eq!((a & b).lane(0), 0b1000);
        assert_eq!((a | b).lane(0), 0b1110);
    }
}

// ============================================================
// Comparison masks
// ============================================================

mod mask_tests {
    use super::*;

    #[test]
    fn test_ge_mask_reflexive() {
        let a = Vec16U16::from_array(core::array::from_fn(|i| (i * i) as u16));
        assert_eq!(a.ge_mask(a), u32::MAX);
    }

    #[test]
    fn test_ge_mask_sets_both_lane_bits() {
        let mut lanes = [0u16; 16];
        lanes[3] = 9;
        let a = Vec16U16::from_array(lanes);
        let thresh = Vec16U16::splat(5);
        // only lane 3 passes; both of its mask bits are set
        assert_eq!(a.ge_mask(thresh), 0b11 << 6);
    }

    #[test]
    fn test_le_is_ge_swapped_and_gt_is_complement() {
        let a = Vec16U16::from_array(core::array::from_fn(|i| (i * 3) as u16));
        let b = Vec16U16::splat(20);
        assert_eq!(a.le_mask(b), b.ge_mask(a));
        assert_eq!(a.gt_mask(b), !a.le_mask(b));
    }

    #[test]
    fn test_all_gt() {
        let d = Vec16U16::splat(100);
        assert!(d.all_gt(Vec16U16::splat(99)));
        let mut lanes = [100u16; 16];
        lanes[11] = 99;
        assert!(!Vec16U16::from_array(lanes).all_gt(Vec16U16::splat(99)));
    }

    #[test]
    fn test_cmp_ge32_concatenates_two_vectors() {
        let d0 = Vec16U16::from_array(core::array::from_fn(|i| i as u16));
        let d1 = Vec16U16::from_array(core::array::from_fn(|i| 15 - i as u16));
        let thr = Vec16U16::splat(8);
        let mask = cmp_ge32(d0, d1, thr);
        for j in 0..16 {
            assert_eq!((mask >> j) & 1 == 1, j >= 8, "d0 lane {}", j);
            assert_eq!((mask >> (j + 16)) & 1 == 1, 15 - j >= 8, "d1 lane {}", j);
        }
    }

    #[test]
    fn test_cmp_le32_concatenates_two_vectors() {
        let d0 = Vec16U16::from_array(core::array::from_fn(|i| i as u16));
        let d1 = Vec16U16::splat(3);
        let thr = Vec16U16::splat(8);
        let mask = cmp_le32(d0, d1, thr);
        for j in 0..16 {
            assert_eq!((mask >> j) & 1 == 1, j <= 8, "d0 lane {}", j);
            assert_eq!((mask >> (j + 16)) & 1, 1, "d1 lane {}", j);
        }
    }
}

// ============================================================
// 32 x u8 lookup
// ============================================================

mod lookup_tests {
    use super::*;

    #[test]
    fn test_identity_indices_return_original() {
        let table = Vec32U8::from_array(core::array::from_fn(|i| (i as u8).wrapping_mul(11)));
        let idx = Vec32U8::from_array(core::array::from_fn(|i| (i % 16) as u8));
        assert_eq!(table.lookup_2_lanes(idx), table);
    }

    #[test]
    fn test_high_bit_disables_single_position() {
        let table = Vec32U8::splat(0xaa);
        let mut idx = [0u8; 32];
        idx[5] = 0x80;
        idx[21] = 0x8f;
        let out = table.lookup_2_lanes(Vec32U8::from_array(idx)).to_array();
        for (j, &b) in out.iter().enumerate() {
            let expect = if j == 5 || j == 21 { 0 } else { 0xaa };
            assert_eq!(b, expect, "position {}", j);
        }
    }

    #[test]
    fn test_lookup_never_crosses_half_boundary() {
        // low half all zeros, high half all ones; any index stays local
        let mut bytes = [0u8; 32];
        bytes[16..].fill(1);
        let table = Vec32U8::from_array(bytes);
        for i in 0..16u8 {
            let out = table.lookup_2_lanes(Vec32U8::splat(i)).to_array();
            assert!(out[..16].iter().all(|&b| b == 0));
            assert!(out[16..].iter().all(|&b| b == 1));
        }
    }
}

// ============================================================
// 8 x f32
// ============================================================

mod float_tests {
    use super::*;

    #[test]
    fn test_hadd_scenario() {
        let a = Vec8F32::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = Vec8F32::from_array([10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
        assert_eq!(
            hadd(a, b).to_array(),
            [3.0, 7.0, 30.0, 70.0, 11.0, 15.0, 110.0, 150.0]
        );
    }

    #[test]
    fn test_fmadd_matches_fused_reference() {
        let a = Vec8F32::from_array([0.1, -2.5, 3.25, 1e10, -1e-10, 7.0, 0.0, -0.0]);
        let b = Vec8F32::splat(3.0);
        let c = Vec8F32::from_array([1.0, 0.5, -0.25, -1e10, 2.0, -21.0, 5.0, 5.0]);
        let out = fmadd(a, b, c).to_array();
        let av = a.to_array();
        let cv = c.to_array();
        for j in 0..8 {
            assert_eq!(out[j].to_bits(), av[j].mul_add(3.0, cv[j]).to_bits());
        }
    }

    #[test]
    fn test_fmadd_rounds_once() {
        // x*x - 1 loses the low product bits when the multiply rounds on
        // its own; the fused form keeps them
        let x = 1.0f32 + 2.0f32.powi(-12);
        let fused = fmadd(Vec8F32::splat(x), Vec8F32::splat(x), Vec8F32::splat(-1.0)).lane(0);
        let split = x * x - 1.0;
        assert_eq!(fused.to_bits(), x.mul_add(x, -1.0).to_bits());
        assert_ne!(fused.to_bits(), split.to_bits());
    }

    #[test]
    fn test_float_store_preserves_bit_patterns() {
        let v = Vec8F32::from_array([f32::NAN, -0.0, f32::INFINITY, 1.5, -1.5, 0.0, 2.0, -2.0]);
        let mut buf = [0u8; 32];
        v.store(&mut buf);
        let back = Vec8F32::load(&buf);
        assert_eq!(back.to_bits(), v.to_bits());
    }
}
