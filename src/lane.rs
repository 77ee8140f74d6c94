//! Generic elementwise combinator
//!
//! Every elementwise arithmetic, logical, and comparison operator on the
//! typed vectors is an instance of the two functions here: apply a scalar
//! function independently to each lane and assemble a new lane array from
//! the results. Both are generic over the element type and lane count and
//! monomorphize per call site, so each operator compiles down to a plain
//! fixed-trip-count loop the optimizer can unroll and auto-vectorize — no
//! boxed closures, no indirection.

/// Apply `f` to every lane of `a`.
#[inline]
pub(crate) fn map<T: Copy, const N: usize>(a: [T; N], f: impl Fn(T) -> T) -> [T; N] {
    let mut out = a;
    for lane in out.iter_mut() {
        *lane = f(*lane);
    }
    out
}

/// Combine `a` and `b` lane by lane with `f`.
#[inline]
pub(crate) fn zip<T: Copy, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> T) -> [T; N] {
    let mut out = a;
    for (lane, rhs) in out.iter_mut().zip(b) {
        *lane = f(*lane, rhs);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_applies_per_lane() {
        let out = map([1u16, 2, 3, 4], |x| x * 2);
        assert_eq!(out, [2, 4, 6, 8]);
    }

    #[test]
    fn test_zip_pairs_lanes() {
        let out = zip([1u8, 2, 3], [10, 20, 30], |a, b| a + b);
        assert_eq!(out, [11, 22, 33]);
    }
}
