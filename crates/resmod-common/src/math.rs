//! Linear remapping helpers.

/// Interpolate between `a` and `b` by `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `v` between `a` and `b`, as a fraction.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    (v - a) / (b - a)
}

/// Map `v` from the range `fa..fb` onto `ta..tb`.
#[inline]
pub fn range(fa: f32, fb: f32, ta: f32, tb: f32, v: f32) -> f32 {
    lerp(ta, tb, inverse_lerp(fa, fb, v))
}

/// Round to the nearest integer, breaking exact halves toward the even one.
pub fn round_half_even(v: f32) -> f32 {
    let rounded = v.round();
    if (v - v.trunc()).abs() == 0.5 {
        2.0 * (v / 2.0).round()
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(-7.0, 6.0, -7.0), 0.0);
        assert_eq!(inverse_lerp(-7.0, 6.0, 6.0), 1.0);
    }

    #[test]
    fn test_range_reversed_target() {
        assert_eq!(range(-7.0, 6.0, 1.0, 0.0, -7.0), 1.0);
        assert_eq!(range(-7.0, 6.0, 1.0, 0.0, 6.0), 0.0);
        assert_eq!(range(1.0, 0.0, -7.0, 6.0, 0.0), 6.0);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-0.5), 0.0);
        assert_eq!(round_half_even(-1.5), -2.0);
        assert_eq!(round_half_even(-2.4), -2.0);
        assert_eq!(round_half_even(3.6), 4.0);
    }
}
