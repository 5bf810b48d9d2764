//! angle bookkeeping shared by the propagator and its tests.

use std::f64::consts::TAU;

pub fn normalize_radians(angle: f64) -> f64 {
    //! wraps any finite angle into [0, 2*pi).
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid of a tiny negative rounds up to exactly TAU; fold it back.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn already_in_range() {
        assert_eq!(normalize_radians(1.25), 1.25)
    }

    #[test]
    fn wraps_positive() {
        assert!((normalize_radians(3.0 * TAU + 1.0) - 1.0).abs() < 1e-12)
    }

    #[test]
    fn wraps_negative() {
        assert!((normalize_radians(-PI) - PI).abs() < 1e-12)
    }

    #[test]
    fn tiny_negative_folds_to_zero() {
        assert_eq!(normalize_radians(-1e-18), 0.0)
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(normalize_radians(0.0), 0.0)
    }
}
