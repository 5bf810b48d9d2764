//! Classical (Keplerian) orbital elements and their validation.
//! An element set is constructed once per body and read-only thereafter;
//! all propagation state is derived fresh on each call.

use orrery_utils::normalize_radians;
use std::f64::consts::TAU;

/// Rejected element value. Raised at construction, never during propagation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// only closed ellipses are supported, so e must sit in [0, 1).
    BadEccentricity(f64),
    BadSemiMajorAxis(f64),
    BadGravitationalParameter(f64),
}

/// Six classical elements plus the epoch they are quoted at and the
/// gravitational parameter of the primary. Angles in radians, distances in
/// meters, times in seconds since the reference instant (J2000 for the
/// built-in table).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node: f64,
    pub arg_periapsis: f64,
    pub mean_anomaly_epoch: f64,
    pub epoch: f64,
    pub mu: f64,
}

impl OrbitalElements {
    #[allow(clippy::too_many_arguments)] // one argument per element; a builder would just obscure the almanac columns.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        ascending_node: f64,
        arg_periapsis: f64,
        mean_anomaly_epoch: f64,
        epoch: f64,
        mu: f64,
    ) -> Result<Self, DomainError> {
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(DomainError::BadEccentricity(eccentricity));
        }
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(DomainError::BadSemiMajorAxis(semi_major_axis));
        }
        if !mu.is_finite() || mu <= 0.0 {
            return Err(DomainError::BadGravitationalParameter(mu));
        }

        Ok(Self::new_trusted(
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node,
            arg_periapsis,
            mean_anomaly_epoch,
            epoch,
            mu,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn new_trusted(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        ascending_node: f64,
        arg_periapsis: f64,
        mean_anomaly_epoch: f64,
        epoch: f64,
        mu: f64,
    ) -> Self {
        //! const constructor to be used with known-good magic numbers only,
        //! so compile-time body tables can skip the bounds checks.
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node,
            arg_periapsis,
            mean_anomaly_epoch,
            epoch,
            mu,
        }
    }

    pub fn mean_motion(&self) -> f64 {
        //! average angular rate n = sqrt(mu / a^3), radians per second.
        (self.mu / self.semi_major_axis.powi(3)).sqrt()
    }

    pub fn period(&self) -> f64 {
        //! one full revolution, T = 2*pi / n.
        TAU / self.mean_motion()
    }

    pub fn mean_anomaly_at(&self, time: f64) -> f64 {
        //! mean anomaly at an arbitrary time, wrapped into [0, 2*pi).
        normalize_radians(self.mean_anomaly_epoch + self.mean_motion() * (time - self.epoch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MU_SUN;

    const AU: f64 = 1.495978707e11;

    pub fn earth_like() -> OrbitalElements {
        //! the concrete scenario elements used across the test suite.
        OrbitalElements::new(1.496e11, 0.0167, 0.0, 0.0, 0.0, 0.0, 0.0, MU_SUN).unwrap()
    }

    #[test]
    fn rejects_parabolic_and_hyperbolic() {
        for e in [1.0, 1.5, f64::INFINITY, f64::NAN, -0.1] {
            assert!(
                matches!(
                    OrbitalElements::new(AU, e, 0.0, 0.0, 0.0, 0.0, 0.0, MU_SUN),
                    Err(DomainError::BadEccentricity(_))
                ),
                "e = {e} should have been rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_axis_and_mu() {
        assert!(matches!(
            OrbitalElements::new(0.0, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, MU_SUN),
            Err(DomainError::BadSemiMajorAxis(_))
        ));
        assert!(matches!(
            OrbitalElements::new(-AU, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, MU_SUN),
            Err(DomainError::BadSemiMajorAxis(_))
        ));
        assert!(matches!(
            OrbitalElements::new(AU, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            Err(DomainError::BadGravitationalParameter(_))
        ));
    }

    #[test]
    fn earth_period_is_a_year() {
        let days = earth_like().period() / 86400.0;
        assert!(
            (days - 365.25).abs() < 0.5,
            "expected ~365.25 day period, got {days:.3}"
        );
    }

    #[test]
    fn mean_anomaly_wraps() {
        let elements = earth_like();
        let after_one_period = elements.mean_anomaly_at(elements.period());
        assert!(after_one_period < 1e-6 || TAU - after_one_period < 1e-6);

        // negative times are valid too and must stay in range.
        let before_epoch = elements.mean_anomaly_at(-1.0e7);
        assert!((0.0..TAU).contains(&before_epoch));
    }
}
