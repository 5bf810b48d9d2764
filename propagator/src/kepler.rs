//! Kepler's equation and the element-to-state conversion. This file is the
//! whole propagation path: solve M = E - e*sin(E) for E, recover the true
//! anomaly and radius, build the perifocal state and rotate it into the
//! primary's inertial frame.

use crate::elements::OrbitalElements;
use crate::state::StateVector;
use orrery_utils::Vec3D;

/// Newton iteration stops once the eccentric-anomaly step falls below this, radians.
pub const KEPLER_TOLERANCE: f64 = 1e-10;
/// iteration budget. For e < 1 the solve converges in a handful of steps;
/// running out means the caller fed the solver something unphysical.
pub const KEPLER_MAX_ITERATIONS: u32 = 50;

/// Kepler solve ran out of its iteration budget. Not retried internally;
/// in practice this only happens for element sets that bypassed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceError {
    pub iterations: u32,
    /// residual M - (E - e*sin(E)) at the final iterate, radians.
    pub residual: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    /// a closed curve needs at least two samples.
    BadSampleCount(usize),
    Convergence(ConvergenceError),
}

impl From<ConvergenceError> for SampleError {
    fn from(value: ConvergenceError) -> Self {
        Self::Convergence(value)
    }
}

pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<f64, ConvergenceError> {
    //! Newton iteration on f(E) = E - e*sin(E) - M, seeded with E = M.
    let mut ecc_anomaly = mean_anomaly;

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        let step = residual / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= step;

        if step.abs() < KEPLER_TOLERANCE {
            return Ok(ecc_anomaly);
        }
    }

    Err(ConvergenceError {
        iterations: KEPLER_MAX_ITERATIONS,
        residual: mean_anomaly - (ecc_anomaly - eccentricity * ecc_anomaly.sin()),
    })
}

impl OrbitalElements {
    pub fn propagate(&self, target_time: f64) -> Result<StateVector, ConvergenceError> {
        //! state at an arbitrary time. Pure: same inputs, same output.
        let ecc_anomaly = solve_kepler(self.mean_anomaly_at(target_time), self.eccentricity)?;
        let e = self.eccentricity;

        // true anomaly and radius from the standard ellipse relations.
        let true_anomaly =
            ((1.0 - e * e).sqrt() * ecc_anomaly.sin()).atan2(ecc_anomaly.cos() - e);
        let semi_latus = self.semi_major_axis * (1.0 - e * e);
        let radius = semi_latus / (1.0 + e * true_anomaly.cos());

        // perifocal frame: x toward periapsis, z along the orbit normal.
        let position = Vec3D(
            radius * true_anomaly.cos(),
            radius * true_anomaly.sin(),
            0.0,
        );
        let speed_scale = (self.mu / semi_latus).sqrt();
        let velocity = Vec3D(
            -speed_scale * true_anomaly.sin(),
            speed_scale * (e + true_anomaly.cos()),
            0.0,
        );

        Ok(StateVector {
            position: self.perifocal_to_inertial(&position),
            velocity: self.perifocal_to_inertial(&velocity),
        })
    }

    pub fn sample_trajectory(&self, num_samples: usize) -> Result<Vec<Vec3D>, SampleError> {
        //! positions tracing one full period, sampled uniformly in mean
        //! anomaly (i.e. uniformly in time, at epoch + k*T/num_samples).
        //! The curve is implicitly closed; the caller joins last to first.
        if num_samples < 2 {
            return Err(SampleError::BadSampleCount(num_samples));
        }

        let period = self.period();
        let mut samples = Vec::with_capacity(num_samples);
        for k in 0..num_samples {
            let time = self.epoch + period * k as f64 / num_samples as f64;
            samples.push(self.propagate(time)?.position);
        }
        Ok(samples)
    }

    fn perifocal_to_inertial(&self, v: &Vec3D) -> Vec3D {
        // 3-1-3 Euler sequence: argument of periapsis, inclination, node.
        v.rotate_z(self.arg_periapsis)
            .rotate_x(self.inclination)
            .rotate_z(self.ascending_node)
    }
}
