//! Cartesian output of a propagation call. Owned by the caller, no
//! persistent identity; every call to propagate builds a fresh one.

use orrery_utils::Vec3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    /// position in the primary's inertial frame, meters.
    pub position: Vec3D,
    /// velocity in the primary's inertial frame, m/s.
    pub velocity: Vec3D,
}

impl StateVector {
    pub fn specific_energy(&self, mu: f64) -> f64 {
        //! v^2/2 - mu/r. For a valid two-body state this equals -mu/(2a)
        //! regardless of where on the orbit the body sits.
        let speed = self.velocity.magnitude();
        speed * speed / 2.0 - mu / self.position.magnitude()
    }

    pub fn angular_momentum(&self) -> Vec3D {
        //! specific angular momentum r x v. Constant along a two-body orbit
        //! and normal to the orbital plane.
        self.position.cross(&self.velocity)
    }
}
