//! basic 3D vector. Used for positions, velocities and the frame rotations
//! that carry a perifocal state into the inertial frame.

#[derive(Debug, Default, PartialEq, PartialOrd, Copy, Clone)]
pub struct Vec3D(pub f64, pub f64, pub f64);

impl Vec3D {
    pub fn new() -> Self {
        Self(0.0, 0.0, 0.0)
    }

    pub fn add(&self, other: &Self) -> Self {
        //! composes two vectors.
        Self(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }

    pub fn sub(&self, other: &Self) -> Self {
        //! subtract other from self.
        Self(self.0 - other.0, self.1 - other.1, self.2 - other.2)
    }

    pub fn magnitude(&self) -> f64 {
        //! returns the magnitude of the current vector e.g Vec3D(3, 4, 0).magnitude() == 5.
        (self.0 * self.0 + self.1 * self.1 + self.2 * self.2).sqrt()
    }

    pub fn scale(&self, scale_factor: f64) -> Self {
        //! scales the vector by a given magnitude.
        Self(
            self.0 * scale_factor,
            self.1 * scale_factor,
            self.2 * scale_factor,
        )
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }

    pub fn cross(&self, other: &Self) -> Self {
        //! right-handed cross product. Used for orbit normals / angular momentum.
        Self(
            self.1 * other.2 - self.2 * other.1,
            self.2 * other.0 - self.0 * other.2,
            self.0 * other.1 - self.1 * other.0,
        )
    }

    pub fn rotate_x(&self, angle: f64) -> Self {
        //! right-handed rotation about the x axis by angle radians.
        let (sin, cos) = angle.sin_cos();
        Self(
            self.0,
            self.1 * cos - self.2 * sin,
            self.1 * sin + self.2 * cos,
        )
    }

    pub fn rotate_z(&self, angle: f64) -> Self {
        //! right-handed rotation about the z axis by angle radians.
        let (sin, cos) = angle.sin_cos();
        Self(
            self.0 * cos - self.1 * sin,
            self.0 * sin + self.1 * cos,
            self.2,
        )
    }
}

/// selects which bodies a driver loop prints rows for.
pub enum OutputMode {
    Single(usize),
    All,
}
