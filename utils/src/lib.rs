mod angles;
mod vec3d;

pub use angles::normalize_radians;
pub use vec3d::{OutputMode, Vec3D};
