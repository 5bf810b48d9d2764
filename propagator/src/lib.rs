pub mod bodies;
pub mod elements;
pub mod kepler;
pub mod state;

pub use elements::{DomainError, OrbitalElements};
pub use kepler::{solve_kepler, ConvergenceError, SampleError};
pub use state::StateVector;

/// GM of the Sun in m^3/s^2. Shared by every entry in the built-in body table.
pub const MU_SUN: f64 = 1.32712440041e20;
