// src/math/geometry/bezier/mod.rs

// Stückweise kubische Bézier-Kurven und der Solver für interpolierende Kontrollpunkte
pub mod interpolation;
pub mod path;
pub mod sampling;
pub mod segment;
pub mod tridiagonal;

pub use interpolation::*;
pub use path::*;
pub use sampling::*;
pub use segment::*;
pub use tridiagonal::solve_first_control_points;
