pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::bezier::{
            BezierPath, ControlHandles, CubicSegment, CurveFitter, DEFAULT_LENGTH_STEPS,
            KnotInterpolator, SampledPoint, SamplingConfig, compute_curve_control_points,
        },
        types::*,
    };
}
