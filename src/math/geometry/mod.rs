// src/math/geometry/mod.rs

// Deklaration der Geometriemodule
pub mod bezier;

// Re-Exporte für einen schnellen Zugriff auf die Kurven-Typen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::bezier::{
    BezierPath, ControlHandles, CubicSegment, CurveFitter, DEFAULT_LENGTH_STEPS,
    KnotInterpolator, MIN_KNOTS, SampledPoint, SamplingConfig, compute_curve_control_points,
};
