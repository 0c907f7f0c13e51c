// src/math/utils.rs

/// Toleranzen für f32-Vergleiche
pub mod constants {
    /// Toleranz für direkt ausgewertete Kurvenpunkte
    pub const EPSILON: f32 = 1e-6;
    /// Toleranz für Ergebnisse, die durch mehrere f32-Rechenschritte laufen (Solver, Längen)
    pub const EPSILON_LOOSE: f32 = 1e-4;
}

pub mod comparison {
    use crate::math::types::CurvePoint;

    /// `|a - b| < tolerance`
    pub fn within_tolerance(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() < tolerance
    }

    /// Abstand zweier Kurvenpunkte kleiner als `tolerance`
    pub fn points_nearly_equal<P: CurvePoint>(a: P, b: P, tolerance: f32) -> bool {
        a.distance_to(b) < tolerance
    }
}
