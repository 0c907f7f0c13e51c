// src/math/types/point.rs
use super::*;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Gemeinsame Schnittstelle für Kurvenpunkte (2D und 3D).
///
/// Alle Kurven-Berechnungen laufen komponentenweise über die Vektor-Operatoren,
/// daher reicht dieser Trait für Bézier-Auswertung und den Kontrollpunkt-Solver
/// gleichermaßen.
pub trait CurvePoint:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    /// Ursprung
    const ZERO: Self;

    /// Euklidischer Abstand zu `other`
    fn distance_to(self, other: Self) -> f32;
}

impl CurvePoint for Vec2 {
    const ZERO: Self = Vec2::ZERO;

    fn distance_to(self, other: Self) -> f32 {
        self.distance(other)
    }
}

impl CurvePoint for Vec3 {
    const ZERO: Self = Vec3::ZERO;

    fn distance_to(self, other: Self) -> f32 {
        self.distance(other)
    }
}
