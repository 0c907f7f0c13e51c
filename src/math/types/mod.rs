// src/math/types/mod.rs
pub mod point;

pub use point::*;

// Re-export der verwendeten Vektor-Typen
pub use bevy_math::{Vec2, Vec3};

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Vec2;
pub type Point3D = Vec3;
