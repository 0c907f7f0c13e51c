//! Stückweise kubische Bézier-Kurven: Auswertung, Abtastung, Längen-Näherung und ein
//! Solver für Kontrollpunkte, mit denen die Kurve exakt durch vorgegebene Knoten läuft.
//!
//! ```
//! use bezier_path::math::prelude::*;
//!
//! let knots = [
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(2.0, 3.0),
//!     Point2D::new(5.0, 1.0),
//! ];
//! let path = BezierPath::through_knots(&knots)?;
//! let samples = path.sample_points(10)?;
//! assert_eq!(samples.len(), 2 * 11);
//! assert_eq!(samples[0].position, knots[0]);
//! # Ok::<(), MathError>(())
//! ```

pub mod math;

pub use math::prelude;
