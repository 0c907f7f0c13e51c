// src/math/geometry/bezier/segment.rs

use super::sampling::SampledPoint;
use crate::math::{error::*, types::*};

/// Ein einzelnes kubisches Bézier-Segment `(p0, p1, p2, p3)`.
///
/// `p0` und `p3` liegen auf der Kurve, `p1` und `p2` sind die Kontroll-Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment<P: CurvePoint> {
    pub p0: P,
    pub p1: P,
    pub p2: P,
    pub p3: P,
}

impl<P: CurvePoint> CubicSegment<P> {
    pub fn new(p0: P, p1: P, p2: P, p3: P) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Erstellt ein Segment aus genau vier aufeinanderfolgenden Kontrollpunkten
    pub fn from_slice(points: &[P]) -> Option<Self> {
        match points {
            [p0, p1, p2, p3] => Some(Self::new(*p0, *p1, *p2, *p3)),
            _ => None,
        }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    ///
    /// `t` wird nicht geklemmt, Werte außerhalb von [0, 1] extrapolieren das Polynom.
    pub fn position(&self, t: f32) -> P {
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;
        let uuu = uu * u;
        let ttt = tt * t;

        self.p0 * uuu + self.p1 * (3.0 * uu * t) + self.p2 * (3.0 * u * tt) + self.p3 * ttt
    }

    /// Erste Ableitung nach `t`, nicht normalisiert.
    ///
    /// B'(t) = -3·P0·(1-t)² + 3·P1·(1-4t+3t²) + 3·P2·(2t-3t²) + 3·P3·t²
    pub fn tangent(&self, t: f32) -> P {
        let nt = 1.0 - t;
        let tt = t * t;

        self.p0 * (-3.0 * nt * nt)
            + self.p1 * (3.0 * (1.0 - 4.0 * t + 3.0 * tt))
            + self.p2 * (3.0 * (2.0 * t - 3.0 * tt))
            + self.p3 * (3.0 * tt)
    }

    /// Position und Tangente an Parameter `t`
    pub fn sample(&self, t: f32) -> SampledPoint<P> {
        SampledPoint::new(self.position(t), self.tangent(t))
    }

    /// Länge des Segments als Polylinie über `steps + 1` Stützstellen
    pub fn length(&self, steps: usize) -> MathResult<f32> {
        if steps == 0 {
            return Err(MathError::invalid_argument(
                "steps",
                "must be positive and nonzero",
            ));
        }

        Ok(self.polyline_length(steps))
    }

    /// Parameter der Stützstelle `step` von `steps`; die erste Stützstelle liegt exakt bei 0.
    pub(crate) fn step_parameter(step: usize, steps: usize) -> f32 {
        if step == 0 {
            0.0
        } else {
            step as f32 / steps as f32
        }
    }

    /// Erwartet `steps > 0`, die Prüfung liegt beim Aufrufer.
    pub(crate) fn polyline_length(&self, steps: usize) -> f32 {
        let mut length = 0.0;
        let mut last_point = self.position(0.0);

        for step in 1..=steps {
            let point = self.position(Self::step_parameter(step, steps));
            length += last_point.distance_to(point);
            last_point = point;
        }

        length
    }
}
