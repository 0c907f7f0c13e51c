// src/math/geometry/bezier/interpolation.rs

use super::{path::BezierPath, tridiagonal::solve_first_control_points};
use crate::math::{error::*, types::*};
use tracing::debug;

/// Mindestanzahl an Knoten für eine Interpolation
pub const MIN_KNOTS: usize = 2;

/// Kontroll-Handles für eine Knotenfolge.
///
/// Index `i` gehört zum Segment zwischen Knoten `i` und Knoten `i + 1`; beide Listen
/// haben daher `knoten - 1` Einträge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlHandles<P> {
    pub first: Vec<P>,
    pub second: Vec<P>,
}

impl<P: CurvePoint> ControlHandles<P> {
    /// Anzahl der Segmente
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Verzahnt Knoten und Handles zu `K0, F0, S0, K1, F1, S1, ..., Kn`, dem Layout
    /// von [`BezierPath`].
    pub fn interleave(&self, knots: &[P]) -> MathResult<Vec<P>> {
        let segments = self.len();
        if self.second.len() != segments {
            return Err(MathError::invalid_argument(
                "handles",
                format!(
                    "{} first handles but {} second handles",
                    segments,
                    self.second.len()
                ),
            ));
        }
        if knots.len() != segments + 1 {
            return Err(MathError::invalid_argument(
                "knots",
                format!(
                    "expected {} knots for {} segments, got {}",
                    segments + 1,
                    segments,
                    knots.len()
                ),
            ));
        }

        let mut points = Vec::with_capacity(segments * 3 + 1);
        for ((knot, first), second) in knots.iter().zip(&self.first).zip(&self.second) {
            points.push(*knot);
            points.push(*first);
            points.push(*second);
        }
        points.extend(knots.last());
        Ok(points)
    }
}

/// Berechnet die Kontroll-Handles, mit denen eine kubische Bézier-Kurve exakt durch alle
/// `knots` läuft.
///
/// Die ersten Handles folgen aus einem tridiagonalen System, das an inneren Knoten
/// stetige erste und zweite Ableitungen erzwingt (natürliche Randbedingungen an den
/// Enden). Die zweiten Handles ergeben sich daraus direkt. Bei genau zwei Knoten
/// entsteht eine gerade Strecke.
pub fn compute_curve_control_points<P: CurvePoint>(knots: &[P]) -> MathResult<ControlHandles<P>> {
    if knots.len() < MIN_KNOTS {
        return Err(MathError::InsufficientKnots {
            expected: MIN_KNOTS,
            actual: knots.len(),
        });
    }

    let segments = knots.len() - 1;

    if segments == 1 {
        // 3·P1 = 2·P0 + P3
        let first = (knots[0] * 2.0 + knots[1]) / 3.0;
        // P2 = 2·P1 - P0
        let second = first * 2.0 - knots[0];
        return Ok(ControlHandles {
            first: vec![first],
            second: vec![second],
        });
    }

    let mut rhs = Vec::with_capacity(segments);
    rhs.push(knots[0] + knots[1] * 2.0);
    for i in 1..segments - 1 {
        rhs.push(knots[i] * 4.0 + knots[i + 1] * 2.0);
    }
    rhs.push((knots[segments - 1] * 8.0 + knots[segments]) / 2.0);

    let first = solve_first_control_points(&rhs);

    let second = (0..segments)
        .map(|i| {
            if i < segments - 1 {
                knots[i + 1] * 2.0 - first[i + 1]
            } else {
                (knots[segments] + first[segments - 1]) / 2.0
            }
        })
        .collect();

    debug!(
        "Computed control handles for {} knots ({} segments)",
        knots.len(),
        segments
    );

    Ok(ControlHandles { first, second })
}

/// Strategie, aus einer Knotenfolge die Kontroll-Handles einer Bézier-Kurve abzuleiten
pub trait CurveFitter {
    /// Berechnet die Handles für `knots`
    fn fit<P: CurvePoint>(&self, knots: &[P]) -> MathResult<ControlHandles<P>>;

    /// Berechnet die Handles und setzt daraus den vollständigen Pfad zusammen
    fn fit_path<P: CurvePoint>(&self, knots: &[P]) -> MathResult<BezierPath<P>> {
        let handles = self.fit(knots)?;
        BezierPath::from_control_points(&handles.interleave(knots)?)
    }
}

/// Interpolierender Fitter: die Kurve läuft exakt durch jeden Knoten.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnotInterpolator;

impl CurveFitter for KnotInterpolator {
    fn fit<P: CurvePoint>(&self, knots: &[P]) -> MathResult<ControlHandles<P>> {
        compute_curve_control_points(knots)
    }
}
