// src/math/geometry/bezier/sampling.rs

use crate::math::error::*;
use tracing::warn;

/// Abgetasteter Kurvenpunkt: Position plus (nicht normalisierte) Tangente.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SampledPoint<P> {
    pub position: P,
    pub tangent: P,
}

impl<P> SampledPoint<P> {
    pub fn new(position: P, tangent: P) -> Self {
        Self { position, tangent }
    }
}

/// Fortschritt der Abtastung für den Cutoff-Vergleich.
///
/// Der Umweg über den Faktor 100 legt fest, an welchem Sample abgebrochen wird; nicht
/// durch `current_point / total_points` ersetzen.
pub fn cutoff_progress(current_point: usize, total_points: usize) -> f32 {
    ((current_point as f32 * 100.0) / total_points as f32) / 100.0
}

/// Klemmt einen Cutoff auf [0, 1]. NaN ist kein gültiger Cutoff.
pub fn clamp_cutoff(cutoff: f32) -> MathResult<f32> {
    if cutoff.is_nan() {
        return Err(MathError::invalid_argument("cutoff", "must not be NaN"));
    }

    let clamped = cutoff.clamp(0.0, 1.0);
    if clamped != cutoff {
        warn!("Cutoff {} outside [0, 1], clamped to {}", cutoff, clamped);
    }
    Ok(clamped)
}

pub(crate) fn validate_samples_per_segment(samples_per_segment: usize) -> MathResult<()> {
    if samples_per_segment == 0 {
        return Err(MathError::invalid_argument(
            "samples_per_segment",
            "must be positive and nonzero",
        ));
    }
    Ok(())
}

/// Konfiguration für die Abtastung eines Bézier-Pfads.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Anzahl der Unterteilungen pro Segment (ergibt `samples_per_segment + 1` Samples pro Segment)
    pub samples_per_segment: usize,
    /// Optionaler Abbruch nach einem Anteil der Kurve (wird auf [0, 1] geklemmt)
    pub cutoff: Option<f32>,
    /// Entfernt die doppelten Samples an den Segmentübergängen
    pub deduplicate_joints: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: 10,
            cutoff: None,
            deduplicate_joints: false,
        }
    }
}

impl SamplingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples_per_segment(mut self, samples_per_segment: usize) -> Self {
        self.samples_per_segment = samples_per_segment;
        self
    }

    pub fn with_cutoff(mut self, cutoff: f32) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn deduplicate_joints(mut self, deduplicate: bool) -> Self {
        self.deduplicate_joints = deduplicate;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        validate_samples_per_segment(self.samples_per_segment)?;

        if let Some(cutoff) = self.cutoff {
            if cutoff.is_nan() {
                return Err(MathError::invalid_argument("cutoff", "must not be NaN"));
            }
            if self.deduplicate_joints {
                return Err(MathError::invalid_argument(
                    "cutoff",
                    "cannot be combined with deduplicated joints",
                ));
            }
        }
        Ok(())
    }
}
