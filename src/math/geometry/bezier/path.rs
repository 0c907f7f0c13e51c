// src/math/geometry/bezier/path.rs

use super::{
    interpolation::{CurveFitter, KnotInterpolator},
    sampling::{
        SampledPoint, SamplingConfig, clamp_cutoff, cutoff_progress, validate_samples_per_segment,
    },
    segment::CubicSegment,
};
use crate::math::{error::*, types::*};
use tracing::{debug, trace};

/// Standard-Stützstellenzahl pro Segment für [`BezierPath::approximate_length`]
pub const DEFAULT_LENGTH_STEPS: usize = 10;

/// Stückweise kubische Bézier-Kurve über einer flachen Kontrollpunktliste.
///
/// Layout der Kontrollpunkte: `P0, H1, H2, P1, H1, H2, P2, ...`. Jedes Segment besteht aus
/// vier Punkten im Abstand 3, aufeinanderfolgende Segmente teilen sich einen Endpunkt.
/// Gültige Längen sind daher `3 * segmente + 1`.
///
/// Nach der Konfiguration sind alle Abfragen reine Lesezugriffe (`&self`); ein Pfad kann
/// also ohne Synchronisation von mehreren Threads gleichzeitig abgetastet werden.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierPath<P: CurvePoint> {
    control_points: Vec<P>,
    segment_count: usize,
}

impl<P: CurvePoint> Default for BezierPath<P> {
    fn default() -> Self {
        Self {
            control_points: Vec::new(),
            segment_count: 0,
        }
    }
}

impl<P: CurvePoint> BezierPath<P> {
    /// Leerer Pfad ohne Segmente
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Pfad aus einer Kopie der Kontrollpunkte
    pub fn from_control_points(points: &[P]) -> MathResult<Self> {
        let mut path = Self::new();
        path.set_control_points(points)?;
        Ok(path)
    }

    /// Erstellt einen Pfad, der exakt durch alle `knots` verläuft.
    pub fn through_knots(knots: &[P]) -> MathResult<Self> {
        KnotInterpolator.fit_path(knots)
    }

    /// Ersetzt die Kontrollpunkte. Bei ungültiger Anzahl bleibt der Pfad unverändert.
    pub fn set_control_points(&mut self, points: &[P]) -> MathResult<()> {
        let segment_count = segment_count_for(points.len())?;

        self.control_points.clear();
        self.control_points.extend_from_slice(points);
        self.segment_count = segment_count;

        debug!(
            "Bezier path configured: {} control points, {} segments",
            points.len(),
            segment_count
        );
        Ok(())
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Hat der Pfad keine Segmente?
    pub fn is_empty(&self) -> bool {
        self.segment_count == 0
    }

    /// Segment `index` oder `None`, falls es nicht existiert
    pub fn segment(&self, index: usize) -> Option<CubicSegment<P>> {
        if index >= self.segment_count {
            return None;
        }
        let start = index * 3;
        CubicSegment::from_slice(&self.control_points[start..start + 4])
    }

    /// Iteriert über alle Segmente in Kurvenreihenfolge
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment<P>> + '_ {
        self.control_points
            .windows(4)
            .step_by(3)
            .filter_map(CubicSegment::from_slice)
    }

    /// Tastet jedes Segment an `samples_per_segment + 1` gleichverteilten Parametern ab.
    ///
    /// Liefert genau `segment_count * (samples_per_segment + 1)` Samples. Jeder
    /// Segmentübergang erscheint zweimal: als letztes Sample (t = 1) eines Segments und als
    /// erstes Sample (t = 0) des nächsten. Ohne Duplikate: [`Self::sample_points_deduplicated`].
    pub fn sample_points(&self, samples_per_segment: usize) -> MathResult<Vec<SampledPoint<P>>> {
        validate_samples_per_segment(samples_per_segment)?;

        let capacity = samples_per_segment
            .checked_add(1)
            .and_then(|per_segment| self.segment_count.checked_mul(per_segment));
        let mut points = Vec::with_capacity(capacity.unwrap_or(0));
        for segment in self.segments() {
            for step in 0..=samples_per_segment {
                let t = CubicSegment::<P>::step_parameter(step, samples_per_segment);
                points.push(segment.sample(t));
            }
        }

        trace!("Sampled {} points from {} segments", points.len(), self.segment_count);
        Ok(points)
    }

    /// Wie [`Self::sample_points`], bricht aber nach dem ersten Sample ab, dessen
    /// Fortschritt `cutoff` erreicht.
    ///
    /// `cutoff` wird auf [0, 1] geklemmt: 0 liefert nur den Startpunkt, 1 endet auf
    /// demselben Sample wie die vollständige Abtastung.
    pub fn sample_points_with_cutoff(
        &self,
        samples_per_segment: usize,
        cutoff: f32,
    ) -> MathResult<Vec<SampledPoint<P>>> {
        validate_samples_per_segment(samples_per_segment)?;
        let cutoff = clamp_cutoff(cutoff)?;

        let total_points = samples_per_segment.saturating_mul(self.segment_count);
        let mut points = Vec::new();

        'segments: for (curve, segment) in self.segments().enumerate() {
            for step in 0..=samples_per_segment {
                let t = CubicSegment::<P>::step_parameter(step, samples_per_segment);
                points.push(segment.sample(t));

                let current_point = curve
                    .saturating_mul(samples_per_segment)
                    .saturating_add(step);
                if cutoff_progress(current_point, total_points) >= cutoff {
                    break 'segments;
                }
            }
        }

        trace!(
            "Sampled {} points with cutoff {} from {} segments",
            points.len(),
            cutoff,
            self.segment_count
        );
        Ok(points)
    }

    /// Abtastung ohne doppelte Übergangspunkte: `segment_count * samples_per_segment + 1`
    /// Samples (keine bei leerem Pfad).
    ///
    /// Am Übergang wird das Sample des vorherigen Segments (t = 1) behalten, die Tangente
    /// dort ist also die Endtangente des vorherigen Segments.
    pub fn sample_points_deduplicated(
        &self,
        samples_per_segment: usize,
    ) -> MathResult<Vec<SampledPoint<P>>> {
        validate_samples_per_segment(samples_per_segment)?;

        let capacity = self
            .segment_count
            .checked_mul(samples_per_segment)
            .and_then(|count| count.checked_add(1));
        let mut points = Vec::with_capacity(capacity.unwrap_or(0));
        for (curve, segment) in self.segments().enumerate() {
            let first_step = if curve == 0 { 0 } else { 1 };
            for step in first_step..=samples_per_segment {
                let t = CubicSegment::<P>::step_parameter(step, samples_per_segment);
                points.push(segment.sample(t));
            }
        }

        Ok(points)
    }

    /// Abtastung gemäß `config`
    pub fn sample(&self, config: &SamplingConfig) -> MathResult<Vec<SampledPoint<P>>> {
        config.validate()?;

        match config.cutoff {
            Some(cutoff) => self.sample_points_with_cutoff(config.samples_per_segment, cutoff),
            None if config.deduplicate_joints => {
                self.sample_points_deduplicated(config.samples_per_segment)
            }
            None => self.sample_points(config.samples_per_segment),
        }
    }

    /// Näherung der Bogenlänge als Polylinie mit `steps + 1` Stützstellen pro Segment.
    ///
    /// Summiert werden nur Strecken innerhalb eines Segments.
    pub fn length(&self, steps: usize) -> MathResult<f32> {
        if steps == 0 {
            return Err(MathError::invalid_argument(
                "steps",
                "must be positive and nonzero",
            ));
        }

        Ok(self
            .segments()
            .map(|segment| segment.polyline_length(steps))
            .sum())
    }

    /// [`Self::length`] mit [`DEFAULT_LENGTH_STEPS`]
    pub fn approximate_length(&self) -> f32 {
        // DEFAULT_LENGTH_STEPS > 0, der Fehlerfall tritt nicht ein
        self.length(DEFAULT_LENGTH_STEPS).unwrap_or_default()
    }
}

/// Segmentanzahl für `count` Kontrollpunkte; `count` muss die Form `3k + 1` haben.
pub fn segment_count_for(count: usize) -> MathResult<usize> {
    if count == 0 || (count - 1) % 3 != 0 {
        return Err(MathError::InvalidControlPointCount { count });
    }
    Ok((count - 1) / 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::{comparison, constants};
    use approx::assert_relative_eq;

    /// Zwei Segmente: ein Bogen und eine S-Kurve
    fn two_segment_path() -> BezierPath<Point2D> {
        BezierPath::from_control_points(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 2.0),
            Point2D::new(3.0, 2.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(5.0, -2.0),
            Point2D::new(6.0, 3.0),
            Point2D::new(8.0, 1.0),
        ])
        .unwrap()
    }

    fn straight_path() -> BezierPath<Point3D> {
        BezierPath::from_control_points(&[
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 2.0, 2.0),
            Point3D::new(2.0, 4.0, 4.0),
            Point3D::new(3.0, 6.0, 6.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(two_segment_path().segment_count(), 2);
        assert_eq!(straight_path().segment_count(), 1);

        let single = BezierPath::from_control_points(&[Point2D::new(1.0, 1.0)]).unwrap();
        assert_eq!(single.segment_count(), 0);
        assert!(single.is_empty());
    }

    #[test]
    fn test_invalid_control_point_count() {
        for count in [0, 2, 3, 5, 6, 8] {
            let points = vec![Point2D::new(0.0, 0.0); count];
            assert_eq!(
                BezierPath::from_control_points(&points),
                Err(MathError::InvalidControlPointCount { count })
            );
        }
    }

    #[test]
    fn test_failed_update_keeps_previous_points() {
        let mut path = two_segment_path();
        let before = path.clone();

        let result = path.set_control_points(&[Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        assert!(result.is_err());
        assert_eq!(path, before);
    }

    #[test]
    fn test_set_control_points_copies_input() {
        let mut points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(3.0, 0.0),
        ];
        let path = BezierPath::from_control_points(&points).unwrap();
        points[3] = Point2D::new(100.0, 0.0);

        assert_eq!(path.control_points()[3], Point2D::new(3.0, 0.0));
    }

    #[test]
    fn test_segment_access() {
        let path = two_segment_path();
        let second = path.segment(1).unwrap();
        assert_eq!(second.p0, Point2D::new(4.0, 0.0));
        assert_eq!(second.p3, Point2D::new(8.0, 1.0));
        assert!(path.segment(2).is_none());

        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].p3, segments[1].p0);
    }

    #[test]
    fn test_sample_count() {
        let path = two_segment_path();
        for samples in [1, 2, 5, 10, 33] {
            let points = path.sample_points(samples).unwrap();
            assert_eq!(points.len(), path.segment_count() * (samples + 1));
        }

        assert!(BezierPath::<Point2D>::new().sample_points(8).unwrap().is_empty());
    }

    #[test]
    fn test_sample_points_hit_segment_endpoints() {
        let path = two_segment_path();
        let points = path.sample_points(4).unwrap();

        assert_eq!(points[0].position, Point2D::new(0.0, 0.0));
        assert_eq!(points[4].position, Point2D::new(4.0, 0.0));
        // Übergang doppelt: Ende von Segment 0 und Start von Segment 1
        assert_eq!(points[5].position, Point2D::new(4.0, 0.0));
        assert_eq!(points[9].position, Point2D::new(8.0, 1.0));
    }

    #[test]
    fn test_sample_points_rejects_zero_samples() {
        let path = two_segment_path();
        assert!(matches!(
            path.sample_points(0),
            Err(MathError::InvalidArgument {
                parameter: "samples_per_segment",
                ..
            })
        ));
        assert!(path.sample_points_with_cutoff(0, 0.5).is_err());
        assert!(path.sample_points_deduplicated(0).is_err());
    }

    #[test]
    fn test_cutoff_full_curve() {
        let path = two_segment_path();
        let full = path.sample_points(6).unwrap();
        let cut = path.sample_points_with_cutoff(6, 1.0).unwrap();

        assert_eq!(cut.len(), full.len());
        assert_eq!(cut.last(), full.last());

        // Werte oberhalb von 1 werden geklemmt
        let clamped = path.sample_points_with_cutoff(6, 7.5).unwrap();
        assert_eq!(clamped, cut);
    }

    #[test]
    fn test_cutoff_zero_returns_start() {
        let path = two_segment_path();
        for cutoff in [0.0, -3.0] {
            let cut = path.sample_points_with_cutoff(6, cutoff).unwrap();
            assert_eq!(cut.len(), 1);
            assert_eq!(cut[0].position, Point2D::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_cutoff_half_stops_at_joint() {
        // 2 Segmente à 4 Schritte: Fortschritt 4/8 = 0.5 am Ende des ersten Segments
        let path = two_segment_path();
        let cut = path.sample_points_with_cutoff(4, 0.5).unwrap();

        assert_eq!(cut.len(), 5);
        assert_eq!(cut[4].position, Point2D::new(4.0, 0.0));
    }

    #[test]
    fn test_cutoff_is_prefix_of_full_sampling() {
        let path = two_segment_path();
        let full = path.sample_points(5).unwrap();
        for cutoff in [0.1, 0.3, 0.55, 0.9] {
            let cut = path.sample_points_with_cutoff(5, cutoff).unwrap();
            assert!(!cut.is_empty());
            assert_eq!(cut[..], full[..cut.len()]);
        }
    }

    #[test]
    fn test_cutoff_uses_scaled_progress() {
        // Fortschritt 1/3 über den Faktor 100 liegt knapp unter 1.0 / 3.0
        let path = straight_path();
        let cut = path.sample_points_with_cutoff(3, 1.0 / 3.0).unwrap();

        assert_eq!(cut.len(), 3);
        assert_eq!(cut[..], path.sample_points(3).unwrap()[..3]);
    }

    #[test]
    fn test_huge_sample_count_on_empty_path() {
        let single = BezierPath::from_control_points(&[Point2D::new(1.0, 1.0)]).unwrap();

        assert!(single.sample_points(usize::MAX).unwrap().is_empty());
        assert!(single.sample_points_deduplicated(usize::MAX).unwrap().is_empty());
        assert!(single.sample_points_with_cutoff(usize::MAX, 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_cutoff_rejects_nan() {
        let path = two_segment_path();
        assert!(path.sample_points_with_cutoff(4, f32::NAN).is_err());
    }

    #[test]
    fn test_deduplicated_sampling() {
        let path = two_segment_path();
        let points = path.sample_points_deduplicated(4).unwrap();

        assert_eq!(points.len(), 2 * 4 + 1);
        for pair in points.windows(2) {
            assert_ne!(pair[0].position, pair[1].position);
        }
        assert_eq!(points[4].position, Point2D::new(4.0, 0.0));
        assert_eq!(points[8].position, Point2D::new(8.0, 1.0));

        assert!(BezierPath::<Point2D>::new()
            .sample_points_deduplicated(4)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_sample_with_config() {
        let path = two_segment_path();

        let default = path.sample(&SamplingConfig::default()).unwrap();
        assert_eq!(default, path.sample_points(10).unwrap());

        let cut = path
            .sample(&SamplingConfig::new().with_samples_per_segment(4).with_cutoff(0.5))
            .unwrap();
        assert_eq!(cut, path.sample_points_with_cutoff(4, 0.5).unwrap());

        let dedup = path
            .sample(&SamplingConfig::new().deduplicate_joints(true))
            .unwrap();
        assert_eq!(dedup.len(), 2 * 10 + 1);
    }

    #[test]
    fn test_straight_length_is_exact() {
        let path = straight_path();
        for steps in [1, 3, 10, 64] {
            assert_relative_eq!(
                path.length(steps).unwrap(),
                9.0,
                epsilon = constants::EPSILON_LOOSE
            );
        }
    }

    #[test]
    fn test_length_rejects_zero_steps() {
        assert!(matches!(
            two_segment_path().length(0),
            Err(MathError::InvalidArgument { parameter: "steps", .. })
        ));
    }

    #[test]
    fn test_length_sums_segments() {
        let path = two_segment_path();
        let per_segment: f32 = path
            .segments()
            .map(|segment| segment.length(16).unwrap())
            .sum();
        assert_relative_eq!(path.length(16).unwrap(), per_segment);
    }

    #[test]
    fn test_length_converges_with_refinement() {
        let path = two_segment_path();
        let mut previous = 0.0;
        for steps in [1, 2, 4, 8, 16, 32] {
            let length = path.length(steps).unwrap();
            // Verfeinerte Polylinien sind nie kürzer (Dreiecksungleichung)
            assert!(length + constants::EPSILON_LOOSE >= previous);
            previous = length;
        }

        let fine = path.length(1024).unwrap();
        assert!(comparison::within_tolerance(path.length(256).unwrap(), fine, 1e-2));
    }

    #[test]
    fn test_approximate_length_uses_default_steps() {
        let path = two_segment_path();
        assert_eq!(
            path.approximate_length(),
            path.length(DEFAULT_LENGTH_STEPS).unwrap()
        );
        assert_eq!(BezierPath::<Point2D>::new().approximate_length(), 0.0);
    }

    #[test]
    fn test_through_knots_matches_fitter() {
        let knots = [
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(2.0, 1.0, -1.0),
            Point3D::new(4.0, -1.0, 3.0),
        ];
        assert_eq!(
            BezierPath::through_knots(&knots).unwrap(),
            KnotInterpolator.fit_path(&knots).unwrap()
        );
    }

    #[test]
    fn test_path_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BezierPath<Point2D>>();
        assert_send_sync::<BezierPath<Point3D>>();

        let path = two_segment_path();
        let expected = path.sample_points(8).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| path.sample_points(8).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
