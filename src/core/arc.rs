//! Kreisbogen durch drei aufeinanderfolgende Kontrollpunkte.
//!
//! Die beiden Teilbögen `q0→q1` und `q1→q2` liegen auf demselben Kreis;
//! ihre Halbwinkel ergeben sich aus den Winkeln des Richtungsdreiecks.

use super::error::SplineError;
use super::vector::{clamped_acos, sign, PlanarVecExt, Point2D};
use crate::shared::spline_geometry::{generate_arc, ArcSampling};
use std::f64::consts::PI;

/// Relative Schwelle für |a × b| / (|a|·|b|), unterhalb der ein Tripel als kollinear gilt.
pub const COLLINEAR_EPSILON: f64 = 1e-9;

/// Segmentbereich für die Bogen-Visualisierung.
const DISPLAY_SEGMENTS_MIN: usize = 2;
const DISPLAY_SEGMENTS_MAX: usize = 200;

/// Aus einem Punkt-Tripel abgeleiteter Kreisbogen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub p0: Point2D,
    pub p1: Point2D,
    pub p2: Point2D,
    /// Normierte Tangente in `p0`
    pub t0: Point2D,
    /// Normierte Tangente in `p1`
    pub t1: Point2D,
    /// Normierte Tangente in `p2`
    pub t2: Point2D,
    /// Halbwinkel des Teilbogens `p0→p1`
    pub tau0: f64,
    /// Halbwinkel des Teilbogens `p1→p2`
    pub tau1: f64,
    /// Innenwinkel des Richtungsdreiecks bei `p0`, `p1`, `p2`
    pub theta: [f64; 3],
    pub radius: f64,
    /// Drehrichtung der Tangenten relativ zur Sehne (±1), `sign(−(a × b).z)`
    pub sgn: f64,
}

impl Arc {
    /// Konstruiert den Bogen durch `q0`, `q1`, `q2`.
    ///
    /// `index` ist der Index von `q0` und dient nur der Fehlermeldung.
    /// Kollineare oder zusammenfallende Punkte liefern `DegenerateGeometry`.
    pub fn from_triple(
        q0: Point2D,
        q1: Point2D,
        q2: Point2D,
        index: usize,
    ) -> Result<Self, SplineError> {
        let degenerate = || SplineError::DegenerateGeometry { index };

        let a_raw = q1 - q0;
        let b_raw = q2 - q1;
        let c_raw = q2 - q0;

        let axis_z = a_raw.cross_z(b_raw);
        let len = a_raw.length();

        let a = a_raw.try_normalize().ok_or_else(degenerate)?;
        let b = b_raw.try_normalize().ok_or_else(degenerate)?;
        let c = c_raw.try_normalize().ok_or_else(degenerate)?;

        // Sinus des Abknickwinkels zwischen a und b
        if (axis_z / (len * b_raw.length())).abs() <= COLLINEAR_EPSILON {
            return Err(degenerate());
        }

        let theta0 = clamped_acos(a.dot(c));
        let theta2 = clamped_acos(b.dot(c));
        let theta1 = PI - theta0 - theta2;

        // Über Kreuz: Sehnen-Tangenten-Winkel = gegenüberliegender Peripheriewinkel
        let tau0 = theta2;
        let tau1 = theta0;

        let sgn = sign(-axis_z);
        let t1 = b.rotate_z(sgn * tau1);
        let t0 = t1.mirror(a);
        let t2 = t1.mirror(b);

        let sin_tau0 = tau0.sin();
        if sin_tau0 <= COLLINEAR_EPSILON {
            return Err(degenerate());
        }
        let radius = len / (2.0 * sin_tau0);
        if !radius.is_finite() {
            return Err(degenerate());
        }

        Ok(Self {
            p0: q0,
            p1: q1,
            p2: q2,
            t0,
            t1,
            t2,
            tau0,
            tau1,
            theta: [theta0, theta1, theta2],
            radius,
            sgn,
        })
    }

    /// Teilbogen `p0→p1`.
    pub fn first_half(&self, sampling: &ArcSampling) -> Vec<Point2D> {
        generate_arc(self.p0, self.p1, self.tau0, self.sgn, sampling)
    }

    /// Teilbogen `p1→p2`.
    pub fn second_half(&self, sampling: &ArcSampling) -> Vec<Point2D> {
        generate_arc(self.p1, self.p2, self.tau1, self.sgn, sampling)
    }

    /// Abtastung des gesamten Bogens `p0→p1→p2` für die Visualisierung.
    pub fn sample(&self, resolution: f64) -> Vec<Point2D> {
        let sampling = ArcSampling::new(resolution, DISPLAY_SEGMENTS_MIN, DISPLAY_SEGMENTS_MAX);
        let mut pts = self.first_half(&sampling);
        pts.pop();
        pts.extend(self.second_half(&sampling));
        pts
    }
}
