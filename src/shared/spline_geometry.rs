//! Reine Geometrie-Funktionen für Kreisbogen-Segmente.
//!
//! Layer-neutral: kann von `core`, `app` und dem Renderer importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.
//!
//! Ein Bogen von `p0` nach `p1` ist durch seinen Halbwinkel `tau` bestimmt
//! (Winkel zwischen Sehne und Starttangente). Ein Punkt zum Parameter `u`
//! liegt in Richtung `rotate(v, (1−u)·tau)` im Abstand
//! `b·sin(u·tau)/sin(tau)` von `p0`, ohne Mittelpunkt oder Radius.

use crate::core::vector::Point2D;
use crate::core::SplineError;
use std::f64::consts::PI;

/// Unterhalb dieses Halbwinkels wird das Segment als Gerade behandelt.
pub const HALF_ANGLE_EPSILON: f64 = 1e-9;
/// Obergrenze für |tau|; bei π verschwindet `sin(tau)`.
pub const HALF_ANGLE_MAX: f64 = PI - 1e-6;

/// Berechnet einen Punkt auf dem Bogen mit vorzeichenbehaftetem Halbwinkel `tau`.
///
/// - `p0`: Startpunkt
/// - `v`: normierte Sehnenrichtung
/// - `b`: Sehnenlänge
/// - `u`: Parameter in [0, 1]
pub fn arc_point(p0: Point2D, v: Point2D, b: f64, u: f64, tau: f64) -> Point2D {
    let tau = tau.clamp(-HALF_ANGLE_MAX, HALF_ANGLE_MAX);
    if tau.abs() < HALF_ANGLE_EPSILON {
        return p0 + v * (b * u);
    }
    let phi = (1.0 - u) * tau;
    let fu = b * (u * tau).sin() / tau.sin();
    p0 + v.rotate_z(phi) * fu
}

/// Abtast-Parameter für Bogensegmente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSampling {
    /// Ziel-Bogenlänge pro Teilsegment
    pub resolution: f64,
    /// Minimale Anzahl Teilsegmente
    pub min_segments: usize,
    /// Maximale Anzahl Teilsegmente
    pub max_segments: usize,
}

impl ArcSampling {
    /// Erstellt Abtast-Parameter ohne Prüfung (siehe [`ArcSampling::validate`]).
    pub fn new(resolution: f64, min_segments: usize, max_segments: usize) -> Self {
        Self {
            resolution,
            min_segments,
            max_segments,
        }
    }

    /// Prüft, ob die Parameter eine endliche Abtastung ergeben.
    pub fn validate(&self) -> Result<(), SplineError> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(SplineError::invalid(format!(
                "Bogen-Auflösung muss positiv sein, erhalten: {}",
                self.resolution
            )));
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(SplineError::invalid(format!(
                "ungültiger Segmentbereich [{}, {}]",
                self.min_segments, self.max_segments
            )));
        }
        Ok(())
    }

    /// Anzahl Teilsegmente für einen Bogen mit Sehnenlänge `b` und Halbwinkel `tau`.
    ///
    /// Bogenlänge `2·tau·r` mit `r = b / (2·sin(tau))`, gerundet auf die
    /// Auflösung und auf [min, max] begrenzt.
    pub fn segments_for(&self, b: f64, tau: f64) -> usize {
        let tau = tau.abs().min(HALF_ANGLE_MAX);
        let arc_len = if tau < HALF_ANGLE_EPSILON {
            b
        } else {
            tau * b / tau.sin()
        };
        let n = (arc_len / self.resolution).round();
        if n.is_finite() && n > 0.0 {
            (n as usize).clamp(self.min_segments, self.max_segments)
        } else {
            self.min_segments
        }
    }
}

/// Tastet den Kreisbogen von `p0` nach `p1` ab.
///
/// `sgn` (±1) ist die Drehrichtung der Starttangente relativ zur Sehne.
/// Start- und Endpunkt werden exakt übernommen, nicht über die Formel berechnet.
pub fn generate_arc(
    p0: Point2D,
    p1: Point2D,
    tau: f64,
    sgn: f64,
    sampling: &ArcSampling,
) -> Vec<Point2D> {
    let chord = p1 - p0;
    let b = chord.length();
    let Some(v) = chord.try_normalize() else {
        return vec![p0, p1];
    };

    let n = sampling.segments_for(b, tau).max(1);
    let mut result = Vec::with_capacity(n + 1);
    result.push(p0);
    for i in 1..n {
        let u = i as f64 / n as f64;
        result.push(arc_point(p0, v, b, u, tau * sgn));
    }
    // Endpunkt immer exakt übernehmen
    result.push(p1);
    result
}

/// Gerade Verbindung als Fallback ohne gültige Tangenten.
pub fn straight_segment(p0: Point2D, p1: Point2D) -> Vec<Point2D> {
    vec![p0, p1]
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Point2D]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
