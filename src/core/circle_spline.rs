//! Kreisbogen-Spline: Tangenten-Durchlauf über alle Punkt-Tripel und
//! Überblend-Durchlauf über alle Kanten des Kontrollpolygons.
//!
//! **Ablauf:** Topologie-Änderung → Bögen/Tangenten je Tripel → je Kante ein
//! Segment (Überblendung oder Teilbogen) → zusammenhängende Polyline.
//! Jede Änderung baut das Ergebnis vollständig neu auf.

use super::arc::Arc;
use super::control_polygon::ControlPolygon;
use super::error::SplineError;
use super::vector::{clamped_acos, sign, PlanarVecExt, Point2D};
use crate::shared::spline_geometry::{arc_point, straight_segment, ArcSampling};
use crate::shared::weights::{weights, BlendingMethod};

/// Parameter eines Neuaufbaus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSettings {
    /// Gewichtsfunktion der Tangenten-Überblendung
    pub blending_method: BlendingMethod,
    /// Stützstellen pro Überblend-Segment (unabhängig von der Geometrie)
    pub blend_samples: usize,
    /// Abtastung der Teilbögen an freien Enden
    pub arc_sampling: ArcSampling,
}

impl Default for SplineSettings {
    fn default() -> Self {
        Self {
            blending_method: BlendingMethod::default(),
            blend_samples: 40,
            arc_sampling: ArcSampling::new(5.0, 3, 100),
        }
    }
}

/// Wie eine Kante des Kontrollpolygons in die Kurve übernommen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Überblendung zwischen zwei Bögen
    Blend,
    /// Zweiter Teilbogen des Tripels am Kanten-Start (kein Bogen am Ende)
    ArcFromStart,
    /// Erster Teilbogen des Tripels am Kanten-Ende (kein Bogen am Start)
    ArcFromEnd,
    /// Gerade ohne gültige Tangente an beiden Enden
    Straight,
}

/// Ergebnis eines vollständigen Neuaufbaus (read-only Schnappschuss).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplineGeometry {
    /// Abgetastete Kurve
    pub points: Vec<Point2D>,
    /// Bogen je Kontrollpunkt (Tripel mit diesem Punkt in der Mitte)
    pub arcs: Vec<Option<Arc>>,
    /// Tangente je Kontrollpunkt (None bei degeneriertem Tripel)
    pub tangents: Vec<Option<Point2D>>,
    /// Segment-Art je Kante
    pub joins: Vec<JoinKind>,
    /// Wurde aus einem geschlossenen Polygon gebaut?
    pub closed: bool,
}

impl SplineGeometry {
    /// Alle gültigen Bögen in Reihenfolge.
    pub fn valid_arcs(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.iter().flatten()
    }
}

/// Hält das zuletzt vollständig berechnete Ergebnis.
#[derive(Debug, Clone, Default)]
pub struct CircleSpline {
    geometry: SplineGeometry,
    built_revision: Option<u64>,
}

impl CircleSpline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zuletzt vollständig berechnete Geometrie.
    pub fn geometry(&self) -> &SplineGeometry {
        &self.geometry
    }

    pub fn points(&self) -> &[Point2D] {
        &self.geometry.points
    }

    /// Ist das Ergebnis auf dem Stand der Polygon-Revision?
    pub fn is_current(&self, polygon: &ControlPolygon) -> bool {
        self.built_revision == Some(polygon.revision())
    }

    /// Baut die Kurve vollständig neu auf.
    ///
    /// Bei Konfigurationsfehlern bleibt das vorherige Ergebnis unverändert.
    pub fn update(
        &mut self,
        polygon: &ControlPolygon,
        settings: &SplineSettings,
    ) -> Result<(), SplineError> {
        self.geometry = build(polygon, settings)?;
        self.built_revision = Some(polygon.revision());
        Ok(())
    }
}

/// Reine Funktion: Polygon + Einstellungen → Geometrie.
pub fn build(
    polygon: &ControlPolygon,
    settings: &SplineSettings,
) -> Result<SplineGeometry, SplineError> {
    settings.arc_sampling.validate()?;
    let blend_weights = weights(settings.blending_method, settings.blend_samples)?;

    let positions = polygon.positions();
    let closed = polygon.is_closed();

    // 1. Durchlauf: Bögen und Tangenten (danach unveränderlich)
    let arcs = compute_arcs(polygon);
    let tangents = collect_tangents(&arcs, closed);

    // 2. Durchlauf: je Kante ein Segment
    let mut points: Vec<Point2D> = Vec::new();
    let mut joins = Vec::with_capacity(polygon.edge_count());

    if positions.len() >= 2 {
        for edge in 0..polygon.edge_count() {
            let Some((k0, k1)) = polygon.edge(edge) else {
                continue;
            };
            let (p0, p1) = (positions[k0], positions[k1]);

            let (segment, kind) = match (&arcs[k0], &arcs[k1]) {
                (Some(start), Some(end)) => (
                    blend_segment(p0, p1, start.t1, end.t0, &blend_weights),
                    JoinKind::Blend,
                ),
                (Some(start), None) => (
                    start.second_half(&settings.arc_sampling),
                    JoinKind::ArcFromStart,
                ),
                (None, Some(end)) => (
                    end.first_half(&settings.arc_sampling),
                    JoinKind::ArcFromEnd,
                ),
                (None, None) => (straight_segment(p0, p1), JoinKind::Straight),
            };

            // Gemeinsamen Endpunkt nur einmal übernehmen
            let skip = usize::from(!points.is_empty());
            points.extend(segment.into_iter().skip(skip));
            joins.push(kind);
        }
    }

    log::debug!(
        "Spline neu aufgebaut: {} Kontrollpunkte, {} Bögen, {} Kurvenpunkte ({}, {})",
        positions.len(),
        arcs.iter().flatten().count(),
        points.len(),
        settings.blending_method,
        if closed { "geschlossen" } else { "offen" }
    );

    Ok(SplineGeometry {
        points,
        arcs,
        tangents,
        joins,
        closed,
    })
}

/// Bogen je Kontrollpunkt, berechnet aus dem Tripel (Vorgänger, Punkt, Nachfolger).
///
/// Offene Enden und degenerierte Tripel erhalten `None`.
pub fn compute_arcs(polygon: &ControlPolygon) -> Vec<Option<Arc>> {
    let points = polygon.points();
    if points.len() < 3 {
        return vec![None; points.len()];
    }
    (0..points.len())
        .map(|k| {
            let (Some(prev), Some(next)) = polygon.neighbors(k) else {
                return None;
            };
            match Arc::from_triple(
                points[prev].position,
                points[k].position,
                points[next].position,
                prev,
            ) {
                Ok(arc) => Some(arc),
                Err(e) => {
                    log::debug!("Tripel um Punkt {k} übersprungen: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Tangente je Punkt aus den fertigen Bögen.
///
/// Innere Punkte nehmen `t1` ihres eigenen Tripels; die Endpunkte eines
/// offenen Polygons `t0` des ersten bzw. `t2` des letzten Tripels.
fn collect_tangents(arcs: &[Option<Arc>], closed: bool) -> Vec<Option<Point2D>> {
    let n = arcs.len();
    let mut tangents: Vec<Option<Point2D>> = arcs.iter().map(|a| a.map(|a| a.t1)).collect();
    if !closed && n >= 3 {
        tangents[0] = arcs[1].map(|a| a.t0);
        tangents[n - 1] = arcs[n - 2].map(|a| a.t2);
    }
    tangents
}

/// Überblendung von `p0` nach `p1`: die Starttangente dreht gewichtet von
/// `t_start` nach `t_end` (beide als Tangenten in `p0` ausgedrückt); jede
/// Zwischenrichtung bestimmt den Halbwinkel der Bogenformel an ihrer Stelle.
///
/// `t_end` ist die in `p0` gespiegelte Ankunftstangente in `p1`, damit
/// Drehrichtung und Halbwinkel auf derselben Seite der Sehne gemessen werden.
///
/// Gedreht wird stets auf dem kürzeren Weg. Überstreicht dieser die
/// Gegenrichtung der Sehne (S-Kurven mit spitzen Winkeln), nähert sich
/// `sin(tau)` null; die Punkte bleiben durch die Halbwinkel-Schranke endlich,
/// können aber weit ausschwingen.
pub fn blend_segment(
    p0: Point2D,
    p1: Point2D,
    t_start: Point2D,
    t_end: Point2D,
    blend_weights: &[f64],
) -> Vec<Point2D> {
    let chord = p1 - p0;
    let b = chord.length();
    let Some(v) = chord.try_normalize() else {
        return straight_segment(p0, p1);
    };
    let n = blend_weights.len();
    if n < 2 {
        return straight_segment(p0, p1);
    }

    let ang = clamped_acos(t_start.dot(t_end));
    let turn = if t_start.cross_z(t_end) < 0.0 { -1.0 } else { 1.0 };
    let last = (n - 1) as f64;

    blend_weights
        .iter()
        .enumerate()
        .map(|(j, &w)| {
            if j == 0 {
                return p0;
            }
            if j == n - 1 {
                return p1;
            }
            let t = t_start.rotate_z(turn * w * ang);
            let tau = clamped_acos(t.dot(v)) * sign(v.cross_z(t));
            arc_point(p0, v, b, j as f64 / last, tau)
        })
        .collect()
}

#[cfg(test)]
mod tests;
