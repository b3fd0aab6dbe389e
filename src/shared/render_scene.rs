//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{ControlPoint, JoinKind, Point2D};

/// Tangente eines Kontrollpunkts als darstellbare Strecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentSegment {
    /// Index des Kontrollpunkts
    pub index: usize,
    pub start: Point2D,
    pub end: Point2D,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Reihenfolge (inkl. Hover-Flag)
    pub control_points: Vec<ControlPoint>,
    /// Ist das Kontrollpolygon geschlossen?
    pub closed: bool,
    /// Abgetastete Kurve des zuletzt vollständigen Aufbaus
    pub curve: Vec<Point2D>,
    /// Segment-Art je Kante (für Debug-Einfärbung)
    pub joins: Vec<JoinKind>,
    /// Abgetastete Kreisbögen je gültigem Tripel (leer, wenn ausgeblendet)
    pub arcs: Vec<Vec<Point2D>>,
    /// Tangenten-Strecken je Punkt (leer, wenn ausgeblendet)
    pub tangents: Vec<TangentSegment>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Wird gerade ein Punkt gezogen?
    pub dragging: bool,
    /// Laufzeit-Optionen für Anzeige-Schalter und Längen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve für Rendering vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve.len() >= 2
    }
}
