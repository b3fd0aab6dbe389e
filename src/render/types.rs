//! Rendering-Typen und Farben.

use crate::core::Point2D;
use crate::shared::EditorOptions;
use egui::Color32;

/// Hintergrund des Viewports.
pub(crate) const BACKGROUND_COLOR: Color32 = Color32::BLACK;
/// Kontrollpolygon.
pub(crate) const POLYGON_COLOR: Color32 = Color32::WHITE;
/// Kreisbögen je Tripel.
pub(crate) const ARC_COLOR: Color32 = Color32::from_rgba_premultiplied(160, 40, 40, 204);
/// Tangenten.
pub(crate) const TANGENT_COLOR: Color32 = Color32::from_rgba_premultiplied(40, 160, 40, 204);
/// Ausgabekurve.
pub(crate) const CURVE_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 40, 160, 204);
/// Füllung der Kontrollpunkte.
pub(crate) const POINT_FILL_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
/// Rand selektierter Kontrollpunkte.
pub(crate) const POINT_SELECTED_STROKE: Color32 = Color32::WHITE;
/// Linienbreite aller Linien in Pixeln.
pub(crate) const LINE_WIDTH: f32 = 2.0;

/// Gemeinsamer Kontext für alle Sub-Renderer.
pub(crate) struct RenderContext<'a> {
    /// egui-Painter des Viewports
    pub painter: &'a egui::Painter,
    /// Viewport-Rechteck in Bildschirmkoordinaten
    pub rect: egui::Rect,
    /// Editor-Optionen (Radien, Längen)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Viewport-Koordinaten → Bildschirmposition.
    pub fn to_screen(&self, p: Point2D) -> egui::Pos2 {
        crate::ui::input::to_screen(self.rect, p)
    }

    /// Zeichnet eine offene Polyline.
    pub fn polyline(&self, points: &[Point2D], color: Color32) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter
            .add(egui::Shape::line(screen, egui::Stroke::new(LINE_WIDTH, color)));
    }
}
