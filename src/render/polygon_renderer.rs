//! Kontrollpolygon: Kanten und Punkte.

use super::types::{
    RenderContext, LINE_WIDTH, POINT_FILL_COLOR, POINT_SELECTED_STROKE, POLYGON_COLOR,
};
use crate::core::{ControlPoint, Point2D};

/// Zeichnet die Polygonkanten (inkl. Schlusskante bei geschlossenem Ring).
pub(crate) fn render_edges(ctx: &RenderContext<'_>, points: &[ControlPoint], closed: bool) {
    let mut positions: Vec<Point2D> = points.iter().map(|p| p.position).collect();
    if closed {
        if let Some(&first) = positions.first() {
            positions.push(first);
        }
    }
    ctx.polyline(&positions, POLYGON_COLOR);
}

/// Zeichnet die Kontrollpunkte; selektierte mit hellem Rand.
pub(crate) fn render_points(ctx: &RenderContext<'_>, points: &[ControlPoint]) {
    let radius = ctx.options.pick_radius as f32;
    for point in points {
        let center = ctx.to_screen(point.position);
        ctx.painter.circle_filled(center, radius, POINT_FILL_COLOR);
        if point.selected {
            ctx.painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(LINE_WIDTH, POINT_SELECTED_STROKE),
            );
        }
    }
}
