//! Zeichnen der Render-Szene mit dem egui-Painter.

mod curve_renderer;
mod overlay_renderer;
mod polygon_renderer;
mod types;

pub use crate::shared::RenderScene;
use types::RenderContext;

/// Haupt-Renderer für Kontrollpolygon, Kurve und Hilfslinien.
///
/// Zustandslos: jeder Frame zeichnet die übergebene Szene vollständig neu.
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self
    }

    /// Rendert die komplette Szene in das Rechteck `rect`.
    ///
    /// Reihenfolge: Hintergrund, Polygon, Bögen, Tangenten, Punkte, Kurve.
    pub fn render_scene(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        log::trace!(
            "Renderer.render_scene(): {} Kontrollpunkte, {} Kurvenpunkte",
            scene.control_points.len(),
            scene.curve.len()
        );

        let ctx = RenderContext {
            painter,
            rect,
            options: &scene.options,
        };

        painter.rect_filled(rect, 0.0, types::BACKGROUND_COLOR);

        if scene.options.show_polygon {
            polygon_renderer::render_edges(&ctx, &scene.control_points, scene.closed);
        }
        if scene.options.show_arcs {
            overlay_renderer::render_arcs(&ctx, &scene.arcs);
        }
        if scene.options.show_tangents {
            overlay_renderer::render_tangents(&ctx, &scene.tangents);
        }
        polygon_renderer::render_points(&ctx, &scene.control_points);
        curve_renderer::render(&ctx, &scene.curve);
    }
}
