//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | Kurvenpunkte: {} | {}",
                state.point_count(),
                state.curve_point_count(),
                if state.polygon.is_closed() {
                    "geschlossen"
                } else {
                    "offen"
                }
            ));

            ui.separator();

            ui.label(format!("Kurvenlänge: {:.1}", state.curve_length()));

            ui.separator();

            ui.label(format!("Überblendung: {}", state.options.blending_method));

            ui.separator();

            ui.label(format!("Befehle: {}", state.command_log.len()));

            if let Some(index) = state.polygon.selected_index() {
                ui.separator();
                if let Some(point) = state.polygon.point(index) {
                    ui.label(format!(
                        "Punkt {}: ({:.1}, {:.1})",
                        index, point.position.x, point.position.y
                    ));
                }
            }

            // Statusnachricht (z.B. abgelehnte Konfiguration)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
