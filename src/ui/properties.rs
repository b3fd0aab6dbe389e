//! Seitenpanel: Überblend-Methode, Anzeige-Ebenen, Ring und Abtastung.

use crate::app::{AppIntent, AppState, BlendingMethod, DisplayLayer};
use crate::core::JoinKind;

/// Rendert das Seitenpanel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading("Kreisbogen-Spline");
            ui.separator();

            // ── Überblendung ────────────────────────────────────────
            ui.label("Überblendung:");
            let mut method = state.options.blending_method;
            egui::ComboBox::from_id_salt("blending_method")
                .selected_text(method.name())
                .show_ui(ui, |ui| {
                    for candidate in BlendingMethod::ALL {
                        ui.selectable_value(&mut method, candidate, candidate.name());
                    }
                });
            if method != state.options.blending_method {
                events.push(AppIntent::BlendingMethodChanged { method });
            }

            ui.separator();

            // ── Anzeige ─────────────────────────────────────────────
            ui.label("Anzeige:");
            layer_checkbox(ui, state, DisplayLayer::Polygon, "Polygon (P)", &mut events);
            layer_checkbox(ui, state, DisplayLayer::Arcs, "Kreisbögen (A)", &mut events);
            layer_checkbox(ui, state, DisplayLayer::Tangents, "Tangenten (T)", &mut events);

            ui.separator();

            // ── Topologie ───────────────────────────────────────────
            let mut closed = state.polygon.is_closed();
            let response = ui.add_enabled(
                state.can_toggle_closed(),
                egui::Checkbox::new(&mut closed, "Geschlossen (C)"),
            );
            if response.changed() {
                events.push(AppIntent::ToggleClosedRequested);
            }

            ui.horizontal(|ui| {
                if ui.button("Standard-Polygon").clicked() {
                    events.push(AppIntent::DefaultPolygonRequested);
                }
                if ui.button("Leeren").clicked() {
                    events.push(AppIntent::ClearRequested);
                }
            });

            ui.separator();

            // ── Abtastung ───────────────────────────────────────────
            render_sampling_section(ui, state, &mut events);

            ui.separator();
            render_join_summary(ui, state);

            ui.separator();
            ui.small("Klick: Punkt setzen / ziehen");
            ui.small("Klick auf Kante: einfügen");
            ui.small("Rechtsklick: Punkt entfernen");
            ui.small("Entf: letzten Punkt entfernen");
        });

    events
}

fn layer_checkbox(
    ui: &mut egui::Ui,
    state: &AppState,
    layer: DisplayLayer,
    label: &str,
    events: &mut Vec<AppIntent>,
) {
    let mut visible = state.options.layer_visible(layer);
    if ui.checkbox(&mut visible, label).changed() {
        events.push(AppIntent::DisplayLayerToggled { layer });
    }
}

fn render_sampling_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut opts = state.options.clone();
    let mut changed = false;

    ui.collapsing("Abtastung", |ui| {
        egui::Grid::new("sampling_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Stützstellen:");
                changed |= ui
                    .add(egui::DragValue::new(&mut opts.blend_samples).range(2..=400))
                    .changed();
                ui.end_row();

                ui.label("Bogen-Auflösung:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.arc_resolution)
                            .range(0.5..=50.0)
                            .speed(0.1),
                    )
                    .changed();
                ui.end_row();

                ui.label("Segmente min:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.arc_segments_min)
                            .range(1..=opts.arc_segments_max),
                    )
                    .changed();
                ui.end_row();

                ui.label("Segmente max:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.arc_segments_max)
                            .range(opts.arc_segments_min..=1000),
                    )
                    .changed();
                ui.end_row();

                ui.label("Tangentenlänge:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.tangent_display_length)
                            .range(10.0..=400.0)
                            .speed(1.0),
                    )
                    .changed();
                ui.end_row();
            });

        if ui.button("Standardwerte").clicked() {
            events.push(AppIntent::ResetOptionsRequested);
        }
    });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }
}

fn render_join_summary(ui: &mut egui::Ui, state: &AppState) {
    let joins = &state.spline.geometry().joins;
    let count = |kind: JoinKind| joins.iter().filter(|&&j| j == kind).count();
    ui.label(format!(
        "Kanten: {} (Überblendung {}, Bogen {}, Gerade {})",
        joins.len(),
        count(JoinKind::Blend),
        count(JoinKind::ArcFromStart) + count(JoinKind::ArcFromEnd),
        count(JoinKind::Straight)
    ));
}
