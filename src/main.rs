//! Kreisbogen-Spline-Editor.
//!
//! Interaktiver Editor für G1-stetige Kurven aus Kreisbögen durch
//! frei platzierbare Kontrollpunkte (egui + eframe).

use circle_spline::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Kreisbogen-Spline-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Kreisbogen-Spline-Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Kreisbogen-Spline-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
    /// Standard-Polygon wird geladen, sobald die Viewport-Größe bekannt ist
    needs_default_polygon: bool,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
            needs_default_polygon: true,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events || self.state.interaction.dragging {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    self.state.can_toggle_closed(),
                ));

                if self.needs_default_polygon && rect.width() > 0.0 && rect.height() > 0.0 {
                    self.needs_default_polygon = false;
                    events.push(AppIntent::DefaultPolygonRequested);
                }

                // Liest nur das zuletzt fertig berechnete Ergebnis
                let scene = self.controller.build_render_scene(&self.state);
                self.renderer.render_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
