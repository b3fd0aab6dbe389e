//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Einziger Schreiber von Polygon und Kurve: jede Topologie-Änderung
/// wird hier synchron bis zum fertigen Neuaufbau ausgeführt.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport & Anzeige ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ToggleDisplayLayer { layer } => handlers::view::toggle_layer(state, layer),

            // === Auswahl & Drag ===
            AppCommand::HoverAt { pos } => handlers::selection::hover_at(state, pos),
            AppCommand::SelectPoint { index } => handlers::selection::select(state, index),
            AppCommand::BeginDrag => handlers::selection::begin_drag(state),
            AppCommand::EndDrag => handlers::selection::end_drag(state),

            // === Topologie ===
            AppCommand::AddPoint { pos } => handlers::editing::add_point(state, pos)?,
            AppCommand::InsertPointAfter { index, pos } => {
                handlers::editing::insert_point_after(state, index, pos)?
            }
            AppCommand::MoveSelectedPoint { pos } => handlers::editing::move_selected(state, pos)?,
            AppCommand::RemoveSelectedPoint => handlers::editing::remove_selected(state)?,
            AppCommand::RemoveLastPoint => handlers::editing::remove_last(state)?,
            AppCommand::ToggleClosed => handlers::editing::toggle_closed(state)?,
            AppCommand::LoadDefaultPolygon { size } => {
                handlers::editing::load_default_polygon(state, size)?
            }
            AppCommand::ClearPolygon => handlers::editing::clear(state)?,

            // === Optionen ===
            AppCommand::SetBlendingMethod { method } => {
                handlers::options::set_blending_method(state, method)?
            }
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
