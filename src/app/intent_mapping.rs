//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerMoved { pos } => {
            if state.interaction.dragging {
                vec![AppCommand::MoveSelectedPoint { pos }]
            } else {
                vec![AppCommand::HoverAt { pos }]
            }
        }
        AppIntent::PrimaryPressed { pos } => {
            // Punkt unter dem Zeiger greifen
            if let Some(index) = state.polygon.hit_test(pos, state.options.pick_radius) {
                return vec![
                    AppCommand::SelectPoint { index: Some(index) },
                    AppCommand::BeginDrag,
                ];
            }

            // Auf einer sichtbaren Kante einfügen, sonst hinten anhängen
            let edge = if state.options.show_polygon && state.polygon.count() > 1 {
                state
                    .polygon
                    .find_edge_near(pos, state.options.edge_insert_tolerance)
            } else {
                None
            };

            let place = match edge {
                Some(index) => AppCommand::InsertPointAfter { index, pos },
                None => AppCommand::AddPoint { pos },
            };
            vec![place, AppCommand::BeginDrag]
        }
        AppIntent::PrimaryReleased { pos } => {
            if state.interaction.dragging {
                vec![AppCommand::MoveSelectedPoint { pos }, AppCommand::EndDrag]
            } else {
                vec![AppCommand::EndDrag]
            }
        }
        AppIntent::SecondaryPressed => vec![AppCommand::RemoveSelectedPoint],
        AppIntent::RemoveLastRequested => vec![AppCommand::RemoveLastPoint],
        AppIntent::ToggleClosedRequested => vec![AppCommand::ToggleClosed],
        AppIntent::BlendingMethodChanged { method } => {
            vec![AppCommand::SetBlendingMethod { method }]
        }
        AppIntent::DisplayLayerToggled { layer } => {
            vec![AppCommand::ToggleDisplayLayer { layer }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::DefaultPolygonRequested => vec![AppCommand::LoadDefaultPolygon {
            size: state.view.viewport_size,
        }],
        AppIntent::ClearRequested => vec![AppCommand::ClearPolygon],
    }
}
