//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, TangentSegment};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Liest ausschließlich das zuletzt fertig berechnete Ergebnis; hier wird
/// nie neu aufgebaut.
pub fn build(state: &AppState) -> RenderScene {
    let geometry = state.spline.geometry();
    let options = &state.options;

    let arcs = if options.show_arcs {
        geometry
            .valid_arcs()
            .map(|arc| arc.sample(options.arc_resolution))
            .collect()
    } else {
        Vec::new()
    };

    // Tangente als Strecke mittig durch den Punkt
    let half = options.tangent_display_length / 2.0;
    let tangents = if options.show_tangents {
        geometry
            .tangents
            .iter()
            .zip(state.polygon.points())
            .enumerate()
            .filter_map(|(index, (tangent, point))| {
                tangent.map(|t| TangentSegment {
                    index,
                    start: point.position - t * half,
                    end: point.position + t * half,
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderScene {
        control_points: state.polygon.points().to_vec(),
        closed: state.polygon.is_closed(),
        curve: geometry.points.clone(),
        joins: geometry.joins.clone(),
        arcs,
        tangents,
        viewport_size: state.view.viewport_size,
        dragging: state.interaction.dragging,
        options: options.clone(),
    }
}
