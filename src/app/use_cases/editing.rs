//! Use-Case: Kontrollpunkte hinzufügen, einfügen, verschieben und entfernen.
//!
//! Jede Mutation meldet ihre `TopologyChange` an [`spline::apply_change`],
//! das die Kurve synchron und vollständig neu aufbaut.

use super::spline;
use crate::app::AppState;
use crate::core::{planar, ControlPolygon, Point2D, SplineError};

/// Hängt einen Punkt hinter dem letzten an und selektiert ihn.
pub fn add_point(state: &mut AppState, pos: Point2D) -> Result<(), SplineError> {
    let change = state.polygon.add(pos);
    state.polygon.set_selected(change.index);
    log::debug!("Punkt {:?} angehängt", change.index);
    spline::apply_change(state, Some(change))
}

/// Fügt einen Punkt hinter `index` ein und selektiert ihn.
pub fn insert_point_after(
    state: &mut AppState,
    index: usize,
    pos: Point2D,
) -> Result<(), SplineError> {
    let change = state.polygon.insert_after(index, pos);
    if let Some(change) = change {
        state.polygon.set_selected(change.index);
        log::debug!("Punkt auf Kante {} eingefügt", index);
    }
    spline::apply_change(state, change)
}

/// Verschiebt den selektierten Punkt.
pub fn move_selected_point(state: &mut AppState, pos: Point2D) -> Result<(), SplineError> {
    let Some(index) = state.polygon.selected_index() else {
        return Ok(());
    };
    let change = state.polygon.move_point(index, pos);
    spline::apply_change(state, change)
}

/// Entfernt den selektierten Punkt und beendet einen laufenden Drag.
pub fn remove_selected_point(state: &mut AppState) -> Result<(), SplineError> {
    let change = state.polygon.remove_selected();
    if change.is_some() {
        state.interaction.dragging = false;
    }
    spline::apply_change(state, change)
}

/// Entfernt den letzten Punkt. Leeres Polygon → No-op.
pub fn remove_last_point(state: &mut AppState) -> Result<(), SplineError> {
    let removes_selected = state.polygon.count() > 0
        && state.polygon.selected_index() == Some(state.polygon.count() - 1);
    let change = state.polygon.remove_last();
    if removes_selected {
        state.interaction.dragging = false;
    }
    spline::apply_change(state, change)
}

/// Schließt oder öffnet den Ring. Weniger als drei Punkte → No-op.
pub fn toggle_closed(state: &mut AppState) -> Result<(), SplineError> {
    let change = state.polygon.toggle_closed();
    if let Some(change) = change {
        log::info!("Kontrollpolygon: {:?}", change.kind);
    }
    spline::apply_change(state, change)
}

/// Ersetzt das Polygon durch das Standard-Fünfeck für die gegebene Fläche.
pub fn load_default_polygon(state: &mut AppState, size: [f32; 2]) -> Result<(), SplineError> {
    state.polygon = ControlPolygon::from_positions(default_polygon_positions(size));
    state.interaction.dragging = false;
    log::info!(
        "Standard-Polygon geladen ({} Punkte, {}x{})",
        state.polygon.count(),
        size[0],
        size[1]
    );
    spline::rebuild(state)
}

/// Entfernt alle Kontrollpunkte.
pub fn clear_polygon(state: &mut AppState) -> Result<(), SplineError> {
    state.polygon = ControlPolygon::new();
    state.interaction.dragging = false;
    spline::rebuild(state)
}

/// Fünf Punkte bei (¼,¼), (¾,¼), (¾,¾), (½,½), (¼,¾) der Fläche.
pub fn default_polygon_positions(size: [f32; 2]) -> Vec<Point2D> {
    let w = f64::from(size[0]);
    let h = f64::from(size[1]);
    [
        (0.25, 0.25),
        (0.75, 0.25),
        (0.75, 0.75),
        (0.5, 0.5),
        (0.25, 0.75),
    ]
    .into_iter()
    .map(|(fx, fy)| planar(fx * w, fy * h))
    .collect()
}
