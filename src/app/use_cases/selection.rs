//! Use-Case: Hover-Auswahl und Drag-Lebenszyklus.

use crate::app::AppState;
use crate::core::Point2D;

/// Selektiert den Punkt unter dem Zeiger (oder hebt die Auswahl auf).
pub fn hover_at(state: &mut AppState, pos: Point2D) {
    let hit = state.polygon.hit_test(pos, state.options.pick_radius);
    if hit != state.polygon.selected_index() {
        state.polygon.set_selected(hit);
    }
}

/// Setzt die Auswahl exklusiv.
pub fn select_point(state: &mut AppState, index: Option<usize>) {
    state.polygon.set_selected(index);
}

/// Beginnt das Ziehen des selektierten Punkts.
pub fn begin_drag(state: &mut AppState) {
    state.interaction.dragging = state.polygon.selected_index().is_some();
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    state.interaction.dragging = false;
}
