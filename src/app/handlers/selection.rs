//! Handler für Hover-Auswahl und Drag.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point2D;

/// Aktualisiert die Hover-Auswahl.
pub fn hover_at(state: &mut AppState, pos: Point2D) {
    use_cases::selection::hover_at(state, pos);
}

/// Setzt die Auswahl exklusiv.
pub fn select(state: &mut AppState, index: Option<usize>) {
    use_cases::selection::select_point(state, index);
}

/// Startet den Drag des selektierten Punkts.
pub fn begin_drag(state: &mut AppState) {
    use_cases::selection::begin_drag(state);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
