//! Handler für Viewport und Anzeige-Ebenen.

use crate::app::AppState;
use crate::shared::DisplayLayer;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Schaltet eine Anzeige-Ebene um. Die Geometrie bleibt unberührt.
pub fn toggle_layer(state: &mut AppState, layer: DisplayLayer) {
    let visible = state.options.toggle_layer(layer);
    log::debug!("Anzeige {:?}: {}", layer, if visible { "an" } else { "aus" });
}
