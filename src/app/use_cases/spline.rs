//! Use-Case: Kurve nach Topologie- oder Options-Änderung neu aufbauen.

use crate::app::AppState;
use crate::core::{SplineError, TopologyChange};

/// Baut die Kurve aus Polygon und Optionen vollständig neu auf.
///
/// Schlägt der Aufbau wegen ungültiger Konfiguration fehl, bleibt die
/// zuletzt berechnete Kurve erhalten und der Fehler wird zurückgegeben.
pub fn rebuild(state: &mut AppState) -> Result<(), SplineError> {
    let settings = state.options.spline_settings();
    match state.spline.update(&state.polygon, &settings) {
        Ok(()) => {
            state.ui.status_message = None;
            Ok(())
        }
        Err(e) => {
            log::warn!("Kurve nicht neu aufgebaut: {}", e);
            state.ui.status_message = Some(e.to_string());
            Err(e)
        }
    }
}

/// Baut neu auf, wenn eine Änderung gemeldet wurde; No-ops lösen nichts aus.
pub fn apply_change(
    state: &mut AppState,
    change: Option<TopologyChange>,
) -> Result<(), SplineError> {
    let Some(change) = change else {
        return Ok(());
    };
    if change.reopened {
        log::info!("Kontrollpolygon wurde geöffnet");
    }
    log::trace!("Topologie-Änderung: {:?}", change);
    rebuild(state)
}
