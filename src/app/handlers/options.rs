//! Handler für Laufzeit-Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::{BlendingMethod, EditorOptions};

/// Setzt die Überblend-Methode und baut neu auf.
pub fn set_blending_method(state: &mut AppState, method: BlendingMethod) -> anyhow::Result<()> {
    state.options.blending_method = method;
    log::info!("Überblend-Methode: {}", method);
    use_cases::spline::rebuild(state)?;
    Ok(())
}

/// Prüft und übernimmt neue Optionen und persistiert sie.
///
/// Ungültige Optionen werden abgelehnt; Zustand und Kurve bleiben unverändert.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    if let Err(e) = options.validate() {
        state.ui.status_message = Some(e.to_string());
        return Err(e.into());
    }
    state.options = options;
    use_cases::spline::rebuild(state)?;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    use_cases::spline::rebuild(state)?;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
