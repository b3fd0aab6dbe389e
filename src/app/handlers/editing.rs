//! Handler für Topologie-Änderungen am Kontrollpolygon.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point2D;

/// Hängt einen Punkt an.
pub fn add_point(state: &mut AppState, pos: Point2D) -> anyhow::Result<()> {
    use_cases::editing::add_point(state, pos)?;
    Ok(())
}

/// Fügt einen Punkt auf einer Kante ein.
pub fn insert_point_after(state: &mut AppState, index: usize, pos: Point2D) -> anyhow::Result<()> {
    use_cases::editing::insert_point_after(state, index, pos)?;
    Ok(())
}

/// Verschiebt den selektierten Punkt.
pub fn move_selected(state: &mut AppState, pos: Point2D) -> anyhow::Result<()> {
    use_cases::editing::move_selected_point(state, pos)?;
    Ok(())
}

/// Entfernt den selektierten Punkt.
pub fn remove_selected(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::remove_selected_point(state)?;
    Ok(())
}

/// Entfernt den letzten Punkt.
pub fn remove_last(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::remove_last_point(state)?;
    Ok(())
}

/// Schließt oder öffnet den Ring.
pub fn toggle_closed(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::toggle_closed(state)?;
    Ok(())
}

/// Lädt das Standard-Fünfeck.
pub fn load_default_polygon(state: &mut AppState, size: [f32; 2]) -> anyhow::Result<()> {
    use_cases::editing::load_default_polygon(state, size)?;
    Ok(())
}

/// Leert das Polygon.
pub fn clear(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::clear_polygon(state)?;
    Ok(())
}
