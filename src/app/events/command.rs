use crate::core::Point2D;
use crate::shared::{BlendingMethod, DisplayLayer, EditorOptions};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Hover-Auswahl am Zeiger aktualisieren
    HoverAt { pos: Point2D },
    /// Punkt exklusiv selektieren (None = Auswahl aufheben)
    SelectPoint { index: Option<usize> },
    /// Punkt hinter dem letzten anhängen und selektieren
    AddPoint { pos: Point2D },
    /// Punkt hinter `index` einfügen und selektieren
    InsertPointAfter { index: usize, pos: Point2D },
    /// Drag des selektierten Punkts beginnen
    BeginDrag,
    /// Selektierten Punkt verschieben
    MoveSelectedPoint { pos: Point2D },
    /// Drag beenden
    EndDrag,
    /// Selektierten Punkt entfernen
    RemoveSelectedPoint,
    /// Letzten Punkt entfernen
    RemoveLastPoint,
    /// Ring schließen/öffnen
    ToggleClosed,
    /// Überblend-Methode setzen
    SetBlendingMethod { method: BlendingMethod },
    /// Anzeige-Ebene umschalten
    ToggleDisplayLayer { layer: DisplayLayer },
    /// Optionen prüfen, anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Polygon durch das Standard-Fünfeck ersetzen
    LoadDefaultPolygon { size: [f32; 2] },
    /// Polygon leeren
    ClearPolygon,
}

impl AppCommand {
    /// Flüchtige Commands (Zeiger-Bewegung, Viewport) ohne Protokollwert.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppCommand::HoverAt { .. }
                | AppCommand::MoveSelectedPoint { .. }
                | AppCommand::SetViewportSize { .. }
        )
    }
}
