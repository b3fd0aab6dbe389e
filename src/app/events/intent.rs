use crate::core::Point2D;
use crate::shared::{BlendingMethod, DisplayLayer, EditorOptions};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Zeiger wurde im Viewport bewegt (Hover oder Drag)
    PointerMoved { pos: Point2D },
    /// Primärtaste gedrückt: Punkt greifen, auf Kante einfügen oder anhängen
    PrimaryPressed { pos: Point2D },
    /// Primärtaste losgelassen
    PrimaryReleased { pos: Point2D },
    /// Sekundärtaste gedrückt: Punkt unter dem Zeiger entfernen
    SecondaryPressed,
    /// Letzten Punkt entfernen (Entf)
    RemoveLastRequested,
    /// Ring schließen/öffnen
    ToggleClosedRequested,
    /// Überblend-Methode gewählt
    BlendingMethodChanged { method: BlendingMethod },
    /// Anzeige-Ebene umschalten (Tastatur oder Panel)
    DisplayLayerToggled { layer: DisplayLayer },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Standard-Polygon für die aktuelle Viewport-Größe laden
    DefaultPolygonRequested,
    /// Alle Kontrollpunkte entfernen
    ClearRequested,
}
