//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{CircleSpline, ControlPolygon};
use crate::shared::spline_geometry::polyline_length;
use crate::shared::EditorOptions;

/// Zeiger-Interaktion im Viewport
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    /// Wird der selektierte Punkt gerade gezogen?
    pub dragging: bool,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. abgelehnte Konfiguration)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpolygon (einziger Schreiber: Handler im Controller)
    pub polygon: ControlPolygon,
    /// Zuletzt vollständig berechnete Kurve
    pub spline: CircleSpline,
    /// Zeiger-Interaktion
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Überblendung, Anzeige, Interaktion)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            polygon: ControlPolygon::new(),
            spline: CircleSpline::new(),
            interaction: InteractionState::default(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.polygon.count()
    }

    /// Gibt die Anzahl der Kurvenpunkte zurück (für UI-Anzeige)
    pub fn curve_point_count(&self) -> usize {
        self.spline.points().len()
    }

    /// Approximierte Länge der Ausgabekurve (für UI-Anzeige)
    pub fn curve_length(&self) -> f64 {
        polyline_length(self.spline.points())
    }

    /// Darf der Ring aktuell geschlossen werden? (offen und genug Punkte)
    pub fn can_toggle_closed(&self) -> bool {
        self.polygon.is_closed() || self.polygon.count() >= crate::core::MIN_CLOSED_POINTS
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
