//! Zentrale Konfiguration für den Kreisbogen-Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::spline_geometry::ArcSampling;
use super::weights::BlendingMethod;
use crate::core::{SplineError, SplineSettings};
use serde::{Deserialize, Serialize};

// ── Überblendung ────────────────────────────────────────────────────

/// Stützstellen pro Überblend-Segment.
pub const BLEND_SAMPLES: usize = 40;

// ── Teilbögen ───────────────────────────────────────────────────────

/// Bogenlänge pro Segment (Längeneinheiten).
pub const ARC_RESOLUTION: f64 = 5.0;
/// Minimale Segmentanzahl eines Teilbogens.
pub const ARC_SEGMENTS_MIN: usize = 3;
/// Maximale Segmentanzahl eines Teilbogens.
pub const ARC_SEGMENTS_MAX: usize = 100;

// ── Interaktion ─────────────────────────────────────────────────────

/// Trefferradius eines Kontrollpunkts.
pub const PICK_RADIUS: f64 = 5.0;
/// Maximaler Abstand zu einer Polygonkante für das Einfügen.
pub const EDGE_INSERT_TOLERANCE: f64 = 3.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Gesamtlänge der angezeigten Tangenten-Strecke.
pub const TANGENT_DISPLAY_LENGTH: f64 = 100.0;

// ── Anzeige-Ebenen ──────────────────────────────────────────────────

/// Per Tastatur oder Panel umschaltbare Anzeige-Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLayer {
    /// Kontrollpolygon
    Polygon,
    /// Tangenten je Kontrollpunkt
    Tangents,
    /// Kreisbögen je Punkt-Tripel
    Arcs,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `circle_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Gewichtsfunktion der Tangenten-Überblendung
    pub blending_method: BlendingMethod,
    /// Stützstellen pro Überblend-Segment (mindestens 2)
    pub blend_samples: usize,
    /// Bogenlänge pro Segment bei Teilbögen
    pub arc_resolution: f64,
    /// Untere Schranke der Segmentanzahl eines Teilbogens
    pub arc_segments_min: usize,
    /// Obere Schranke der Segmentanzahl eines Teilbogens
    pub arc_segments_max: usize,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Kontrollpolygon zeichnen (aktiviert auch Einfügen auf Kanten)
    pub show_polygon: bool,
    /// Tangenten je Kontrollpunkt zeichnen
    pub show_tangents: bool,
    /// Kreisbögen je Punkt-Tripel zeichnen
    pub show_arcs: bool,
    /// Länge der Tangenten-Strecke
    pub tangent_display_length: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Trefferradius der Kontrollpunkte
    pub pick_radius: f64,
    /// Abstand zur Kante, innerhalb dessen ein Klick einfügt statt anhängt
    pub edge_insert_tolerance: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            blending_method: BlendingMethod::default(),
            blend_samples: BLEND_SAMPLES,
            arc_resolution: ARC_RESOLUTION,
            arc_segments_min: ARC_SEGMENTS_MIN,
            arc_segments_max: ARC_SEGMENTS_MAX,

            show_polygon: true,
            show_tangents: true,
            show_arcs: true,
            tangent_display_length: TANGENT_DISPLAY_LENGTH,

            pick_radius: PICK_RADIUS,
            edge_insert_tolerance: EDGE_INSERT_TOLERANCE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("circle-spline-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("circle_spline_editor.toml")
    }

    /// Ist die Anzeige-Ebene eingeschaltet?
    pub fn layer_visible(&self, layer: DisplayLayer) -> bool {
        match layer {
            DisplayLayer::Polygon => self.show_polygon,
            DisplayLayer::Tangents => self.show_tangents,
            DisplayLayer::Arcs => self.show_arcs,
        }
    }

    /// Schaltet eine Anzeige-Ebene um und gibt den neuen Zustand zurück.
    pub fn toggle_layer(&mut self, layer: DisplayLayer) -> bool {
        let flag = match layer {
            DisplayLayer::Polygon => &mut self.show_polygon,
            DisplayLayer::Tangents => &mut self.show_tangents,
            DisplayLayer::Arcs => &mut self.show_arcs,
        };
        *flag = !*flag;
        *flag
    }

    /// Abtast-Parameter der Teilbögen.
    pub fn arc_sampling(&self) -> ArcSampling {
        ArcSampling::new(
            self.arc_resolution,
            self.arc_segments_min,
            self.arc_segments_max,
        )
    }

    /// Geometrie-relevanter Ausschnitt für den Spline-Aufbau.
    ///
    /// Anzeige-Schalter fließen nicht ein; sie betreffen nur das Rendering.
    pub fn spline_settings(&self) -> SplineSettings {
        SplineSettings {
            blending_method: self.blending_method,
            blend_samples: self.blend_samples,
            arc_sampling: self.arc_sampling(),
        }
    }

    /// Prüft die Geometrie-Optionen ohne Neuaufbau.
    pub fn validate(&self) -> Result<(), SplineError> {
        self.arc_sampling().validate()?;
        if self.blend_samples < 2 {
            return Err(SplineError::invalid(format!(
                "blend_samples = {} (mindestens 2)",
                self.blend_samples
            )));
        }
        Ok(())
    }
}
