//! Viewport-Input-Handling: Maus-Events und Tastatur → AppIntent.
//!
//! Koordinaten werden relativ zur linken oberen Ecke des Viewports
//! übergeben (y nach unten), wie auf einer Zeichenfläche.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{planar, Point2D};

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Viewport-Größe
    last_viewport_size: [f32; 2],
    /// Zuletzt gemeldete Zeigerposition (Viewport-Koordinaten)
    last_pointer: Option<Point2D>,
    /// Wurde die Primärtaste innerhalb des Viewports gedrückt?
    primary_down_in_viewport: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus- und
    /// Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        can_toggle_closed: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        let size = [rect.width(), rect.height()];
        if size != self.last_viewport_size {
            self.last_viewport_size = size;
            events.push(AppIntent::ViewportResized { size });
        }

        let (hover_pos, primary_pressed, primary_released, secondary_pressed) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.secondary_pressed(),
            )
        });

        let pointer = hover_pos.map(|p| to_viewport(rect, p));

        if let Some(pos) = pointer {
            if self.last_pointer != Some(pos) {
                events.push(AppIntent::PointerMoved { pos });
            }
        }
        self.last_pointer = pointer;

        if response.hovered() {
            if let Some(pos) = pointer {
                if primary_pressed {
                    self.primary_down_in_viewport = true;
                    events.push(AppIntent::PrimaryPressed { pos });
                }
                if secondary_pressed {
                    events.push(AppIntent::SecondaryPressed);
                }
            }
        }

        // Loslassen auch außerhalb des Viewports, damit ein Drag sauber endet
        if primary_released && self.primary_down_in_viewport {
            self.primary_down_in_viewport = false;
            if let Some(pos) = pointer {
                events.push(AppIntent::PrimaryReleased { pos });
            } else if let Some(pos) = ui
                .input(|i| i.pointer.interact_pos())
                .map(|p| to_viewport(rect, p))
            {
                events.push(AppIntent::PrimaryReleased { pos });
            }
        }

        events.extend(keyboard::collect_keyboard_intents(ui, can_toggle_closed));

        events
    }
}

/// Bildschirmposition → Viewport-Koordinaten.
pub fn to_viewport(rect: egui::Rect, pos: egui::Pos2) -> Point2D {
    planar(f64::from(pos.x - rect.min.x), f64::from(pos.y - rect.min.y))
}

/// Viewport-Koordinaten → Bildschirmposition.
pub fn to_screen(rect: egui::Rect, p: Point2D) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
}
