//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, DisplayLayer};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// - Entf: letzten Punkt entfernen
/// - A / P / T: Bögen / Polygon / Tangenten umschalten
/// - C: Ring schließen/öffnen (nur mit mindestens drei Punkten)
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, can_toggle_closed: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Bei aktivem Textfeld keine Shortcuts
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, del, key_a, key_p, key_t, key_c) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::T),
            i.key_pressed(egui::Key::C),
        )
    });

    if modifiers.command || modifiers.alt {
        return events;
    }

    if del {
        events.push(AppIntent::RemoveLastRequested);
    }
    if key_a {
        events.push(AppIntent::DisplayLayerToggled {
            layer: DisplayLayer::Arcs,
        });
    }
    if key_p {
        events.push(AppIntent::DisplayLayerToggled {
            layer: DisplayLayer::Polygon,
        });
    }
    if key_t {
        events.push(AppIntent::DisplayLayerToggled {
            layer: DisplayLayer::Tangents,
        });
    }
    if key_c && can_toggle_closed {
        events.push(AppIntent::ToggleClosedRequested);
    }

    events
}
