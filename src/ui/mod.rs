//! UI-Komponenten: Seitenpanel, Status-Bar, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Status-Bar).
/// Keyboard-Shortcuts sind in eine eigene Datei extrahiert.
pub mod properties;
pub mod status;

pub use input::InputState;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
