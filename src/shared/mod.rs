//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält reine Geometrie-Helfer sowie Typen, die zwischen `app` und
//! `render` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod spline_geometry;
pub mod weights;

pub use options::{DisplayLayer, EditorOptions};
pub use options::{PICK_RADIUS, TANGENT_DISPLAY_LENGTH};
pub use render_scene::{RenderScene, TangentSegment};
pub use spline_geometry::ArcSampling;
pub use weights::{weights, BlendingMethod};
