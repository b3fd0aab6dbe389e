//! Kreisbogen-Spline-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionState, UiState, ViewState};
pub use core::{
    Arc, CircleSpline, ControlPoint, ControlPolygon, JoinKind, SplineError, SplineGeometry,
    SplineSettings, TopologyChange, TopologyChangeKind,
};
pub use core::{planar, PlanarVecExt, Point2D};
pub use shared::{BlendingMethod, DisplayLayer, EditorOptions, RenderScene};
