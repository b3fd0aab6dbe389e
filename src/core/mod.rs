//! Core-Domänentypen: Kontrollpunkte, Kontrollpolygon, Kreisbögen und Spline-Aufbau.

pub mod arc;
pub mod circle_spline;
pub mod control_point;
/// Kontrollpolygon mit Topologie-Operationen
///
/// - Array-Nachbarschaft statt verketteter Liste
/// - Geschlossener Ring über modulare Indizes
/// - Jede Mutation liefert eine `TopologyChange`
pub mod control_polygon;
pub mod error;
pub mod vector;

pub use arc::Arc;
pub use circle_spline::{build, CircleSpline, JoinKind, SplineGeometry, SplineSettings};
pub use control_point::ControlPoint;
pub use control_polygon::{ControlPolygon, TopologyChange, TopologyChangeKind, MIN_CLOSED_POINTS};
pub use error::SplineError;
pub use vector::{planar, PlanarVecExt, Point2D};
