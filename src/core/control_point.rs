//! Einzelner Kontrollpunkt der Kurve.

use super::vector::Point2D;

/// Vom Benutzer platzierter Ankerpunkt.
///
/// Nachbarschaft ergibt sich aus der Position im `ControlPolygon`;
/// Tangenten liegen im Ergebnis des Spline-Aufbaus, nicht am Punkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in der Ebene (z = 0)
    pub position: Point2D,
    /// Hover-/Auswahl-Flag (gehört der UI, nicht der Geometrie)
    pub selected: bool,
}

impl ControlPoint {
    /// Erstellt einen nicht selektierten Kontrollpunkt.
    pub fn new(position: Point2D) -> Self {
        Self {
            position,
            selected: false,
        }
    }

    /// Liegt `p` innerhalb von `radius` um den Punkt?
    pub fn is_point_inside(&self, p: Point2D, radius: f64) -> bool {
        self.position.truncate().distance_squared(p.truncate()) < radius * radius
    }
}
