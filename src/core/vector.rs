//! Ebene Vektor-Operationen auf `glam::DVec3` (z = 0-Konvention).
//!
//! Die z-Komponente wird nur mitgeführt, damit das Kreuzprodukt
//! eine vorzeichenbehaftete Drehrichtung liefert.

use glam::DVec3;

/// Ebener Punkt mit mitgeführter z-Komponente.
pub type Point2D = DVec3;

/// Erzeugt einen ebenen Punkt (z = 0).
pub fn planar(x: f64, y: f64) -> Point2D {
    DVec3::new(x, y, 0.0)
}

/// Begrenzt einen Kosinus-Wert auf [-1, 1] und liefert den Winkel.
///
/// Rundungsfehler können Skalarprodukte normierter Vektoren knapp über 1
/// schieben; `acos` wäre dort NaN.
pub fn clamped_acos(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos()
}

/// Vorzeichen mit 0 → 0 (im Gegensatz zu `f64::signum`).
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Zusätzliche Operationen, die die Kreisbogen-Geometrie braucht.
///
/// Die Drehung um die z-Achse liefert glam selbst (`DVec3::rotate_z`).
pub trait PlanarVecExt {
    /// Spiegelt den Vektor an `axis`: `2·(v·axis)·axis − v`.
    ///
    /// `axis` muss bereits normiert sein.
    fn mirror(self, axis: Self) -> Self;
    /// z-Komponente des Kreuzprodukts (positiv = Linksdrehung von `self` nach `other`).
    fn cross_z(self, other: Self) -> f64;
}

impl PlanarVecExt for DVec3 {
    fn mirror(self, axis: Self) -> Self {
        2.0 * self.dot(axis) * axis - self
    }

    fn cross_z(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}
