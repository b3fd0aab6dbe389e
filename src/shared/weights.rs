//! Gewichtsfunktionen für das Überblenden zweier Tangentenrichtungen.
//!
//! Jede Funktion bildet `u ∈ [0, 1]` monoton auf `[0, 1]` ab,
//! mit `w(0) = 0` und `w(1) = 1`.

use crate::core::SplineError;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

/// Auswählbare Überblend-Methode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendingMethod {
    /// w(u) = u
    Linear,
    /// Stückweise quadratisch, Wendepunkt bei u = 0.5
    Parabolic,
    /// w(u) = (3 − 2u)·u²
    Cubic,
    /// w(u) = sin²(u·π/2)
    #[default]
    Trigonometric,
}

impl BlendingMethod {
    /// Alle Methoden in Anzeige-Reihenfolge.
    pub const ALL: [BlendingMethod; 4] = [
        BlendingMethod::Linear,
        BlendingMethod::Parabolic,
        BlendingMethod::Cubic,
        BlendingMethod::Trigonometric,
    ];

    /// Name wie in Konfiguration und UI.
    pub fn name(self) -> &'static str {
        match self {
            BlendingMethod::Linear => "linear",
            BlendingMethod::Parabolic => "parabolic",
            BlendingMethod::Cubic => "cubic",
            BlendingMethod::Trigonometric => "trigonometric",
        }
    }

    /// Wertet die Gewichtsfunktion an der Stelle `u` aus.
    pub fn weight(self, u: f64) -> f64 {
        match self {
            BlendingMethod::Linear => u,
            BlendingMethod::Parabolic => {
                if u < 0.5 {
                    2.0 * u * u
                } else {
                    1.0 - 2.0 * (u - 1.0).powi(2)
                }
            }
            BlendingMethod::Cubic => (3.0 - 2.0 * u) * u * u,
            BlendingMethod::Trigonometric => (u * FRAC_PI_2).sin().powi(2),
        }
    }
}

impl fmt::Display for BlendingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendingMethod {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlendingMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| SplineError::invalid(format!("unbekannte Gewichtsfunktion '{s}'")))
    }
}

/// Tastet die Gewichtsfunktion an `n` Stellen `u = i/(n−1)` ab.
///
/// `n < 2` ist ungültig (Division durch `n − 1`).
pub fn weights(method: BlendingMethod, n: usize) -> Result<Vec<f64>, SplineError> {
    if n < 2 {
        return Err(SplineError::invalid(format!(
            "mindestens 2 Gewichts-Stützstellen nötig, erhalten: {n}"
        )));
    }
    let last = (n - 1) as f64;
    Ok((0..n).map(|i| method.weight(i as f64 / last)).collect())
}

/// Wie [`weights`], aber mit Auswahl über den Namen.
pub fn weights_by_name(name: &str, n: usize) -> Result<Vec<f64>, SplineError> {
    weights(name.parse()?, n)
}
