//! Fehlertypen der Kurven-Pipeline.

/// Fehler beim Aufbau der Kreisbogen-Spline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplineError {
    /// Konfiguration ist ungültig; der gesamte Neuaufbau wird abgebrochen.
    #[error("ungültige Konfiguration: {reason}")]
    InvalidConfiguration { reason: String },
    /// Tripel ist kollinear oder enthält zusammenfallende Punkte.
    ///
    /// Wird pro Tripel behandelt und bricht den Neuaufbau nie ab.
    #[error("degeneriertes Punkt-Tripel ab Index {index}")]
    DegenerateGeometry { index: usize },
}

impl SplineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
