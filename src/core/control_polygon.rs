//! Geordnete, veränderbare Folge von Kontrollpunkten (offen oder geschlossen).
//!
//! Nachbarschaft ist Array-Nachbarschaft; der geschlossene Ring entsteht
//! über modulare Indizes statt über zyklische Verweise.

use super::control_point::ControlPoint;
use super::vector::Point2D;

/// Minimale Punktanzahl für einen geschlossenen Ring.
pub const MIN_CLOSED_POINTS: usize = 3;

/// Art einer Topologie-Änderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyChangeKind {
    /// Punkt eingefügt
    Inserted,
    /// Punkt entfernt
    Removed,
    /// Punkt verschoben
    Moved,
    /// Ring geschlossen
    Closed,
    /// Ring geöffnet
    Opened,
}

/// Änderungsmeldung; der Aufrufer stößt daraufhin einen vollständigen Neuaufbau an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyChange {
    pub kind: TopologyChangeKind,
    /// Betroffener Punkt (None bei strukturellen Änderungen)
    pub index: Option<usize>,
    /// Wurde ein geschlossener Ring dabei geöffnet?
    pub reopened: bool,
}

impl TopologyChange {
    fn new(kind: TopologyChangeKind, index: Option<usize>) -> Self {
        Self {
            kind,
            index,
            reopened: false,
        }
    }
}

/// Kontrollpolygon: besitzt alle Kontrollpunkte exklusiv.
#[derive(Debug, Clone, Default)]
pub struct ControlPolygon {
    points: Vec<ControlPoint>,
    closed: bool,
    /// Zählt jede Änderung; Konsumenten erkennen damit veraltete Ergebnisse.
    revision: u64,
}

impl ControlPolygon {
    /// Erstellt ein leeres, offenes Polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein offenes Polygon aus Positionen.
    pub fn from_positions(positions: impl IntoIterator<Item = Point2D>) -> Self {
        Self {
            points: positions.into_iter().map(ControlPoint::new).collect(),
            closed: false,
            revision: 1,
        }
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Alle Positionen in Reihenfolge.
    pub fn positions(&self) -> Vec<Point2D> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Vorgänger und Nachfolger eines Punkts (mit Umlauf bei geschlossenem Ring).
    pub fn neighbors(&self, index: usize) -> (Option<usize>, Option<usize>) {
        let n = self.points.len();
        if index >= n {
            return (None, None);
        }
        if self.closed {
            return (Some((index + n - 1) % n), Some((index + 1) % n));
        }
        let prev = index.checked_sub(1);
        let next = (index + 1 < n).then_some(index + 1);
        (prev, next)
    }

    /// Anzahl Kanten (inkl. Schlusskante bei geschlossenem Ring).
    pub fn edge_count(&self) -> usize {
        let n = self.points.len();
        if self.closed {
            n
        } else {
            n.saturating_sub(1)
        }
    }

    /// Endpunkt-Indizes der Kante `edge`.
    pub fn edge(&self, edge: usize) -> Option<(usize, usize)> {
        (edge < self.edge_count()).then(|| (edge, (edge + 1) % self.points.len()))
    }

    // ── Mutationen ──────────────────────────────────────────────

    /// Hängt einen Punkt hinter dem letzten an.
    pub fn add(&mut self, position: Point2D) -> TopologyChange {
        self.points.push(ControlPoint::new(position));
        self.touch();
        TopologyChange::new(TopologyChangeKind::Inserted, Some(self.points.len() - 1))
    }

    /// Fügt einen Punkt direkt hinter `index` ein.
    ///
    /// Bei leerem Polygon wird unabhängig vom Index angehängt.
    pub fn insert_after(&mut self, index: usize, position: Point2D) -> Option<TopologyChange> {
        if self.points.is_empty() {
            return Some(self.add(position));
        }
        if index >= self.points.len() {
            return None;
        }
        let new_index = index + 1;
        self.points.insert(new_index, ControlPoint::new(position));
        self.touch();
        Some(TopologyChange::new(
            TopologyChangeKind::Inserted,
            Some(new_index),
        ))
    }

    /// Entfernt den letzten Punkt. Leeres Polygon → No-op.
    pub fn remove_last(&mut self) -> Option<TopologyChange> {
        let last = self.points.len().checked_sub(1)?;
        self.remove_at(last)
    }

    /// Entfernt den aktuell selektierten Punkt (falls vorhanden).
    pub fn remove_selected(&mut self) -> Option<TopologyChange> {
        let index = self.selected_index()?;
        self.remove_at(index)
    }

    /// Entfernt den Punkt an `index`.
    ///
    /// Ein geschlossener Ring wird geöffnet, wenn der Ankerpunkt (Index 0)
    /// entfernt wird oder weniger als drei Punkte übrig bleiben.
    pub fn remove_at(&mut self, index: usize) -> Option<TopologyChange> {
        if index >= self.points.len() {
            return None;
        }
        self.points.remove(index);

        let mut change = TopologyChange::new(TopologyChangeKind::Removed, None);
        if self.closed && (index == 0 || self.points.len() < MIN_CLOSED_POINTS) {
            self.closed = false;
            change.reopened = true;
            log::debug!("Anker entfernt oder zu wenige Punkte: Ring geöffnet");
        }
        self.touch();
        Some(change)
    }

    /// Verschiebt einen Punkt.
    pub fn move_point(&mut self, index: usize, position: Point2D) -> Option<TopologyChange> {
        let point = self.points.get_mut(index)?;
        if point.position == position {
            return None;
        }
        point.position = position;
        self.touch();
        Some(TopologyChange::new(TopologyChangeKind::Moved, Some(index)))
    }

    /// Schaltet zwischen offen und geschlossen um.
    ///
    /// Schließen mit weniger als drei Punkten ist ein No-op.
    pub fn toggle_closed(&mut self) -> Option<TopologyChange> {
        if self.closed {
            self.closed = false;
            self.touch();
            return Some(TopologyChange::new(TopologyChangeKind::Opened, None));
        }
        if self.points.len() < MIN_CLOSED_POINTS {
            log::debug!(
                "Schließen ignoriert: {} Punkte (mindestens {})",
                self.points.len(),
                MIN_CLOSED_POINTS
            );
            return None;
        }
        self.closed = true;
        self.touch();
        Some(TopologyChange::new(TopologyChangeKind::Closed, None))
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ── Interaktion (Hover / Auswahl) ───────────────────────────

    /// Index des selektierten Punkts.
    pub fn selected_index(&self) -> Option<usize> {
        self.points.iter().position(|p| p.selected)
    }

    /// Setzt die Auswahl exklusiv; keine Änderungsmeldung.
    pub fn set_selected(&mut self, index: Option<usize>) {
        for (i, p) in self.points.iter_mut().enumerate() {
            p.selected = Some(i) == index;
        }
    }

    /// Erster Punkt innerhalb von `radius` um `position`.
    pub fn hit_test(&self, position: Point2D, radius: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.is_point_inside(position, radius))
    }

    /// Sucht eine Kante, deren Lotfußpunkt von `position` echt innerhalb
    /// der Kante liegt und näher als `tolerance` ist.
    ///
    /// Gibt den Index des Kanten-Startpunkts zurück.
    pub fn find_edge_near(&self, position: Point2D, tolerance: f64) -> Option<usize> {
        (0..self.edge_count()).find(|&edge| {
            let Some((i0, i1)) = self.edge(edge) else {
                return false;
            };
            let q0 = self.points[i0].position.truncate();
            let q1 = self.points[i1].position.truncate();
            let p = position.truncate();
            let dir = q1 - q0;
            let len = dir.length();
            if len <= f64::EPSILON {
                return false;
            }
            let along = (p - q0).dot(dir / len);
            if along <= 0.0 || along >= len {
                return false;
            }
            let foot = q0 + dir / len * along;
            p.distance_squared(foot) < tolerance * tolerance
        })
    }
}

#[cfg(test)]
mod tests;
