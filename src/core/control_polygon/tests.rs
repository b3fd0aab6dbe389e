use super::*;
use crate::core::vector::planar;

fn triangle() -> ControlPolygon {
    ControlPolygon::from_positions([planar(0.0, 0.0), planar(10.0, 0.0), planar(10.0, 10.0)])
}

#[test]
fn test_add_appends_and_reports_index() {
    let mut poly = ControlPolygon::new();
    let change = poly.add(planar(1.0, 2.0));
    assert_eq!(change.kind, TopologyChangeKind::Inserted);
    assert_eq!(change.index, Some(0));
    poly.add(planar(3.0, 4.0));
    assert_eq!(poly.count(), 2);
    assert_eq!(poly.positions()[1], planar(3.0, 4.0));
}

#[test]
fn test_insert_after_keeps_order() {
    let mut poly = triangle();
    let change = poly.insert_after(0, planar(5.0, -1.0)).expect("Einfügen erwartet");
    assert_eq!(change.index, Some(1));
    assert_eq!(
        poly.positions(),
        vec![
            planar(0.0, 0.0),
            planar(5.0, -1.0),
            planar(10.0, 0.0),
            planar(10.0, 10.0)
        ]
    );
    assert!(poly.insert_after(17, planar(0.0, 0.0)).is_none());
}

#[test]
fn test_remove_last_on_empty_is_noop() {
    let mut poly = ControlPolygon::new();
    let rev = poly.revision();
    assert!(poly.remove_last().is_none());
    assert_eq!(poly.revision(), rev);
}

#[test]
fn test_close_requires_three_points() {
    let mut poly = ControlPolygon::from_positions([planar(0.0, 0.0), planar(1.0, 0.0)]);
    assert!(poly.toggle_closed().is_none());
    assert!(!poly.is_closed());

    poly.add(planar(1.0, 1.0));
    let change = poly.toggle_closed().expect("Schließen erwartet");
    assert_eq!(change.kind, TopologyChangeKind::Closed);
    assert!(poly.is_closed());

    let change = poly.toggle_closed().expect("Öffnen erwartet");
    assert_eq!(change.kind, TopologyChangeKind::Opened);
    assert!(!poly.is_closed());
}

#[test]
fn test_removing_anchor_reopens_closed_triangle() {
    let mut poly = triangle();
    poly.toggle_closed();
    let change = poly.remove_at(0).expect("Entfernen erwartet");
    assert!(change.reopened);
    assert!(!poly.is_closed());
    assert_eq!(poly.count(), 2);
}

#[test]
fn test_removing_non_anchor_keeps_large_ring_closed() {
    let mut poly = triangle();
    poly.add(planar(0.0, 10.0));
    poly.toggle_closed();
    let change = poly.remove_at(2).expect("Entfernen erwartet");
    assert!(!change.reopened);
    assert!(poly.is_closed());
    assert_eq!(poly.count(), 3);

    // Unter drei Punkten wird der Ring zwangsläufig geöffnet
    poly.remove_last();
    assert!(!poly.is_closed());
}

#[test]
fn test_neighbors_wrap_only_when_closed() {
    let mut poly = triangle();
    assert_eq!(poly.neighbors(0), (None, Some(1)));
    assert_eq!(poly.neighbors(2), (Some(1), None));
    assert_eq!(poly.edge_count(), 2);

    poly.toggle_closed();
    assert_eq!(poly.neighbors(0), (Some(2), Some(1)));
    assert_eq!(poly.neighbors(2), (Some(1), Some(0)));
    assert_eq!(poly.edge_count(), 3);
    assert_eq!(poly.edge(2), Some((2, 0)));
    assert_eq!(poly.edge(3), None);
}

#[test]
fn test_selection_and_remove_selected() {
    let mut poly = triangle();
    assert!(poly.remove_selected().is_none());

    let hit = poly.hit_test(planar(10.5, 9.0), 5.0);
    assert_eq!(hit, Some(2));
    poly.set_selected(hit);
    assert_eq!(poly.selected_index(), Some(2));

    poly.remove_selected().expect("Entfernen erwartet");
    assert_eq!(poly.count(), 2);
    assert_eq!(poly.selected_index(), None);
}

#[test]
fn test_move_point_reports_change_only_on_difference() {
    let mut poly = triangle();
    assert!(poly.move_point(1, planar(10.0, 0.0)).is_none());
    let change = poly.move_point(1, planar(12.0, 1.0)).expect("Änderung erwartet");
    assert_eq!(change.kind, TopologyChangeKind::Moved);
    assert_eq!(poly.point(1).map(|p| p.position), Some(planar(12.0, 1.0)));
    assert!(poly.move_point(9, planar(0.0, 0.0)).is_none());
}

#[test]
fn test_find_edge_near() {
    let mut poly = triangle();
    assert_eq!(poly.find_edge_near(planar(5.0, 1.0), 3.0), Some(0));
    assert_eq!(poly.find_edge_near(planar(11.0, 5.0), 3.0), Some(1));
    // Außerhalb der Kante (Lotfußpunkt jenseits des Endpunkts)
    assert_eq!(poly.find_edge_near(planar(-2.0, 0.5), 3.0), None);
    // Schlusskante existiert erst im geschlossenen Ring
    assert_eq!(poly.find_edge_near(planar(5.0, 5.5), 3.0), None);
    poly.toggle_closed();
    assert_eq!(poly.find_edge_near(planar(5.0, 5.5), 3.0), Some(2));
}

#[test]
fn test_revision_increases_on_every_change() {
    let mut poly = ControlPolygon::new();
    let r0 = poly.revision();
    poly.add(planar(0.0, 0.0));
    let r1 = poly.revision();
    poly.add(planar(1.0, 0.0));
    let r2 = poly.revision();
    assert!(r0 < r1 && r1 < r2);
}
