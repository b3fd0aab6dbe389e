use super::*;
use crate::core::vector::planar;
use approx::assert_relative_eq;

fn settings(method: BlendingMethod) -> SplineSettings {
    SplineSettings {
        blending_method: method,
        ..SplineSettings::default()
    }
}

/// Winkel zwischen zwei Richtungen in Grad.
fn angle_deg(a: Point2D, b: Point2D) -> f64 {
    clamped_acos(a.normalize().dot(b.normalize())).to_degrees()
}

fn regular_pentagon(radius: f64) -> ControlPolygon {
    ControlPolygon::from_positions((0..5).map(|i| {
        let phi = i as f64 * std::f64::consts::TAU / 5.0;
        planar(200.0 + radius * phi.cos(), 200.0 + radius * phi.sin())
    }))
}

fn demo_polygon() -> ControlPolygon {
    ControlPolygon::from_positions([
        planar(200.0, 150.0),
        planar(600.0, 150.0),
        planar(600.0, 450.0),
        planar(400.0, 300.0),
        planar(200.0, 450.0),
    ])
}

#[test]
fn test_fewer_than_two_points_produce_nothing() {
    let empty = build(&ControlPolygon::new(), &SplineSettings::default()).unwrap();
    assert!(empty.points.is_empty());

    let single = ControlPolygon::from_positions([planar(1.0, 1.0)]);
    let geometry = build(&single, &SplineSettings::default()).unwrap();
    assert!(geometry.points.is_empty());
    assert_eq!(geometry.tangents, vec![None]);
}

#[test]
fn test_two_points_are_a_straight_segment() {
    let poly = ControlPolygon::from_positions([planar(0.0, 0.0), planar(10.0, 0.0)]);
    let geometry = build(&poly, &SplineSettings::default()).unwrap();
    assert_eq!(geometry.points, vec![planar(0.0, 0.0), planar(10.0, 0.0)]);
    assert_eq!(geometry.joins, vec![JoinKind::Straight]);
}

#[test]
fn test_three_points_follow_single_circle() {
    let (q0, q1, q2) = (planar(0.0, 0.0), planar(10.0, 0.0), planar(10.0, 10.0));
    let poly = ControlPolygon::from_positions([q0, q1, q2]);
    let geometry = build(&poly, &SplineSettings::default()).unwrap();

    assert_eq!(geometry.joins, vec![JoinKind::ArcFromEnd, JoinKind::ArcFromStart]);
    assert_eq!(geometry.points[0], q0);
    assert_eq!(*geometry.points.last().unwrap(), q2);
    // Umkreis: Mittelpunkt (5, 5), Radius 10/√2
    let center = planar(5.0, 5.0);
    for p in &geometry.points {
        assert_relative_eq!(p.distance(center), 10.0 / 2f64.sqrt(), epsilon = 1e-9);
    }
    // Kontrollpunkt q1 genau einmal enthalten
    assert_eq!(geometry.points.iter().filter(|&&p| p == q1).count(), 1);
}

#[test]
fn test_open_endpoint_tangents_come_from_outer_arcs() {
    let poly = demo_polygon();
    let geometry = build(&poly, &SplineSettings::default()).unwrap();
    let first = geometry.arcs[1].expect("Bogen um Punkt 1");
    let last = geometry.arcs[3].expect("Bogen um Punkt 3");

    assert!(geometry.arcs[0].is_none());
    assert!(geometry.arcs[4].is_none());
    assert_eq!(geometry.tangents[0], Some(first.t0));
    assert_eq!(geometry.tangents[1], Some(first.t1));
    assert_eq!(geometry.tangents[4], Some(last.t2));
    assert_eq!(
        geometry.joins,
        vec![
            JoinKind::ArcFromEnd,
            JoinKind::Blend,
            JoinKind::Blend,
            JoinKind::ArcFromStart
        ]
    );
}

#[test]
fn test_collinear_triple_produces_no_arc_and_no_nan() {
    let poly = ControlPolygon::from_positions([planar(0.0, 0.0), planar(5.0, 0.0), planar(10.0, 0.0)]);
    let geometry = build(&poly, &SplineSettings::default()).unwrap();

    assert_eq!(geometry.valid_arcs().count(), 0);
    assert!(geometry.tangents.iter().all(Option::is_none));
    assert_eq!(geometry.joins, vec![JoinKind::Straight, JoinKind::Straight]);
    assert!(geometry.points.iter().all(|p| p.is_finite()));
    assert_eq!(
        geometry.points,
        vec![planar(0.0, 0.0), planar(5.0, 0.0), planar(10.0, 0.0)]
    );
}

#[test]
fn test_degenerate_interior_triple_falls_back_to_neighbour_arcs() {
    // Punkt 2 liegt auf der Geraden 1→3
    let poly = ControlPolygon::from_positions([
        planar(0.0, 0.0),
        planar(10.0, 10.0),
        planar(20.0, 10.0),
        planar(30.0, 10.0),
        planar(40.0, 0.0),
    ]);
    let geometry = build(&poly, &SplineSettings::default()).unwrap();
    assert!(geometry.arcs[2].is_none());
    assert!(geometry.tangents[2].is_none());
    assert_eq!(
        geometry.joins,
        vec![
            JoinKind::ArcFromEnd,
            JoinKind::ArcFromStart,
            JoinKind::ArcFromEnd,
            JoinKind::ArcFromStart
        ]
    );
    assert!(geometry.points.iter().all(|p| p.is_finite()));
}

#[test]
fn test_coincident_points_do_not_poison_output() {
    let poly = ControlPolygon::from_positions([
        planar(0.0, 0.0),
        planar(10.0, 0.0),
        planar(10.0, 0.0),
        planar(10.0, 10.0),
    ]);
    let geometry = build(&poly, &SplineSettings::default()).unwrap();
    assert!(geometry.points.iter().all(|p| p.is_finite()));
    assert_eq!(geometry.points[0], planar(0.0, 0.0));
    assert_eq!(*geometry.points.last().unwrap(), planar(10.0, 10.0));
}

#[test]
fn test_closed_pentagon_blends_every_join() {
    let mut poly = regular_pentagon(100.0);
    poly.toggle_closed();
    let geometry = build(&poly, &SplineSettings::default()).unwrap();

    assert!(geometry.closed);
    assert_eq!(geometry.joins.len(), 5);
    assert!(geometry.joins.iter().all(|&j| j == JoinKind::Blend));
    assert!(geometry.tangents.iter().all(Option::is_some));

    let first = geometry.points[0];
    let last = *geometry.points.last().unwrap();
    assert_relative_eq!(first.distance(last), 0.0, epsilon = 1e-9);
    // 5 Segmente à 40 Stützstellen, gemeinsame Endpunkte einmal
    assert_eq!(geometry.points.len(), 5 * 39 + 1);
}

#[test]
fn test_closed_regular_polygon_follows_circumcircle() {
    let mut poly = regular_pentagon(100.0);
    poly.toggle_closed();
    // Alle Tripel liegen auf demselben Kreis: die Überblendung ist dann exakt dieser Kreis
    let geometry = build(&poly, &settings(BlendingMethod::Cubic)).unwrap();
    let center = planar(200.0, 200.0);
    for p in &geometry.points {
        assert_relative_eq!(p.distance(center), 100.0, epsilon = 1e-6);
    }
}

#[test]
fn test_closed_seam_is_tangent_continuous() {
    let mut poly = demo_polygon();
    poly.toggle_closed();
    let geometry = build(&poly, &SplineSettings::default()).unwrap();
    let pts = &geometry.points;
    let n = pts.len();

    let outgoing = pts[1] - pts[0];
    let incoming = pts[n - 1] - pts[n - 2];
    assert!(angle_deg(outgoing, incoming) < 5.0);

    // Auch an der Naht keine Richtungsumkehr
    let tangent = geometry.tangents[0].expect("Tangente am Anker");
    assert!(outgoing.normalize().dot(tangent) > 0.99);
    assert!(incoming.normalize().dot(tangent) > 0.99);
}

#[test]
fn test_blended_curve_has_no_kinks() {
    for closed in [false, true] {
        let mut poly = demo_polygon();
        if closed {
            poly.toggle_closed();
        }
        let geometry = build(&poly, &SplineSettings::default()).unwrap();
        for w in geometry.points.windows(3) {
            let d0 = w[1] - w[0];
            let d1 = w[2] - w[1];
            assert!(
                angle_deg(d0, d1) < 25.0,
                "Knick von {:.1}° bei {:?}",
                angle_deg(d0, d1),
                w[1]
            );
        }
    }
}

#[test]
fn test_blend_segment_endpoints_and_direction() {
    let p0 = planar(0.0, 0.0);
    let p1 = planar(100.0, 0.0);
    let t_start = planar(0.0, 1.0).rotate_z(-0.3);
    let t_end = planar(1.0, 0.0).rotate_z(-0.4);
    let w = weights(BlendingMethod::Trigonometric, 40).unwrap();
    let pts = blend_segment(p0, p1, t_start, t_end, &w);

    assert_eq!(pts.len(), 40);
    assert_eq!(pts[0], p0);
    assert_eq!(pts[39], p1);
    // Startrichtung folgt t_start
    assert!((pts[1] - pts[0]).normalize().dot(t_start) > 0.99);
    // Ankunftsrichtung ist die an der Sehne gespiegelte t_end
    let arrival = t_end.mirror(planar(1.0, 0.0));
    assert!((pts[39] - pts[38]).normalize().dot(arrival) > 0.99);
}

#[test]
fn test_blend_with_equal_tangents_is_single_arc() {
    let p0 = planar(0.0, 0.0);
    let p1 = planar(10.0, 0.0);
    let t = planar(1.0, 0.0).rotate_z(std::f64::consts::FRAC_PI_2);
    let w = weights(BlendingMethod::Linear, 11).unwrap();
    let pts = blend_segment(p0, p1, t, t, &w);
    // Halbkreis über der Sehne
    for p in &pts {
        assert_relative_eq!(p.distance(planar(5.0, 0.0)), 5.0, epsilon = 1e-9);
    }
}

#[test]
fn test_blending_methods_differ_only_inside_segments() {
    let poly = demo_polygon();
    let linear = build(&poly, &settings(BlendingMethod::Linear)).unwrap();
    let trig = build(&poly, &settings(BlendingMethod::Trigonometric)).unwrap();
    assert_eq!(linear.points.len(), trig.points.len());
    assert_ne!(linear.points, trig.points);
    for q in poly.positions() {
        assert!(linear.points.contains(&q));
        assert!(trig.points.contains(&q));
    }
}

#[test]
fn test_invalid_settings_keep_previous_output() {
    let poly = demo_polygon();
    let mut spline = CircleSpline::new();
    spline.update(&poly, &SplineSettings::default()).unwrap();
    assert!(spline.is_current(&poly));
    let before = spline.geometry().clone();

    let mut moved = poly.clone();
    moved.move_point(0, planar(180.0, 120.0));
    let bad = SplineSettings {
        blend_samples: 1,
        ..SplineSettings::default()
    };
    let err = spline.update(&moved, &bad).unwrap_err();
    assert!(matches!(err, SplineError::InvalidConfiguration { .. }));
    assert_eq!(spline.geometry(), &before);
    assert!(!spline.is_current(&moved));
}

#[test]
fn test_invalid_arc_sampling_is_rejected() {
    let bad = SplineSettings {
        arc_sampling: ArcSampling::new(-1.0, 3, 100),
        ..SplineSettings::default()
    };
    let err = build(&demo_polygon(), &bad).unwrap_err();
    assert!(matches!(err, SplineError::InvalidConfiguration { .. }));
}

#[test]
fn test_rebuild_is_deterministic() {
    let mut poly = demo_polygon();
    poly.toggle_closed();
    let a = build(&poly, &SplineSettings::default()).unwrap();
    let b = build(&poly, &SplineSettings::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sharp_zigzag_stays_finite_with_pinned_endpoints() {
    let poly = ControlPolygon::from_positions([
        planar(5.0, 0.5),
        planar(0.0, 0.0),
        planar(10.0, 0.0),
        planar(5.0, -0.5),
    ]);
    let geometry = build(&poly, &SplineSettings::default()).unwrap();

    assert_eq!(
        geometry.joins,
        vec![JoinKind::ArcFromEnd, JoinKind::Blend, JoinKind::ArcFromStart]
    );
    assert!(geometry.points.iter().all(|p| p.is_finite()));
    for q in poly.positions() {
        assert!(geometry.points.contains(&q));
    }
    // Ausschwingen ist erlaubt, aber durch die Halbwinkel-Schranke begrenzt
    let max_len = geometry
        .points
        .iter()
        .map(|p| p.length())
        .fold(0.0, f64::max);
    assert!(max_len < 1.0e6, "Ausschwingen {max_len}");
}
