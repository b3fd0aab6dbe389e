//! Geometrie-Szenarien über die öffentliche Library-API.

use approx::assert_relative_eq;
use circle_spline::core::build;
use circle_spline::shared::weights::weights_by_name;
use circle_spline::{planar, Arc, ControlPolygon, JoinKind, SplineError, SplineSettings};
use std::f64::consts::FRAC_PI_4;

#[test]
fn test_right_angle_triple_radius_and_half_angles() {
    let arc = Arc::from_triple(planar(0.0, 0.0), planar(10.0, 0.0), planar(10.0, 10.0), 0)
        .expect("nicht degeneriert");

    assert_relative_eq!(arc.tau0, FRAC_PI_4, epsilon = 1e-12);
    assert_relative_eq!(arc.tau1, FRAC_PI_4, epsilon = 1e-12);
    assert_relative_eq!(arc.radius, 10.0 / (2.0 * arc.tau0.sin()), epsilon = 1e-12);
    assert_relative_eq!(arc.radius, 7.0710678118654755, epsilon = 1e-9);
}

#[test]
fn test_collinear_triple_yields_no_arc_and_finite_output() {
    let err = Arc::from_triple(planar(0.0, 0.0), planar(5.0, 0.0), planar(10.0, 0.0), 0)
        .unwrap_err();
    assert_eq!(err, SplineError::DegenerateGeometry { index: 0 });

    let polygon =
        ControlPolygon::from_positions([planar(0.0, 0.0), planar(5.0, 0.0), planar(10.0, 0.0)]);
    let geometry = build(&polygon, &SplineSettings::default()).expect("gültige Einstellungen");
    assert_eq!(geometry.valid_arcs().count(), 0);
    assert!(geometry.points.iter().all(|p| p.is_finite()));
}

#[test]
fn test_linear_weights_five_samples() {
    let w = weights_by_name("linear", 5).expect("linear ist gültig");
    assert_eq!(w, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_closed_convex_pentagon_is_blended_loop() {
    let mut polygon = ControlPolygon::from_positions([
        planar(100.0, 0.0),
        planar(200.0, 80.0),
        planar(160.0, 200.0),
        planar(40.0, 200.0),
        planar(0.0, 80.0),
    ]);
    polygon.toggle_closed();

    let geometry = build(&polygon, &SplineSettings::default()).expect("gültige Einstellungen");

    assert!(geometry.joins.iter().all(|&j| j == JoinKind::Blend));
    let first = geometry.points[0];
    let last = *geometry.points.last().expect("Kurve nicht leer");
    assert_relative_eq!(first.distance(last), 0.0, epsilon = 1e-9);
}

#[test]
fn test_unknown_weight_function_is_invalid_configuration() {
    let result = weights_by_name("bogus", 5);
    assert!(matches!(
        result,
        Err(SplineError::InvalidConfiguration { .. })
    ));
}
