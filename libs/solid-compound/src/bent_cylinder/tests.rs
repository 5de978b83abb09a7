//! Tests for the tube synthesizer and curvature fitting.

use super::*;
use approx::assert_relative_eq;
use solid_kernel::{KernelError, PolylineVertex, Shape};
use std::f64::consts::{FRAC_PI_2, PI};

fn kinds(tube: &BentCylinder) -> Vec<&'static str> {
    (0..tube.compound().len())
        .map(|index| tube.segment(index).map_or("missing", |p| p.shape().name()))
        .collect()
}

fn torus_at(tube: &BentCylinder, index: usize) -> &Torus {
    tube.segment(index)
        .and_then(Primitive::as_torus)
        .unwrap_or_else(|| panic!("segment {index} is not a torus"))
}

fn points(vertices: &[[f64; 3]]) -> Vec<PolylineVertex> {
    vertices
        .iter()
        .map(|v| PolylineVertex::Point(DVec3::from_array(*v)))
        .collect()
}

// =============================================================================
// SYNTHESIZER
// =============================================================================

#[test]
fn test_elbow_is_cylinder_then_half_turn() {
    let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
    let tube = BentCylinder::new(&waypoints, 0.1, false).unwrap();

    assert_eq!(tube.compound().len(), 2);
    assert_eq!(kinds(&tube), vec!["cylinder", "torus"]);
    assert_eq!(tube.radius(), 0.1);
    assert!(tube.spline().is_none());

    let torus = torus_at(&tube, 1);
    assert_relative_eq!(torus.major_radius, 0.5, epsilon = 1e-12);
    assert_relative_eq!(torus.minor_radius, 0.1);
    assert!(torus.center.abs_diff_eq(DVec3::new(1.0, 0.5, 0.0), 1e-12));
    assert!(torus.normal.abs_diff_eq(DVec3::Z, 1e-12));

    // Antipodal joint: end nudged, arc just over a half turn leaving along +X
    let slice = torus.slice.unwrap();
    assert!(!slice.acute);
    assert!(slice.end.abs_diff_eq(DVec3::new(1.0 - 1e-5, 1.0, 0.0), 1e-12));
    assert_relative_eq!(torus.sweep_angle(), PI + 2e-5, epsilon = 1e-8);
    assert!(torus.start_direction().unwrap().abs_diff_eq(DVec3::X, 1e-9));
}

#[test]
fn test_straight_waypoints_yield_cylinders() {
    let waypoints = [
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(2.5, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
    ];
    let tube = BentCylinder::new(&waypoints, 0.2, false).unwrap();
    assert_eq!(kinds(&tube), vec!["cylinder"; 3]);
}

#[test]
fn test_collinear_trailing_torus_becomes_cylinder() {
    let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(3.0, 0.0, 0.0)];
    let tube = BentCylinder::new(&waypoints, 0.2, false).unwrap();
    assert_eq!(kinds(&tube), vec!["cylinder", "cylinder"]);
}

#[test]
fn test_single_segment_leading_torus_is_underconstrained() {
    let result = BentCylinder::new(&[DVec3::ZERO, DVec3::X], 0.1, true);
    assert_eq!(result.unwrap_err(), CompoundError::UnderconstrainedTorus);

    // Without the torus the single segment is a plain cylinder
    let tube = BentCylinder::new(&[DVec3::ZERO, DVec3::X], 0.1, false).unwrap();
    assert_eq!(kinds(&tube), vec!["cylinder"]);
}

#[test]
fn test_leading_torus_recovers_first_tangent() {
    let waypoints = [DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0), DVec3::new(2.0, 1.0, 0.0)];
    let tube = BentCylinder::new(&waypoints, 0.1, true).unwrap();
    assert_eq!(kinds(&tube), vec!["torus", "cylinder"]);

    let torus = torus_at(&tube, 0);
    assert_relative_eq!(torus.major_radius, 1.0, epsilon = 1e-12);
    assert!(torus.center.abs_diff_eq(DVec3::X, 1e-12));
    assert_relative_eq!(torus.sweep_angle(), FRAC_PI_2, epsilon = 1e-12);
    assert!(torus.start_direction().unwrap().abs_diff_eq(DVec3::Y, 1e-12));
}

#[test]
fn test_torus_at_both_ends() {
    let waypoints = [
        DVec3::ZERO,
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(2.0, 1.0, 0.0),
        DVec3::new(3.0, 2.0, 0.0),
    ];
    let tube = BentCylinder::new(&waypoints, 0.1, true).unwrap();
    assert_eq!(kinds(&tube), vec!["torus", "cylinder", "torus"]);

    let last = torus_at(&tube, 2);
    assert!(last.center.abs_diff_eq(DVec3::new(2.0, 2.0, 0.0), 1e-12));
    assert!(last.start_direction().unwrap().abs_diff_eq(DVec3::X, 1e-12));
    assert_relative_eq!(last.sweep_angle(), FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_antipodal_joints_stay_well_defined() {
    let motions = [
        DAffine3::IDENTITY,
        DAffine3::from_rotation_z(0.7),
        DAffine3::from_rotation_x(PI),
        DAffine3::from_axis_angle(DVec3::new(1.0, 2.0, 3.0).normalize(), 2.1),
        DAffine3::from_scale(DVec3::new(1.0, -1.0, 1.0)),
        DAffine3::from_scale_rotation_translation(
            DVec3::splat(3.7),
            glam::DQuat::from_rotation_y(-1.3),
            DVec3::new(-4.0, 2.0, 9.0),
        ),
    ];

    for motion in motions {
        let waypoints: Vec<DVec3> = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)]
            .iter()
            .map(|p| motion.transform_point3(*p))
            .collect();
        let tube = BentCylinder::new(&waypoints, 0.05, false).unwrap();
        let torus = torus_at(&tube, 1);
        let slice = torus.slice.unwrap();

        assert!(slice.end.is_finite() && torus.center.is_finite());
        assert!(slice.end.distance(waypoints[2]) <= 1e-4);
        assert!(torus.sweep_angle() > PI && torus.sweep_angle() < PI + 1e-3);

        let incoming = (waypoints[1] - waypoints[0]).normalize();
        let leaving = torus.start_direction().unwrap();
        assert!(leaving.dot(incoming) > 1.0 - 1e-9, "arc leaves along {leaving}");
    }
}

#[test]
fn test_invalid_waypoints() {
    assert!(matches!(
        BentCylinder::new(&[DVec3::ZERO], 0.1, false),
        Err(CompoundError::MalformedInput { .. })
    ));
    assert!(matches!(
        BentCylinder::new(&[DVec3::ZERO, DVec3::X, DVec3::X], 0.1, false),
        Err(CompoundError::MalformedInput { .. })
    ));
    assert!(matches!(
        BentCylinder::new(&[DVec3::ZERO, DVec3::X], 0.0, false),
        Err(CompoundError::Geometry(KernelError::InvalidPrimitive { .. }))
    ));
}

#[test]
fn test_motion_and_color_reach_segments() {
    let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
    let mut tube = BentCylinder::new(&waypoints, 0.1, false).unwrap();
    let lift = DAffine3::from_translation(DVec3::Z);
    tube.move_alone(lift).colored("Copper");

    for index in 0..2 {
        let segment = tube.segment(index).unwrap();
        assert_eq!(segment.map(), lift);
        assert_eq!(segment.color(), Some("Copper"));
    }
    assert_eq!(tube.compound().map(), lift);

    let solid: Solid = tube.into();
    assert_eq!(solid.as_compound().map(Compound::len), Some(2));
}

// =============================================================================
// CURVATURE FITTING
// =============================================================================

#[test]
fn test_right_angle_threshold() {
    let corner = points(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 2.0, 0.0]]);

    assert!(BentCylinder::from_polyline(&corner, 1.99, 0.1).is_ok());
    for radius in [2.0, 2.5] {
        match BentCylinder::from_polyline(&corner, radius, 0.1) {
            Err(CompoundError::InfeasibleCurvature {
                segment,
                requested,
                bound,
            }) => {
                assert_eq!(segment, 0);
                assert_eq!(requested, radius);
                assert_relative_eq!(bound, 2.0, epsilon = 1e-12);
            }
            other => panic!("expected infeasible curvature, got {other:?}"),
        }
    }
}

#[test]
fn test_obtuse_corner_bound() {
    let corner = Polyline::from_points(vec![
        DVec3::ZERO,
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(3.0, 3.0_f64.sqrt(), 0.0),
    ])
    .unwrap();
    // Legs of length 2 around 120 degrees: 2 * cot(60) = 2 / sqrt(3)
    let bounds = curvature_bounds(&corner);
    let expected = 2.0 / 3.0_f64.sqrt();
    assert_relative_eq!(bounds[0], expected, epsilon = 1e-9);
    assert_relative_eq!(bounds[1], expected, epsilon = 1e-9);

    let vertices: Vec<PolylineVertex> = corner.points().iter().copied().map(Into::into).collect();
    assert!(BentCylinder::from_polyline(&vertices, 1.1, 0.1).is_ok());
    for radius in [1.2, 3.0] {
        match BentCylinder::from_polyline(&vertices, radius, 0.1) {
            Err(CompoundError::InfeasibleCurvature { segment, bound, .. }) => {
                assert!(segment <= 1);
                assert_relative_eq!(bound, expected, epsilon = 1e-9);
            }
            other => panic!("expected infeasible curvature, got {other:?}"),
        }
    }
}

#[test]
fn test_middle_segment_shared_by_two_corners() {
    let u_turn = points(&[
        [0.0, 0.0, 0.0],
        [10.0, 0.0, 0.0],
        [10.0, 4.0, 0.0],
        [0.0, 4.0, 0.0],
    ]);

    // The middle segment sees two right angles: 4 * cot(45) + 4 * cot(45)
    match BentCylinder::from_polyline(&u_turn, 8.5, 0.1) {
        Err(CompoundError::InfeasibleCurvature { segment, bound, .. }) => {
            assert_eq!(segment, 1);
            assert_relative_eq!(bound, 8.0, epsilon = 1e-12);
        }
        other => panic!("expected infeasible curvature, got {other:?}"),
    }

    let tube = BentCylinder::from_polyline(&u_turn, 1.5, 0.1).unwrap();
    assert_eq!(
        kinds(&tube),
        vec!["cylinder", "torus", "cylinder", "torus", "cylinder"]
    );
    // Tangent continuity at every torus entry
    for index in [1, 3] {
        let incoming = match tube.segment(index - 1).unwrap().shape() {
            Shape::Cylinder { start, end, .. } => (*end - *start).normalize(),
            other => panic!("expected a cylinder, got {}", other.name()),
        };
        let torus = torus_at(&tube, index);
        assert!(torus.start_direction().unwrap().abs_diff_eq(incoming, 1e-9));
        assert_relative_eq!(torus.major_radius, 1.5, epsilon = 1e-9);
    }
}

#[test]
fn test_quarter_turn_rounding() {
    let corner = points(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 2.0, 0.0]]);
    let tube = BentCylinder::from_polyline(&corner, 0.5, 0.1).unwrap();

    assert_eq!(kinds(&tube), vec!["cylinder", "torus", "cylinder"]);
    let torus = torus_at(&tube, 1);
    assert_relative_eq!(torus.major_radius, 0.5, epsilon = 1e-9);
    assert!(torus.center.abs_diff_eq(DVec3::new(1.5, 0.5, 0.0), 1e-9));
    assert_relative_eq!(torus.sweep_angle(), FRAC_PI_2, epsilon = 1e-9);
    assert!(torus.slice.unwrap().acute);

    let spline = tube.spline().unwrap();
    assert_eq!(spline.points(), &[DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(2.0, 2.0, 0.0)]);
}

#[test]
fn test_relative_vertices_match_absolute() {
    let absolute = points(&[[1.0, 1.0, 0.0], [3.0, 1.0, 0.0], [3.0, 3.0, 1.0]]);
    let relative = [
        PolylineVertex::Point(DVec3::new(1.0, 1.0, 0.0)),
        PolylineVertex::Offset(DVec3::new(2.0, 0.0, 0.0)),
        PolylineVertex::Offset(DVec3::new(0.0, 2.0, 1.0)),
    ];
    let a = BentCylinder::from_polyline(&absolute, 0.4, 0.05).unwrap();
    let b = BentCylinder::from_polyline(&relative, 0.4, 0.05).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_straight_vertex_left_unrounded() {
    let path = points(&[
        [0.0, -2.0, 0.0],
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 2.0, 0.0],
    ]);
    let bounds = curvature_bounds(&Polyline::new(&path).unwrap());
    assert_relative_eq!(bounds[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(bounds[2], 1.0, epsilon = 1e-12);

    // Only the two bends are rounded; the straight vertex joins one cylinder
    let tube = BentCylinder::from_polyline(&path, 0.5, 0.1).unwrap();
    assert_eq!(
        kinds(&tube),
        vec!["cylinder", "torus", "cylinder", "torus", "cylinder"]
    );
    match tube.segment(2).unwrap().shape() {
        Shape::Cylinder { start, end, .. } => {
            assert!(start.abs_diff_eq(DVec3::new(0.5, 0.0, 0.0), 1e-9));
            assert!(end.abs_diff_eq(DVec3::new(1.5, 0.0, 0.0), 1e-9));
        }
        other => panic!("expected a cylinder, got {}", other.name()),
    }
}

#[test]
fn test_straight_segment_admits_no_bend() {
    // A segment between two straight angles has a zero bound
    let path = points(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 2.0, 0.0],
    ]);
    assert!(matches!(
        BentCylinder::from_polyline(&path, 0.5, 0.1),
        Err(CompoundError::InfeasibleCurvature { segment: 0, .. })
    ));
}

#[test]
fn test_folded_corner_is_degenerate() {
    let path = points(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    assert!(matches!(
        BentCylinder::from_polyline(&path, 0.5, 0.1),
        Err(CompoundError::Geometry(KernelError::DegenerateTriangle { .. }))
    ));
}

#[test]
fn test_non_positive_curvature_radius() {
    let corner = points(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 2.0, 0.0]]);
    for radius in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            BentCylinder::from_polyline(&corner, radius, 0.1),
            Err(CompoundError::MalformedInput { .. })
        ));
    }
}

#[test]
fn test_two_point_polyline_rejects_every_bend() {
    let line = points(&[[0.0, 0.0, 0.0], [0.0, 0.0, 5.0]]);
    let bounds = curvature_bounds(&Polyline::new(&line).unwrap());
    assert_eq!(bounds.len(), 1);
    assert!(bounds[0] < 1e-9);

    for radius in [0.1, 100.0] {
        assert!(matches!(
            BentCylinder::from_polyline(&line, radius, 0.1),
            Err(CompoundError::InfeasibleCurvature { segment: 0, .. })
        ));
    }
}

#[test]
fn test_config_tolerance_is_used() {
    let corner = points(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 2.0, 0.0]]);
    let loose = GlobalConfig::new(0.1, 1e-5).unwrap();
    // Within 0.1 of the bound counts as touching it
    assert!(BentCylinder::from_polyline_with_config(&corner, 1.95, 0.1, &loose).is_err());
    assert!(BentCylinder::from_polyline(&corner, 1.95, 0.1).is_ok());
}

#[test]
fn test_config_deviation_sizes_antipodal_nudge() {
    let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
    let config = GlobalConfig::new(1e-9, 1e-3).unwrap();
    let tube = BentCylinder::with_config(&waypoints, 0.1, false, &config).unwrap();
    let slice = torus_at(&tube, 1).slice.unwrap();
    assert!(slice.end.abs_diff_eq(DVec3::new(1.0 - 1e-3, 1.0, 0.0), 1e-12));
}
