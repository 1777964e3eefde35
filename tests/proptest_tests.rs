//! Property-based tests for the rotation engine and box synthesizer
//!
//! These use proptest to check the numeric invariants the pipeline relies
//! on: zero-angle idempotence, pivot invariance, and rotation round-trips.

use proptest::prelude::*;
use skinmesh::{rotate_segment, Axis, Cuboid, Segment, SegmentName, Vertex};

use nalgebra::Point3;

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

/// Coordinates and extents in the range the skin figure actually occupies
fn cuboid_strategy() -> impl Strategy<Value = Cuboid> {
    (
        [-8.0..24.0f64, -8.0..24.0f64, -8.0..36.0f64],
        [0.1..12.0f64, 0.1..12.0f64, 0.1..12.0f64],
    )
        .prop_map(|(origin, extents)| Cuboid::new(origin, extents).unwrap())
}

fn pivot_strategy() -> impl Strategy<Value = Point3<f64>> {
    [-8.0..24.0f64, -8.0..24.0f64, -8.0..36.0f64].prop_map(|[x, y, z]| Point3::new(x, y, z))
}

fn max_vertex_delta(a: &Segment, b: &Segment) -> f64 {
    let mut max = 0.0f64;
    for (ca, cb) in a.cuboids.iter().zip(&b.cuboids) {
        for (va, vb) in ca.vertices().iter().zip(cb.vertices()) {
            max = max
                .max((va.x - vb.x).abs())
                .max((va.y - vb.y).abs())
                .max((va.z - vb.z).abs());
        }
    }
    max
}

proptest! {
    #[test]
    fn prop_zero_angles_never_move_vertices(
        cuboid in cuboid_strategy(),
        pivot in pivot_strategy(),
        axis in axis_strategy(),
    ) {
        let mut segment = Segment::new(SegmentName::Head, vec![cuboid]);
        let before = segment.clone();
        rotate_segment(&mut segment, pivot, &[(axis, 0.0)]);
        // Skipped steps must be bit-for-bit no-ops
        prop_assert_eq!(segment.cuboids, before.cuboids);
    }

    #[test]
    fn prop_rotation_round_trip(
        cuboid in cuboid_strategy(),
        pivot in pivot_strategy(),
        axis in axis_strategy(),
        angle in -180.0..180.0f64,
    ) {
        let mut segment = Segment::new(SegmentName::Head, vec![cuboid]);
        let before = segment.clone();
        rotate_segment(&mut segment, pivot, &[(axis, angle)]);
        rotate_segment(&mut segment, pivot, &[(axis, -angle)]);
        prop_assert!(max_vertex_delta(&segment, &before) < 1e-6);
    }

    #[test]
    fn prop_pivot_corner_is_invariant(
        pivot in pivot_strategy(),
        axis in axis_strategy(),
        angle in -180.0..180.0f64,
        extents in [0.1..12.0f64, 0.1..12.0f64, 0.1..12.0f64],
    ) {
        // Corner 0 sits exactly on the pivot and must map to itself
        let cuboid = Cuboid::new([pivot.x, pivot.y, pivot.z], extents).unwrap();
        let mut segment = Segment::new(SegmentName::Head, vec![cuboid]);
        rotate_segment(&mut segment, pivot, &[(axis, angle)]);

        let corner = segment.cuboids[0].vertices()[0];
        prop_assert!((corner.x - pivot.x).abs() < 1e-6);
        prop_assert!((corner.y - pivot.y).abs() < 1e-6);
        prop_assert!((corner.z - pivot.z).abs() < 1e-6);
    }

    #[test]
    fn prop_rotation_preserves_distances_to_pivot(
        cuboid in cuboid_strategy(),
        pivot in pivot_strategy(),
        axis in axis_strategy(),
        angle in -180.0..180.0f64,
    ) {
        let distance = |v: &Vertex| {
            ((v.x - pivot.x).powi(2) + (v.y - pivot.y).powi(2) + (v.z - pivot.z).powi(2)).sqrt()
        };
        let before: Vec<f64> = cuboid.vertices().iter().map(distance).collect();

        let mut segment = Segment::new(SegmentName::Head, vec![cuboid]);
        rotate_segment(&mut segment, pivot, &[(axis, angle)]);

        for (vertex, d0) in segment.cuboids[0].vertices().iter().zip(before) {
            prop_assert!((distance(vertex) - d0).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_synthesized_box_has_distinct_corners(
        origin in [-100.0..100.0f64, -100.0..100.0f64, -100.0..100.0f64],
        extents in [0.01..50.0f64, 0.01..50.0f64, 0.01..50.0f64],
    ) {
        let cuboid = Cuboid::new(origin, extents).unwrap();
        let vertices = cuboid.vertices();
        for i in 0..8 {
            for j in (i + 1)..8 {
                prop_assert_ne!(vertices[i], vertices[j]);
            }
        }
        prop_assert_eq!(cuboid.triangles().len(), 12);
    }
}
