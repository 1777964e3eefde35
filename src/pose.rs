//! Pivot-relative posing of segments
//!
//! Each segment rotates about its own fixed pivot in a fixed axis order:
//! head about x, then y, then z; each arm about x then y; each leg about x
//! then z. Every nonzero angle is applied as its own pivot-relative
//! single-axis rotation, in sequence order. The steps are deliberately not
//! collapsed into one combined matrix: the sequential composition is part
//! of the output contract, and zero-angle steps are skipped outright so
//! unposed segments keep bit-identical vertices.

use crate::model::{Axis, Segment, SegmentName, SkinModel, Vertex};
use nalgebra::{Point3, Rotation3, Unit, Vector3};

/// Per-segment rotation angles, in degrees
///
/// All angles default to zero (the unposed figure). The torso never
/// rotates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Head rotation about x
    pub head_x: f64,
    /// Head rotation about y
    pub head_y: f64,
    /// Head rotation about z
    pub head_z: f64,
    /// Right arm rotation about x
    pub right_arm_x: f64,
    /// Right arm rotation about y
    pub right_arm_y: f64,
    /// Left arm rotation about x
    pub left_arm_x: f64,
    /// Left arm rotation about y
    pub left_arm_y: f64,
    /// Right leg rotation about x
    pub right_leg_x: f64,
    /// Right leg rotation about z
    pub right_leg_z: f64,
    /// Left leg rotation about x
    pub left_leg_x: f64,
    /// Left leg rotation about z
    pub left_leg_z: f64,
}

/// The fixed rotation pivot of a segment, if it has one
///
/// Pivots sit at the joint the segment hangs from (neck, shoulders, hips)
/// and are geometrically invariant under that segment's own rotations.
/// The torso has no pivot because it never rotates.
pub fn segment_pivot(name: SegmentName) -> Option<Point3<f64>> {
    match name {
        SegmentName::Head => Some(Point3::new(8.0, 4.0, 24.0)),
        SegmentName::Torso => None,
        SegmentName::RightArm => Some(Point3::new(4.0, 4.0, 24.0)),
        SegmentName::LeftArm => Some(Point3::new(12.0, 4.0, 24.0)),
        SegmentName::RightLeg => Some(Point3::new(6.0, 4.0, 12.0)),
        SegmentName::LeftLeg => Some(Point3::new(10.0, 4.0, 12.0)),
    }
}

fn unit_axis(axis: Axis) -> Unit<Vector3<f64>> {
    match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    }
}

/// Rotate every vertex of every box in a segment about a pivot
///
/// Applies the given (axis, degrees) steps in order. A zero angle is a
/// complete no-op, not an identity multiply. Positive angles follow the
/// right-hand rule around the named axis.
pub fn rotate_segment(segment: &mut Segment, pivot: Point3<f64>, steps: &[(Axis, f64)]) {
    for &(axis, degrees) in steps {
        if degrees == 0.0 {
            continue;
        }
        let rotation = Rotation3::from_axis_angle(&unit_axis(axis), degrees.to_radians());
        for cuboid in &mut segment.cuboids {
            for vertex in cuboid.vertices_mut() {
                let point = Point3::new(vertex.x, vertex.y, vertex.z);
                let rotated = pivot + rotation * (point - pivot);
                *vertex = Vertex::new(rotated.x, rotated.y, rotated.z);
            }
        }
    }
}

fn rotate_named(model: &mut SkinModel, name: SegmentName, steps: &[(Axis, f64)]) {
    let Some(pivot) = segment_pivot(name) else {
        return;
    };
    if let Some(segment) = model.segment_mut(name) {
        rotate_segment(segment, pivot, steps);
    }
}

/// Apply a full pose to the model, segment by segment
///
/// Segments whose angles are all zero are left untouched.
pub fn apply_pose(model: &mut SkinModel, pose: &Pose) {
    rotate_named(
        model,
        SegmentName::Head,
        &[
            (Axis::X, pose.head_x),
            (Axis::Y, pose.head_y),
            (Axis::Z, pose.head_z),
        ],
    );
    rotate_named(
        model,
        SegmentName::RightArm,
        &[(Axis::X, pose.right_arm_x), (Axis::Y, pose.right_arm_y)],
    );
    rotate_named(
        model,
        SegmentName::LeftArm,
        &[(Axis::X, pose.left_arm_x), (Axis::Y, pose.left_arm_y)],
    );
    rotate_named(
        model,
        SegmentName::RightLeg,
        &[(Axis::X, pose.right_leg_x), (Axis::Z, pose.right_leg_z)],
    );
    rotate_named(
        model,
        SegmentName::LeftLeg,
        &[(Axis::X, pose.left_leg_x), (Axis::Z, pose.left_leg_z)],
    );
}
