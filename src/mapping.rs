//! The texture region table: where each shell face reads its pixels
//!
//! This is a compiled, read-only table against the fixed 64-wide skin
//! layout. Each segment has exactly six face regions (front, back, left,
//! right, top, bottom); each region names its 3D anchor plane, its two
//! in-plane extents, its extrusion axis, and the source rectangle it reads.
//!
//! Rectangle corners deliberately run increasing or decreasing per axis to
//! express the layout's mirrored UV faces; the extruder honors each axis's
//! direction independently. The shell thickness is a lookup-time parameter:
//! it sets the extrusion depth and pushes anchor centers one thickness
//! outward on negative-facing sides.

use crate::model::{ArmVariant, Axis, SegmentName};

/// Default shell thickness, in model units
pub const DEFAULT_SHELL_THICKNESS: f64 = 0.4;

/// One planar face of a segment's shell
///
/// `extent_u` spans the first texture-rectangle axis (columns), `extent_v`
/// the second (rows); both lie in the plane perpendicular to `axis` and are
/// sized so one texture pixel maps to one unit step before inflation. In
/// every table entry the extent equals the rectangle's pixel count along
/// that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRegion {
    /// Anchor center of the face plane
    pub center: [f64; 3],
    /// In-plane extent along the first rectangle axis
    pub extent_u: f64,
    /// In-plane extent along the second rectangle axis
    pub extent_v: f64,
    /// Extrusion axis, excluded from the in-plane extents
    pub axis: Axis,
    /// First source-rectangle corner (column, row)
    pub from_px: (u32, u32),
    /// Second source-rectangle corner; per-axis ordering relative to
    /// `from_px` encodes the traversal direction
    pub to_px: (u32, u32),
    /// Extrusion depth along `axis`
    pub thickness: f64,
}

#[allow(clippy::too_many_arguments)]
fn region(
    center: [f64; 3],
    extent_u: f64,
    extent_v: f64,
    axis: Axis,
    from_px: (u32, u32),
    to_px: (u32, u32),
    thickness: f64,
) -> FaceRegion {
    FaceRegion {
        center,
        extent_u,
        extent_v,
        axis,
        from_px,
        to_px,
        thickness,
    }
}

/// The six face regions for one segment under the given arm variant
///
/// A pure lookup; the slim variant replaces only the two arm segments'
/// width-related entries, everything else is shared. Note the slim arms
/// keep 4-wide rectangles on their left/right faces: only the faces that
/// show the arm's width narrow to 3 pixels, matching the source layout.
pub fn segment_regions(
    name: SegmentName,
    variant: ArmVariant,
    t: f64,
) -> [FaceRegion; 6] {
    use Axis::{X, Y, Z};
    match (name, variant) {
        (SegmentName::Head, _) => [
            region([8.0, 8.0, 28.0], 8.0, 8.0, Y, (40, 16), (48, 8), t),
            region([8.0, -t, 28.0], 8.0, 8.0, Y, (64, 16), (56, 8), t),
            region([4.0 - t, 4.0, 28.0], 8.0, 8.0, X, (32, 16), (40, 8), t),
            region([12.0, 4.0, 28.0], 8.0, 8.0, X, (56, 16), (48, 8), t),
            region([8.0, 4.0, 32.0], 8.0, 8.0, Z, (40, 0), (48, 8), t),
            region([8.0, 4.0, 24.0 - t], 8.0, 8.0, Z, (48, 0), (56, 8), t),
        ],
        (SegmentName::Torso, _) => [
            region([8.0, 6.0, 18.0], 8.0, 12.0, Y, (20, 48), (28, 36), t),
            region([8.0, 2.0 - t, 18.0], 8.0, 12.0, Y, (40, 48), (32, 36), t),
            region([4.0 - t, 4.0, 18.0], 4.0, 12.0, X, (16, 48), (20, 36), t),
            region([12.0, 4.0, 18.0], 4.0, 12.0, X, (32, 48), (28, 36), t),
            region([8.0, 4.0, 24.0], 8.0, 4.0, Z, (20, 32), (28, 36), t),
            region([8.0, 4.0, 12.0 - t], 8.0, 4.0, Z, (28, 32), (36, 36), t),
        ],
        (SegmentName::RightArm, ArmVariant::Classic) => [
            region([2.0, 6.0, 18.0], 4.0, 12.0, Y, (44, 48), (48, 36), t),
            region([2.0, 2.0 - t, 18.0], 4.0, 12.0, Y, (56, 48), (52, 36), t),
            region([-t, 4.0, 18.0], 4.0, 12.0, X, (40, 48), (44, 36), t),
            region([4.0, 4.0, 18.0], 4.0, 12.0, X, (52, 48), (48, 36), t),
            region([2.0, 4.0, 24.0], 4.0, 4.0, Z, (44, 32), (48, 36), t),
            region([2.0, 4.0, 12.0 - t], 4.0, 4.0, Z, (48, 32), (52, 36), t),
        ],
        (SegmentName::LeftArm, ArmVariant::Classic) => [
            region([14.0, 6.0, 18.0], 4.0, 12.0, Y, (52, 64), (56, 52), t),
            region([14.0, 2.0 - t, 18.0], 4.0, 12.0, Y, (64, 64), (60, 52), t),
            region([12.0 - t, 4.0, 18.0], 4.0, 12.0, X, (48, 64), (52, 52), t),
            region([16.0, 4.0, 18.0], 4.0, 12.0, X, (60, 64), (56, 52), t),
            region([14.0, 4.0, 24.0], 4.0, 4.0, Z, (52, 48), (56, 52), t),
            region([14.0, 4.0, 12.0 - t], 4.0, 4.0, Z, (56, 48), (60, 52), t),
        ],
        (SegmentName::RightArm, ArmVariant::Slim) => [
            region([2.5, 6.0, 18.0], 3.0, 12.0, Y, (44, 48), (47, 36), t),
            region([2.5, 2.0 - t, 18.0], 3.0, 12.0, Y, (54, 48), (51, 36), t),
            region([1.0 - t, 4.0, 18.0], 4.0, 12.0, X, (40, 48), (44, 36), t),
            region([4.0, 4.0, 18.0], 4.0, 12.0, X, (51, 48), (47, 36), t),
            region([2.5, 4.0, 24.0], 3.0, 4.0, Z, (44, 32), (47, 36), t),
            region([2.5, 4.0, 12.0 - t], 3.0, 4.0, Z, (47, 32), (50, 36), t),
        ],
        (SegmentName::LeftArm, ArmVariant::Slim) => [
            region([13.5, 6.0, 18.0], 3.0, 12.0, Y, (52, 64), (55, 52), t),
            region([13.5, 2.0 - t, 18.0], 3.0, 12.0, Y, (62, 64), (59, 52), t),
            region([12.0 - t, 4.0, 18.0], 4.0, 12.0, X, (48, 64), (52, 52), t),
            region([15.0, 4.0, 18.0], 4.0, 12.0, X, (59, 64), (55, 52), t),
            region([13.5, 4.0, 24.0], 3.0, 4.0, Z, (52, 48), (55, 52), t),
            region([13.5, 4.0, 12.0 - t], 3.0, 4.0, Z, (55, 48), (58, 52), t),
        ],
        (SegmentName::RightLeg, _) => [
            region([6.0, 6.0, 6.0], 4.0, 12.0, Y, (4, 48), (8, 36), t),
            region([6.0, 2.0 - t, 6.0], 4.0, 12.0, Y, (16, 48), (12, 36), t),
            region([4.0 - t, 4.0, 6.0], 4.0, 12.0, X, (0, 48), (4, 36), t),
            region([8.0, 4.0, 6.0], 4.0, 12.0, X, (12, 48), (8, 36), t),
            region([6.0, 4.0, 12.0], 4.0, 4.0, Z, (4, 32), (8, 36), t),
            region([6.0, 4.0, -t], 4.0, 4.0, Z, (8, 32), (12, 36), t),
        ],
        (SegmentName::LeftLeg, _) => [
            region([10.0, 6.0, 6.0], 4.0, 12.0, Y, (4, 64), (8, 52), t),
            region([10.0, 2.0 - t, 6.0], 4.0, 12.0, Y, (16, 64), (12, 52), t),
            region([8.0 - t, 4.0, 6.0], 4.0, 12.0, X, (0, 64), (4, 52), t),
            region([12.0, 4.0, 6.0], 4.0, 12.0, X, (12, 64), (8, 52), t),
            region([10.0, 4.0, 12.0], 4.0, 4.0, Z, (4, 48), (8, 52), t),
            region([10.0, 4.0, -t], 4.0, 4.0, Z, (8, 48), (12, 52), t),
        ],
    }
}
