//! Data structures representing a posable skin model

use crate::error::{Error, Result};
use crate::geometry::Cuboid;
use std::str::FromStr;

/// A 3D vertex with x, y, z coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A single output triangle: three 3D points in winding order
///
/// The combined model is a triangle soup; no vertex indices or normals are
/// carried, matching what the STL writer needs.
pub type Triangle = [Vertex; 3];

/// One of the three principal axes
///
/// Used both as a face region's extrusion axis and as a rotation axis.
/// Keeping this a tagged enum (rather than a string) makes the in-plane
/// coordinate dispatch in the extruder a total match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The principal X axis
    X,
    /// The principal Y axis
    Y,
    /// The principal Z axis
    Z,
}

impl Axis {
    /// Coordinate slot (0, 1 or 2) this axis occupies in a vertex
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two coordinate slots lying in the plane perpendicular to this axis
    ///
    /// The first slot is the one a face region's first in-plane extent (and
    /// the first texture-rectangle axis) maps to, the second slot the other.
    pub fn in_plane_slots(&self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(Error::InvalidAxis(other.to_string())),
        }
    }
}

/// Name of one rigid body part of the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentName {
    /// The head, an 8x8x8 cube
    Head,
    /// The torso
    Torso,
    /// The right arm (4 wide classic, 3 wide slim)
    RightArm,
    /// The left arm (4 wide classic, 3 wide slim)
    LeftArm,
    /// The right leg
    RightLeg,
    /// The left leg
    LeftLeg,
}

impl SegmentName {
    /// All segments in the stable order used for assembly and output
    ///
    /// The mesh combiner concatenates segments in exactly this order, so it
    /// also fixes the triangle order of the final model.
    pub const ALL: [SegmentName; 6] = [
        SegmentName::Head,
        SegmentName::Torso,
        SegmentName::RightArm,
        SegmentName::LeftArm,
        SegmentName::RightLeg,
        SegmentName::LeftLeg,
    ];

    /// Human-readable segment name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentName::Head => "head",
            SegmentName::Torso => "torso",
            SegmentName::RightArm => "right_arm",
            SegmentName::LeftArm => "left_arm",
            SegmentName::RightLeg => "right_leg",
            SegmentName::LeftLeg => "left_leg",
        }
    }
}

/// Arm-width variant of the skin layout
///
/// The slim variant narrows only the two arm segments (3 units wide instead
/// of 4) and shifts their texture rectangles accordingly; every other
/// segment is shared between the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArmVariant {
    /// 4-unit-wide arms (the default layout)
    #[default]
    Classic,
    /// 3-unit-wide arms
    Slim,
}

/// One rigid body part: its name and the boxes that make it up
///
/// The first box is always the segment's solid base box; any following
/// boxes are the thin shell boxes extruded from the overlay texture layer.
/// Boxes are exclusively owned, so rotating one segment can never touch
/// another segment's geometry.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Which body part this is
    pub name: SegmentName,
    /// Base box followed by shell boxes
    pub cuboids: Vec<Cuboid>,
}

impl Segment {
    /// Create a segment from its box collection
    pub fn new(name: SegmentName, cuboids: Vec<Cuboid>) -> Self {
        Self { name, cuboids }
    }
}

/// A complete figure: every segment's geometry for one arm variant
///
/// Built once per run by the body assembler, mutated in place by the pose
/// engine, and read out by [`SkinModel::combined_triangles`].
#[derive(Debug, Clone)]
pub struct SkinModel {
    /// Segments in [`SegmentName::ALL`] order
    pub segments: Vec<Segment>,
}

impl SkinModel {
    /// Look up a segment by name
    pub fn segment(&self, name: SegmentName) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name == name)
    }

    /// Look up a segment by name, mutably
    pub fn segment_mut(&mut self, name: SegmentName) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.name == name)
    }

    /// Total number of boxes across all segments
    pub fn cuboid_count(&self) -> usize {
        self.segments.iter().map(|s| s.cuboids.len()).sum()
    }

    /// Flatten every segment into one ordered triangle list
    ///
    /// Segments are concatenated in [`SegmentName::ALL`] order and each box
    /// contributes its 12 triangles in synthesizer order. No deduplication
    /// or validation is performed; the output length is always exactly
    /// `12 * cuboid_count()`.
    pub fn combined_triangles(&self) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(12 * self.cuboid_count());
        for segment in &self.segments {
            for cuboid in &segment.cuboids {
                triangles.extend_from_slice(&cuboid.triangles());
            }
        }
        triangles
    }
}
