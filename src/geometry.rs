//! Box synthesis: axis-aligned solids as fixed triangle decompositions
//!
//! Every solid in the output model, base body boxes and per-pixel shell
//! boxes alike, is a [`Cuboid`]: eight corner vertices plus a fixed
//! 12-entry triangle index table. Downstream consumers rely on the corner
//! order and winding staying exactly as documented here.

use crate::error::{Error, Result};
use crate::model::{Triangle, Vertex};

/// Corner order of a cuboid with origin (x, y, z) and extents (l, w, h):
///
/// ```text
/// 0: (x,     y,     z)        4: (x,     y,     z + h)
/// 1: (x + l, y,     z)        5: (x + l, y,     z + h)
/// 2: (x + l, y + w, z)        6: (x + l, y + w, z + h)
/// 3: (x,     y + w, z)        7: (x,     y + w, z + h)
/// ```
///
/// Two triangles per face, bottom/front/right/back/left/top.
const FACES: [[usize; 3]; 12] = [
    [0, 3, 1],
    [1, 3, 2], // bottom (z = 0)
    [0, 1, 4],
    [1, 5, 4], // front (y = 0)
    [1, 2, 5],
    [2, 6, 5], // right (x = l)
    [2, 3, 6],
    [3, 7, 6], // back (y = w)
    [3, 0, 7],
    [0, 4, 7], // left (x = 0)
    [4, 5, 6],
    [4, 6, 7], // top (z = h)
];

/// An axis-aligned rectangular solid stored as its eight corner vertices
///
/// Created once with strictly positive extents; afterwards the extents are
/// fixed but the vertex coordinates may be rewritten in place by the pose
/// engine, so a rotated cuboid is no longer axis-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    vertices: [Vertex; 8],
}

impl Cuboid {
    /// Synthesize a box from its minimum corner and three extents
    ///
    /// # Arguments
    /// * `origin` - the (x, y, z) minimum corner
    /// * `extents` - (length, width, height) along x, y, z; each must be
    ///   strictly positive
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if any extent is zero, negative,
    /// or not finite.
    pub fn new(origin: [f64; 3], extents: [f64; 3]) -> Result<Self> {
        let [x, y, z] = origin;
        let [l, w, h] = extents;

        for extent in extents {
            if !(extent > 0.0) || !extent.is_finite() {
                return Err(Error::InvalidGeometry(format!(
                    "extent {} for box at ({}, {}, {}); extents must be strictly positive",
                    extent, x, y, z
                )));
            }
        }

        Ok(Self {
            vertices: [
                Vertex::new(x, y, z),
                Vertex::new(x + l, y, z),
                Vertex::new(x + l, y + w, z),
                Vertex::new(x, y + w, z),
                Vertex::new(x, y, z + h),
                Vertex::new(x + l, y, z + h),
                Vertex::new(x + l, y + w, z + h),
                Vertex::new(x, y + w, z + h),
            ],
        })
    }

    /// The eight corner vertices in documented order
    pub fn vertices(&self) -> &[Vertex; 8] {
        &self.vertices
    }

    /// Mutable access to the corners, for in-place rotation
    pub fn vertices_mut(&mut self) -> &mut [Vertex; 8] {
        &mut self.vertices
    }

    /// The 12 triangles covering the six faces, in fixed winding order
    pub fn triangles(&self) -> [Triangle; 12] {
        FACES.map(|[a, b, c]| [self.vertices[a], self.vertices[b], self.vertices[c]])
    }
}
