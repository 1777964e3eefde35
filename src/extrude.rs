//! Layer extrusion: opaque texture pixels become thin shell boxes
//!
//! For one face region, every pixel of the source rectangle with a nonzero
//! alpha sample turns into a thin box anchored to the face plane. Fully
//! transparent pixels contribute no geometry at all.
//!
//! The in-plane extents are inflated by `2 * thickness` so the shell's
//! visual boundary stays aligned with the base box once the extrusion depth
//! is accounted for; the per-pixel step along each in-plane axis is the
//! inflated extent divided by the rectangle's pixel count, so each emitted
//! box covers exactly one step per in-plane axis and `thickness` along the
//! extrusion axis.

use crate::error::Result;
use crate::geometry::Cuboid;
use crate::mapping::FaceRegion;
use crate::texture::PixelBuffer;

/// Pixel indices visited along one rectangle axis, in traversal order
///
/// An ascending pair visits `from..to`; a descending pair visits
/// `from - 1` down to `to`, mirroring the face. Equal corners visit
/// nothing. Each axis of a rectangle is resolved independently.
fn pixel_run(from: u32, to: u32) -> Vec<u32> {
    if to > from {
        (from..to).collect()
    } else {
        (to..from).rev().collect()
    }
}

/// Extrude one face region against the given pixel buffer
///
/// Emits one thin box per opaque pixel, in row-major order over the
/// rectangle's traversal (all rows of the first column first). The output
/// is deterministic and order-stable for a given region and buffer.
///
/// # Errors
/// Propagates [`Error::SourceBounds`](crate::Error::SourceBounds) when the
/// rectangle addresses pixels outside the buffer and
/// [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) when the
/// region's extents or thickness are not strictly positive.
pub fn extrude_region(region: &FaceRegion, pixels: &dyn PixelBuffer) -> Result<Vec<Cuboid>> {
    let thickness = region.thickness;
    let inflated_u = region.extent_u + 2.0 * thickness;
    let inflated_v = region.extent_v + 2.0 * thickness;
    let step_u = inflated_u / region.extent_u;
    let step_v = inflated_v / region.extent_v;

    let (slot_u, slot_v) = region.axis.in_plane_slots();
    let start_u = region.center[slot_u] - inflated_u / 2.0;
    let start_v = region.center[slot_v] - inflated_v / 2.0;

    let columns = pixel_run(region.from_px.0, region.to_px.0);
    let rows = pixel_run(region.from_px.1, region.to_px.1);

    let mut cuboids = Vec::new();
    for (i, &column) in columns.iter().enumerate() {
        for (j, &row) in rows.iter().enumerate() {
            if pixels.opacity(column, row)? == 0 {
                continue;
            }
            let mut origin = region.center;
            origin[slot_u] = start_u + i as f64 * step_u;
            origin[slot_v] = start_v + j as f64 * step_v;

            let mut extents = [thickness; 3];
            extents[slot_u] = step_u;
            extents[slot_v] = step_v;

            cuboids.push(Cuboid::new(origin, extents)?);
        }
    }
    Ok(cuboids)
}
