//! Body assembly: base boxes plus extruded shells per segment
//!
//! The figure stands on the z = 0 plane, facing +y, with the feet centered
//! around x = 8. Proportions are the fixed literal values of the 64-wide
//! skin convention; only the arm boxes differ between the classic and slim
//! variants.

use crate::error::Result;
use crate::extrude::extrude_region;
use crate::geometry::Cuboid;
use crate::mapping::segment_regions;
use crate::model::{ArmVariant, Segment, SegmentName, SkinModel};
use crate::texture::PixelBuffer;

/// The solid base box for one segment
///
/// # Errors
/// Never fails for the built-in proportion table; the `Result` only
/// reflects the box synthesizer's contract.
pub fn base_cuboid(name: SegmentName, variant: ArmVariant) -> Result<Cuboid> {
    let (origin, extents) = match (name, variant) {
        (SegmentName::Head, _) => ([4.0, 0.0, 24.0], [8.0, 8.0, 8.0]),
        (SegmentName::Torso, _) => ([4.0, 2.0, 12.0], [8.0, 4.0, 12.0]),
        (SegmentName::RightArm, ArmVariant::Classic) => ([0.0, 2.0, 12.0], [4.0, 4.0, 12.0]),
        (SegmentName::LeftArm, ArmVariant::Classic) => ([12.0, 2.0, 12.0], [4.0, 4.0, 12.0]),
        (SegmentName::RightArm, ArmVariant::Slim) => ([1.0, 2.0, 12.0], [3.0, 4.0, 12.0]),
        (SegmentName::LeftArm, ArmVariant::Slim) => ([12.0, 2.0, 12.0], [3.0, 4.0, 12.0]),
        (SegmentName::RightLeg, _) => ([4.0, 2.0, 0.0], [4.0, 4.0, 12.0]),
        (SegmentName::LeftLeg, _) => ([8.0, 2.0, 0.0], [4.0, 4.0, 12.0]),
    };
    Cuboid::new(origin, extents)
}

/// Build the complete unposed model for one texture and arm variant
///
/// Each segment gets its base box first, then every shell box the layer
/// extruder produces from the segment's six face regions, in table order.
///
/// # Errors
/// Propagates extruder errors, in particular
/// [`Error::SourceBounds`](crate::Error::SourceBounds) when a region's
/// rectangle does not fit the texture (e.g. limb overlays against a 64x32
/// raster).
pub fn assemble(
    texture: &dyn PixelBuffer,
    variant: ArmVariant,
    thickness: f64,
) -> Result<SkinModel> {
    let mut segments = Vec::with_capacity(SegmentName::ALL.len());
    for name in SegmentName::ALL {
        let mut cuboids = vec![base_cuboid(name, variant)?];
        for region in segment_regions(name, variant, thickness) {
            cuboids.extend(extrude_region(&region, texture)?);
        }
        segments.push(Segment::new(name, cuboids));
    }
    Ok(SkinModel { segments })
}
