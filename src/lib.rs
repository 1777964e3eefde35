//! # skinmesh
//!
//! Convert fixed-layout character skin textures (the 64-wide Minecraft skin
//! convention) into posable, triangulated 3D models.
//!
//! The pipeline builds one solid base box per body segment plus a shell of
//! thin boxes extruded from the opaque pixels of the overlay texture layer,
//! optionally rotates each segment about its fixed pivot to pose the
//! figure, then flattens everything into a triangle list ready for STL
//! output.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Classic (4-wide) and slim (3-wide) arm variants
//! - Per-pixel shell extrusion gated on texture opacity
//! - Pivot-relative posing with a fixed per-segment axis order
//! - Binary and ASCII STL output
//!
//! ## Example
//!
//! ```no_run
//! use skinmesh::{apply_pose, write_stl_binary, ArmVariant, Pose, SkinModel, SkinTexture};
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! # fn main() -> skinmesh::Result<()> {
//! let texture = SkinTexture::open("skin.png")?;
//! let mut model = SkinModel::from_texture(&texture, ArmVariant::Classic)?;
//!
//! let pose = Pose {
//!     head_y: 15.0,
//!     right_arm_x: -45.0,
//!     ..Pose::default()
//! };
//! apply_pose(&mut model, &pose);
//!
//! let file = BufWriter::new(File::create("skin.stl")?);
//! write_stl_binary(file, &model.combined_triangles())?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod body;
pub mod error;
pub mod extrude;
pub mod geometry;
pub mod mapping;
pub mod model;
pub mod pose;
pub mod texture;
pub mod writer;

pub use error::{Error, Result};
pub use extrude::extrude_region;
pub use geometry::Cuboid;
pub use mapping::{segment_regions, FaceRegion, DEFAULT_SHELL_THICKNESS};
pub use model::{ArmVariant, Axis, Segment, SegmentName, SkinModel, Triangle, Vertex};
pub use pose::{apply_pose, rotate_segment, segment_pivot, Pose};
pub use texture::{PixelBuffer, SkinTexture};
pub use writer::{write_stl_ascii, write_stl_binary};

impl SkinModel {
    /// Build the unposed model for a texture with the default shell thickness
    ///
    /// # Arguments
    ///
    /// * `texture` - the decoded source raster
    /// * `variant` - classic or slim arm width
    ///
    /// # Example
    ///
    /// ```no_run
    /// use skinmesh::{ArmVariant, SkinModel, SkinTexture};
    ///
    /// # fn main() -> skinmesh::Result<()> {
    /// let texture = SkinTexture::open("skin.png")?;
    /// let model = SkinModel::from_texture(&texture, ArmVariant::Slim)?;
    /// println!("{} boxes", model.cuboid_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_texture(texture: &dyn PixelBuffer, variant: ArmVariant) -> Result<Self> {
        body::assemble(texture, variant, DEFAULT_SHELL_THICKNESS)
    }

    /// Build the unposed model with an explicit shell thickness
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] for a non-positive thickness and
    /// propagates texture addressing errors from the extruder.
    pub fn from_texture_with_thickness(
        texture: &dyn PixelBuffer,
        variant: ArmVariant,
        thickness: f64,
    ) -> Result<Self> {
        body::assemble(texture, variant, thickness)
    }
}
