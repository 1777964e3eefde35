//! Source texture access
//!
//! The extruder only ever asks one question of the texture: the alpha
//! sample at a (column, row) address. [`PixelBuffer`] is that seam, so the
//! geometry pipeline never touches the `image` crate directly and tests can
//! substitute synthetic buffers.

use crate::error::{Error, Result};
use image::RgbaImage;
use std::path::Path;

/// Minimum raster width of the fixed skin layout
pub const MIN_WIDTH: u32 = 64;

/// Minimum raster height (64x32 is the layout's legacy single-layer half)
pub const MIN_HEIGHT: u32 = 32;

/// Read-only, pixel-addressable view of the decoded source texture
pub trait PixelBuffer {
    /// Raster width in samples
    fn width(&self) -> u32;

    /// Raster height in samples
    fn height(&self) -> u32;

    /// Alpha sample at (column, row); any nonzero value is opaque
    ///
    /// # Errors
    /// Returns [`Error::SourceBounds`] when the address lies outside the
    /// raster. That is always a table/caller contract violation and is
    /// never recovered internally.
    fn opacity(&self, column: u32, row: u32) -> Result<u8>;
}

/// A skin texture decoded from a PNG into RGBA samples
#[derive(Debug, Clone)]
pub struct SkinTexture {
    image: RgbaImage,
}

impl SkinTexture {
    /// Decode a skin texture from a PNG file
    ///
    /// # Errors
    /// Returns [`Error::Io`] / [`Error::Image`] for unreadable or
    /// undecodable files and [`Error::InvalidTexture`] when the raster is
    /// smaller than the 64-wide layout allows.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::ImageReader::open(path)?.decode()?;
        Self::from_image(image.to_rgba8())
    }

    /// Wrap an already-decoded RGBA raster
    ///
    /// # Errors
    /// Returns [`Error::InvalidTexture`] when the raster is smaller than
    /// 64x32.
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(Error::InvalidTexture(format!(
                "raster is {}x{}, but the skin layout requires at least {}x{}",
                width, height, MIN_WIDTH, MIN_HEIGHT
            )));
        }
        Ok(Self { image })
    }
}

impl PixelBuffer for SkinTexture {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn opacity(&self, column: u32, row: u32) -> Result<u8> {
        let (width, height) = self.image.dimensions();
        if column >= width || row >= height {
            return Err(Error::SourceBounds {
                column,
                row,
                width,
                height,
            });
        }
        Ok(self.image.get_pixel(column, row).0[3])
    }
}
