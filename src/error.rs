//! Error types for skin mesh generation
//!
//! All errors carry an error code for categorization. Every failure in this
//! crate is a programming or data-contract violation, never a transient
//! condition, so nothing here is retried: errors propagate straight to the
//! caller and no partial model file is ever produced.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and image decoding errors
//! - **E2xxx**: geometry and texture-layout contract violations
//! - **E3xxx**: source raster addressing errors

use std::io;
use thiserror::Error;

/// Result type for skin mesh operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a skin model
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the texture or writing the model
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Texture file not found
    /// - Insufficient permissions on the output path
    /// - Disk write error
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source raster could not be decoded
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - File is not a PNG
    /// - Truncated or corrupted image data
    #[error("[E1002] image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// A box was requested with a non-positive extent
    ///
    /// **Error Code**: E2001
    ///
    /// Box extents must be strictly positive; a zero or negative length,
    /// width, or height violates the synthesizer's caller contract.
    #[error("[E2001] invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An axis name outside the three principal axes
    ///
    /// **Error Code**: E2002
    #[error("[E2002] invalid axis: {0:?} (expected \"x\", \"y\", or \"z\")")]
    InvalidAxis(String),

    /// The decoded raster does not match the fixed skin layout
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Image narrower than 64 columns
    /// - Image shorter than 32 rows
    #[error("[E2003] invalid texture: {0}")]
    InvalidTexture(String),

    /// A texture-table rectangle addressed a pixel outside the raster
    ///
    /// **Error Code**: E3001
    ///
    /// Surfaced when a face region's source rectangle does not fit the
    /// decoded texture, e.g. a limb overlay rectangle against a 64x32
    /// raster that only carries the upper layout half.
    #[error(
        "[E3001] source pixel out of bounds: column {column}, row {row} \
         (texture is {width}x{height})"
    )]
    SourceBounds {
        /// Requested column
        column: u32,
        /// Requested row
        row: u32,
        /// Raster width in samples
        width: u32,
        /// Raster height in samples
        height: u32,
    },
}
