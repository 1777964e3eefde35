//! Shared texture doubles for integration tests

use skinmesh::{Error, PixelBuffer, Result};

/// A texture with one uniform alpha value everywhere
pub struct UniformTexture {
    pub width: u32,
    pub height: u32,
    pub alpha: u8,
}

impl UniformTexture {
    pub fn opaque() -> Self {
        Self {
            width: 64,
            height: 64,
            alpha: 255,
        }
    }

    pub fn transparent() -> Self {
        Self {
            width: 64,
            height: 64,
            alpha: 0,
        }
    }
}

impl PixelBuffer for UniformTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn opacity(&self, column: u32, row: u32) -> Result<u8> {
        if column >= self.width || row >= self.height {
            return Err(Error::SourceBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.alpha)
    }
}
