use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{SpriteError, SpriteResult};

/// A decoded single-row sprite sheet, stored as straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Wrap an already decoded image.
    pub fn from_rgba(image: RgbaImage) -> SpriteResult<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SpriteError::invalid_dimension("sprite sheet has no pixels"));
        }
        Ok(Self { image })
    }

    /// Decode encoded image bytes (any format `image` supports).
    pub fn decode(bytes: &[u8]) -> SpriteResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode sprite sheet from memory")?;
        Self::from_rgba(dyn_img.to_rgba8())
    }

    /// Open and decode a sheet from disk.
    #[tracing::instrument]
    pub fn open(path: &Path) -> SpriteResult<Self> {
        let dyn_img = image::open(path)
            .with_context(|| format!("open sprite sheet '{}'", path.display()))?;
        let sheet = Self::from_rgba(dyn_img.to_rgba8())?;
        tracing::info!(
            width = sheet.width(),
            height = sheet.height(),
            "sprite sheet loaded"
        );
        Ok(sheet)
    }

    /// Sheet width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Sheet height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Number of whole frames of `frame_width` pixels; trailing columns are ignored.
    pub fn frame_count(&self, frame_width: u32) -> SpriteResult<u32> {
        if frame_width == 0 {
            return Err(SpriteError::invalid_dimension(
                "per-frame width must be at least 1px",
            ));
        }
        if frame_width > self.width() {
            return Err(SpriteError::invalid_dimension(format!(
                "per-frame width {frame_width}px exceeds sheet width {}px",
                self.width()
            )));
        }
        Ok(self.width() / frame_width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/decode.rs"]
mod tests;
