use crate::foundation::error::{SpriteError, SpriteResult};

/// An opaque frame as packed RGB8 pixels (`rgb24` in ffmpeg terms).
///
/// Every frame handed to a sink has this layout: no alpha channel, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, `width * height * 3` long.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// A frame filled with a single color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let px = width as usize * height as usize;
        let mut data = Vec::with_capacity(px * Self::CHANNELS);
        for _ in 0..px {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Read one pixel; `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Check that `data` matches the declared size.
    pub fn validate(&self) -> SpriteResult<()> {
        let expected = self.width as usize * self.height as usize * Self::CHANNELS;
        if self.data.len() != expected {
            return Err(SpriteError::validation(format!(
                "frame data is {} bytes, expected {expected} for {}x{} rgb8",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Convert into an `image` buffer (for PNG export).
    pub fn into_image(self) -> SpriteResult<image::RgbImage> {
        let (w, h) = (self.width, self.height);
        image::RgbImage::from_raw(w, h, self.data).ok_or_else(|| {
            SpriteError::validation(format!("frame data does not fit {w}x{h} rgb8"))
        })
    }
}
