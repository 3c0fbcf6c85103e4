use crate::foundation::error::{SpriteError, SpriteResult};

/// 0-based index of an output (timeline) frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Closed, 1-based, inclusive range of sheet frames (`start..=end`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSelection {
    /// First selected frame (1-based).
    pub start: u32,
    /// Last selected frame (1-based, inclusive).
    pub end: u32,
}

impl FrameSelection {
    /// Build a selection; `start` must be >= 1 and not after `end`.
    pub fn new(start: u32, end: u32) -> SpriteResult<Self> {
        if start == 0 {
            return Err(SpriteError::validation(
                "frame selection is 1-based; start must be >= 1",
            ));
        }
        if end < start {
            return Err(SpriteError::empty_selection(format!(
                "frame selection {start}..={end} contains no frames"
            )));
        }
        Ok(Self { start, end })
    }

    /// Select every frame of a sheet holding `total` frames.
    pub fn all(total: u32) -> SpriteResult<Self> {
        Self::new(1, total)
    }

    /// Number of selected frames.
    pub fn len(self) -> u32 {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).saturating_add(1)
    }

    /// `true` when the selection holds no frames (only reachable through struct literals).
    pub fn is_empty(self) -> bool {
        self.end < self.start
    }

    /// Verify the selection fits a sheet holding `total` frames.
    pub fn check_within(self, total: u32) -> SpriteResult<()> {
        if self.start == 0 || self.end > total {
            return Err(SpriteError::validation(format!(
                "frame selection {}..={} is outside the sheet's 1..={total} frames",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// 0-based half-open index range into a sliced sheet.
    pub fn as_zero_based(self) -> std::ops::Range<usize> {
        (self.start as usize).saturating_sub(1)..self.end as usize
    }
}

/// Output canvas size in pixels. The background is always opaque black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> SpriteResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpriteError::invalid_dimension(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Same canvas with width and height exchanged (portrait output).
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Pixel count.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}
