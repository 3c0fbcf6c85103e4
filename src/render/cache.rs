use crate::foundation::core::{Canvas, FrameSelection};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::composite::{composite_centered, validate_scale};
use crate::render::frame::FrameRGB;
use crate::sheet::decode::SpriteSheet;
use crate::sheet::slice::slice_horizontal;

/// The selected sheet frames, composited once and kept for the whole job.
///
/// Output videos index into this sequence (see [`crate::Timeline::base_index`]) instead of
/// re-compositing, so memory stays at `selection.len() * canvas.area()` no matter how long the
/// video is. Frames are never mutated after construction.
#[derive(Clone, Debug)]
pub struct BaseFrames {
    canvas: Canvas,
    frames: Vec<FrameRGB>,
}

impl BaseFrames {
    /// Slice `sheet` once and composite every frame in `selection`.
    #[tracing::instrument(skip(sheet), fields(sheet_w = sheet.width(), sheet_h = sheet.height()))]
    pub fn build(
        sheet: &SpriteSheet,
        frame_width: u32,
        selection: FrameSelection,
        canvas: Canvas,
        scale: f64,
    ) -> SpriteResult<Self> {
        validate_scale(scale)?;
        let sliced = slice_horizontal(sheet, frame_width)?;
        selection.check_within(sliced.len() as u32)?;

        let frames = sliced[selection.as_zero_based()]
            .iter()
            .map(|f| composite_centered(f, canvas, scale))
            .collect::<SpriteResult<Vec<_>>>()?;
        if frames.is_empty() {
            return Err(SpriteError::empty_selection(
                "frame selection produced no base frames",
            ));
        }

        tracing::info!(
            frames = frames.len(),
            bytes = frames.len() * canvas.area() * FrameRGB::CHANNELS,
            "base frames cached"
        );
        Ok(Self { canvas, frames })
    }

    /// Wrap pre-composited frames. All frames must match `canvas`.
    pub fn from_frames(canvas: Canvas, frames: Vec<FrameRGB>) -> SpriteResult<Self> {
        if frames.is_empty() {
            return Err(SpriteError::empty_selection("no base frames supplied"));
        }
        for f in &frames {
            f.validate()?;
            if f.width != canvas.width || f.height != canvas.height {
                return Err(SpriteError::validation(format!(
                    "base frame is {}x{}, canvas is {}x{}",
                    f.width, f.height, canvas.width, canvas.height
                )));
            }
        }
        Ok(Self { canvas, frames })
    }

    /// Canvas every frame was composited onto.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Number of base frames (`N`).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false` for a constructed cache.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow one base frame.
    pub fn get(&self, idx: usize) -> Option<&FrameRGB> {
        self.frames.get(idx)
    }

    /// Borrow every base frame in order.
    pub fn frames(&self) -> &[FrameRGB] {
        &self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
