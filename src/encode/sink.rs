use crate::encode::codec::VideoCodec;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::SpriteResult;
use crate::render::frame::FrameRGB;

/// Configuration provided to a [`FrameSink`] at the start of each encode attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second (may be fractional).
    pub fps: f64,
    /// Encoder for this attempt.
    pub codec: VideoCodec,
}

/// Sink contract for consuming frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, starting
/// at 0, between one `begin` and one `end`. A sink may be begun again after `end` or `abort`;
/// each `begin` starts a fresh output.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> SpriteResult<()>;
    /// Called once after the last frame is pushed. Only a successful `end` means the output is
    /// complete.
    fn end(&mut self) -> SpriteResult<()>;
    /// Discard a failed attempt and anything it wrote. Must be safe to call in any state.
    fn abort(&mut self) {}
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGB)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGB)] {
        &self.frames
    }

    /// `true` once `end` has been called for the current output.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> SpriteResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        self.finished = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
        self.finished = false;
    }
}
