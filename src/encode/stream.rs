use std::iter::FusedIterator;

use crate::encode::codec::{EncoderPreference, VideoCodec};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::cache::BaseFrames;
use crate::render::frame::FrameRGB;
use crate::timeline::Timeline;

/// Lazy, finite, single-use sequence of output frames.
///
/// Yields exactly [`Timeline::total_output_frames`] items in increasing index order. Each item is
/// a lookup into the base frames; nothing is recomputed. A consumed stream cannot be rewound:
/// callers that need to start over build a new one with [`FrameStream::new`].
#[derive(Debug)]
pub struct FrameStream<'a> {
    timeline: &'a Timeline,
    base: &'a BaseFrames,
    next: u64,
}

impl<'a> FrameStream<'a> {
    /// Start a fresh stream at output frame 0.
    pub fn new(timeline: &'a Timeline, base: &'a BaseFrames) -> SpriteResult<Self> {
        if timeline.base_frames() != base.len() {
            return Err(SpriteError::validation(format!(
                "timeline expects {} base frames, cache holds {}",
                timeline.base_frames(),
                base.len()
            )));
        }
        Ok(Self {
            timeline,
            base,
            next: 0,
        })
    }

    /// Frames not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.timeline.total_output_frames().saturating_sub(self.next)
    }
}

impl<'a> Iterator for FrameStream<'a> {
    type Item = (FrameIndex, &'a FrameRGB);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.timeline.total_output_frames() {
            return None;
        }
        let idx = FrameIndex(self.next);
        let frame = self.base.get(self.timeline.base_index(idx))?;
        self.next += 1;
        Some((idx, frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameStream<'_> {}
impl FusedIterator for FrameStream<'_> {}

/// Outcome of a successful [`StreamingEncoder::encode`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EncodeReport {
    /// Codec that produced the output.
    pub codec: VideoCodec,
    /// Frames written by the successful attempt.
    pub frames_written: u64,
    /// `codec: error` for every attempt that failed before the successful one.
    pub failed_attempts: Vec<String>,
}

impl EncodeReport {
    /// `true` when an earlier codec failed and a later one took over.
    pub fn used_fallback(&self) -> bool {
        !self.failed_attempts.is_empty()
    }
}

/// Progress callback: `(frames_sent, frames_total)`.
pub type ProgressFn<'p> = Box<dyn FnMut(u64, u64) + 'p>;

/// Streams a timeline into a [`FrameSink`], falling back between codecs.
///
/// Every attempt regenerates its frames from index 0 with a new [`FrameStream`], so a fallback
/// writes the same frame content the failed attempt would have written.
pub struct StreamingEncoder<'p> {
    preference: EncoderPreference,
    progress_every: u64,
    progress: Option<ProgressFn<'p>>,
}

impl<'p> StreamingEncoder<'p> {
    /// Default number of frames between progress reports.
    pub const DEFAULT_PROGRESS_EVERY: u64 = 50;

    /// Encoder trying codecs in `preference` order.
    pub fn new(preference: EncoderPreference) -> Self {
        Self {
            preference,
            progress_every: Self::DEFAULT_PROGRESS_EVERY,
            progress: None,
        }
    }

    /// Report progress every `n` frames (and on the last frame). `0` is treated as 1.
    pub fn with_progress_every(mut self, n: u64) -> Self {
        self.progress_every = n.max(1);
        self
    }

    /// Install a progress callback.
    pub fn with_progress(mut self, f: impl FnMut(u64, u64) + 'p) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    /// Encode `timeline` over `base` into `sink`.
    ///
    /// A failed attempt is aborted on the sink before the next codec starts. Only when the
    /// last codec also fails is [`SpriteError::EncodingFailed`] returned.
    #[tracing::instrument(skip_all, fields(frames = timeline.total_output_frames(), fps = timeline.fps()))]
    pub fn encode(
        &mut self,
        timeline: &Timeline,
        base: &BaseFrames,
        sink: &mut dyn FrameSink,
    ) -> SpriteResult<EncodeReport> {
        let canvas = base.canvas();
        let mut failed_attempts = Vec::new();
        let mut last_err = None;

        for &codec in self.preference.attempt_order() {
            let stream = FrameStream::new(timeline, base)?;
            let cfg = SinkConfig {
                width: canvas.width,
                height: canvas.height,
                fps: timeline.fps(),
                codec,
            };

            tracing::info!(%codec, "encode attempt started");
            match self.attempt(sink, cfg, stream) {
                Ok(frames_written) => {
                    tracing::info!(%codec, frames_written, "encode finished");
                    return Ok(EncodeReport {
                        codec,
                        frames_written,
                        failed_attempts,
                    });
                }
                Err(err) => {
                    sink.abort();
                    tracing::warn!(%codec, error = %err, "encode attempt failed");
                    failed_attempts.push(format!("{codec}: {err}"));
                    last_err = Some(err);
                }
            }
        }

        let cause =
            last_err.unwrap_or_else(|| SpriteError::encode("no encoder attempts were configured"));
        Err(SpriteError::encoding_failed(failed_attempts.join("; "), cause))
    }

    fn attempt(
        &mut self,
        sink: &mut dyn FrameSink,
        cfg: SinkConfig,
        stream: FrameStream<'_>,
    ) -> SpriteResult<u64> {
        let total = stream.remaining();
        sink.begin(cfg)?;

        let mut sent = 0u64;
        for (idx, frame) in stream {
            sink.push_frame(idx, frame)?;
            sent += 1;
            if sent.is_multiple_of(self.progress_every) || sent == total {
                tracing::debug!(sent, total, "frames sent");
                if let Some(progress) = self.progress.as_mut() {
                    progress(sent, total);
                }
            }
        }

        if sent != total {
            return Err(SpriteError::encode(format!(
                "stream ended after {sent} of {total} frames"
            )));
        }
        sink.end()?;
        Ok(sent)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/stream.rs"]
mod tests;
