//! spritereel turns a single-row sprite sheet into an MP4 video.
//!
//! # Pipeline overview
//!
//! 1. **Slice**: `SpriteSheet -> [SpriteFrame]`, equal-width views, left to right
//! 2. **Composite**: each selected frame is nearest-neighbor scaled and centered on an opaque
//!    black canvas, once, into [`BaseFrames`]
//! 3. **Timeline**: `(N, duration, cycle, loop)` -> `fps = N / cycle` plus an output-index to
//!    base-index rule (cyclic for loops, hold-last-frame otherwise)
//! 4. **Encode**: a lazy [`FrameStream`] indexes into the base frames and feeds a [`FrameSink`];
//!    [`StreamingEncoder`] tries `h264_nvenc` first and restarts from frame 0 with `libx264` if
//!    that fails
//!
//! Memory is bounded by `selected_frames * canvas_area`, whatever the video length.
//!
//! ```no_run
//! use spritereel::{Canvas, JobConfig, RenderJob};
//!
//! let mut cfg = JobConfig::new("walk.png", 64, Canvas::new(1920, 1080)?, 4.0);
//! cfg.looped = true;
//! cfg.cycle_secs = Some(1.0);
//! let report = RenderJob::from_config(cfg)?.run()?;
//! println!("{} frames at {} fps", report.plan.output_frames, report.plan.fps);
//! # Ok::<(), spritereel::SpriteError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Job configuration and human-friendly value parsing.
pub mod config;
pub mod encode;
/// Render job orchestration.
pub mod job;
pub mod render;
pub mod sheet;
/// Frame-rate derivation and output-to-base index mapping.
pub mod timeline;

pub use crate::foundation::core::{Canvas, FrameIndex, FrameSelection};
pub use crate::foundation::error::{SpriteError, SpriteResult};

pub use crate::config::{
    JobConfig, RESOLUTION_PRESETS, ensure_mp4_extension, parse_duration_secs, parse_resolution,
};
pub use crate::encode::codec::{EncoderPreference, VideoCodec};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::stream::{EncodeReport, FrameStream, ProgressFn, StreamingEncoder};
pub use crate::job::{RenderJob, RenderPlan, RenderReport};
pub use crate::render::cache::BaseFrames;
pub use crate::render::composite::{BACKGROUND_RGB, composite_centered, validate_scale};
pub use crate::render::frame::FrameRGB;
pub use crate::sheet::decode::SpriteSheet;
pub use crate::sheet::slice::{SpriteFrame, slice_horizontal};
pub use crate::timeline::{Playback, Timeline, TimelineSpec};
