use std::path::PathBuf;
use std::time::Instant;

use crate::config::JobConfig;
use crate::encode::codec::VideoCodec;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::FrameSink;
use crate::encode::stream::StreamingEncoder;
use crate::foundation::core::{Canvas, FrameSelection};
use crate::foundation::error::SpriteResult;
use crate::render::cache::BaseFrames;
use crate::sheet::decode::SpriteSheet;
use crate::timeline::{Playback, Timeline, TimelineSpec};

/// What a job will produce, derived before any frame is encoded.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderPlan {
    /// Sheet size in pixels.
    pub sheet_width: u32,
    /// Sheet height in pixels.
    pub sheet_height: u32,
    /// Whole frames in the sheet.
    pub sheet_frames: u32,
    /// Selected frames (1-based, inclusive).
    pub selection: FrameSelection,
    /// Output canvas.
    pub canvas: Canvas,
    /// Scale applied to every frame.
    pub scale: f64,
    /// Loop or freeze.
    pub playback: Playback,
    /// Derived output frame rate.
    pub fps: f64,
    /// Frames in the output video.
    pub output_frames: u64,
    /// Length implied by `output_frames / fps`.
    pub effective_secs: f64,
    /// Where the video is written.
    pub out_path: PathBuf,
}

/// Outcome of a finished job.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderReport {
    /// The plan that was executed.
    #[serde(flatten)]
    pub plan: RenderPlan,
    /// Codec that produced the output.
    pub codec: VideoCodec,
    /// `true` when the hardware attempt failed and software took over.
    pub fallback_used: bool,
    /// `codec: error` for every failed attempt.
    pub failed_attempts: Vec<String>,
    /// Wall-clock seconds spent caching and encoding.
    pub elapsed_secs: f64,
}

/// One sheet rendered to one video. Nothing is shared between jobs.
#[derive(Debug)]
pub struct RenderJob {
    config: JobConfig,
    sheet: SpriteSheet,
    selection: FrameSelection,
    sheet_frames: u32,
}

impl RenderJob {
    /// Load the sheet named by `config` and validate every value against it.
    #[tracing::instrument(skip(config), fields(sheet = %config.sheet.display()))]
    pub fn from_config(config: JobConfig) -> SpriteResult<Self> {
        let sheet = SpriteSheet::open(&config.sheet)?;
        Self::with_sheet(config, sheet)
    }

    /// Build a job around an already decoded sheet (`config.sheet` is only used for naming).
    pub fn with_sheet(config: JobConfig, sheet: SpriteSheet) -> SpriteResult<Self> {
        let sheet_frames = sheet.frame_count(config.frame_width)?;
        let selection = config.validate(sheet_frames)?;
        tracing::info!(
            sheet_frames,
            start = selection.start,
            end = selection.end,
            "job validated"
        );
        Ok(Self {
            config,
            sheet,
            selection,
            sheet_frames,
        })
    }

    /// The job's configuration.
    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// The decoded sheet.
    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    /// Derive the timeline without compositing anything.
    pub fn timeline(&self) -> SpriteResult<Timeline> {
        Timeline::build(TimelineSpec {
            base_frames: self.selection.len() as usize,
            total_secs: self.config.duration_secs,
            cycle_secs: self.config.cycle_secs,
            playback: self.config.playback(),
        })
    }

    /// Summarize what [`RenderJob::run`] would produce.
    pub fn plan(&self) -> SpriteResult<RenderPlan> {
        let timeline = self.timeline()?;
        Ok(self.plan_for(&timeline))
    }

    fn plan_for(&self, timeline: &Timeline) -> RenderPlan {
        RenderPlan {
            sheet_width: self.sheet.width(),
            sheet_height: self.sheet.height(),
            sheet_frames: self.sheet_frames,
            selection: self.selection,
            canvas: self.config.canvas,
            scale: self.config.scale,
            playback: timeline.playback(),
            fps: timeline.fps(),
            output_frames: timeline.total_output_frames(),
            effective_secs: timeline.effective_secs(),
            out_path: self.config.resolved_out_path(),
        }
    }

    /// Composite the selected frames once.
    pub fn base_frames(&self) -> SpriteResult<BaseFrames> {
        BaseFrames::build(
            &self.sheet,
            self.config.frame_width,
            self.selection,
            self.config.canvas,
            self.config.scale,
        )
    }

    /// Render to the configured MP4 path through the system `ffmpeg`.
    pub fn run(&self) -> SpriteResult<RenderReport> {
        self.run_with_progress(|_, _| {})
    }

    /// [`RenderJob::run`] with a `(sent, total)` progress callback.
    pub fn run_with_progress(
        &self,
        progress: impl FnMut(u64, u64),
    ) -> SpriteResult<RenderReport> {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts {
            out_path: self.config.resolved_out_path(),
            overwrite: self.config.overwrite,
        });
        self.run_into(&mut sink, progress)
    }

    /// Render into any sink (tests, previews).
    pub fn run_with_sink(&self, sink: &mut dyn FrameSink) -> SpriteResult<RenderReport> {
        self.run_into(sink, |_, _| {})
    }

    fn run_into(
        &self,
        sink: &mut dyn FrameSink,
        progress: impl FnMut(u64, u64),
    ) -> SpriteResult<RenderReport> {
        let started = Instant::now();

        // Both fail fast, before an encoder is ever started.
        let timeline = self.timeline()?;
        let base = self.base_frames()?;

        let encoded = StreamingEncoder::new(self.config.encoder)
            .with_progress(progress)
            .encode(&timeline, &base, sink)?;

        Ok(RenderReport {
            plan: self.plan_for(&timeline),
            codec: encoded.codec,
            fallback_used: encoded.used_fallback(),
            failed_attempts: encoded.failed_attempts,
            elapsed_secs: started.elapsed().as_secs_f64(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/job.rs"]
mod tests;
