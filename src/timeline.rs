use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SpriteError, SpriteResult};

/// What happens once the base sequence has played through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Playback {
    /// Repeat the base sequence cyclically until the video ends.
    Loop,
    /// Play the base sequence once, then hold its last frame.
    #[default]
    Freeze,
}

impl Playback {
    /// `Loop` when `looped`, otherwise `Freeze`.
    pub fn from_loop_flag(looped: bool) -> Self {
        if looped { Self::Loop } else { Self::Freeze }
    }
}

/// Inputs to [`Timeline::build`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSpec {
    /// Number of base frames (`N`).
    pub base_frames: usize,
    /// Total video duration in seconds (`D`).
    pub total_secs: f64,
    /// Seconds one pass through the base frames takes (`A`); defaults to `total_secs`.
    pub cycle_secs: Option<f64>,
    /// Loop or freeze after the first pass.
    pub playback: Playback,
}

/// Derived frame rate plus the output-index to base-index rule.
///
/// `fps = N / A` for both policies. The output holds `round(D * fps)` frames; that is the only
/// place a rounding step happens.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    fps: f64,
    total_frames: u64,
    base_frames: usize,
    playback: Playback,
}

impl Timeline {
    /// Derive a timeline.
    ///
    /// Fails with [`SpriteError::EmptySelection`] when `N == 0` and with
    /// [`SpriteError::Domain`] when a duration is not a positive finite number or when the
    /// video would hold no frames at all.
    #[tracing::instrument]
    pub fn build(spec: TimelineSpec) -> SpriteResult<Self> {
        if spec.base_frames == 0 {
            return Err(SpriteError::empty_selection(
                "timeline needs at least one base frame",
            ));
        }
        check_positive("total duration", spec.total_secs)?;
        let cycle = spec.cycle_secs.unwrap_or(spec.total_secs);
        check_positive("animation cycle duration", cycle)?;

        let fps = spec.base_frames as f64 / cycle;
        if !fps.is_finite() {
            return Err(SpriteError::domain(format!(
                "{} frames over {cycle}s gives a non-finite frame rate",
                spec.base_frames
            )));
        }

        let frames = (spec.total_secs * fps).round();
        if !frames.is_finite() || frames >= u64::MAX as f64 {
            return Err(SpriteError::domain(format!(
                "{}s at {fps} fps overflows the frame counter",
                spec.total_secs
            )));
        }
        if frames < 1.0 {
            return Err(SpriteError::domain(format!(
                "{}s at {fps} fps rounds to zero output frames",
                spec.total_secs
            )));
        }

        let timeline = Self {
            fps,
            total_frames: frames as u64,
            base_frames: spec.base_frames,
            playback: spec.playback,
        };
        tracing::info!(
            fps = timeline.fps,
            output_frames = timeline.total_frames,
            playback = ?timeline.playback,
            "timeline derived"
        );
        Ok(timeline)
    }

    /// Output frame rate, unrounded.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Number of frames the video holds.
    pub fn total_output_frames(&self) -> u64 {
        self.total_frames
    }

    /// Number of base frames the timeline indexes into.
    pub fn base_frames(&self) -> usize {
        self.base_frames
    }

    /// Loop or freeze.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Video length implied by the rounded frame count.
    pub fn effective_secs(&self) -> f64 {
        self.total_frames as f64 / self.fps
    }

    /// Map an output frame to the base frame it shows.
    ///
    /// Total over every index: indices past the end follow the same rule.
    pub fn base_index(&self, idx: FrameIndex) -> usize {
        let n = self.base_frames as u64;
        let i = match self.playback {
            Playback::Loop => idx.0 % n,
            Playback::Freeze => idx.0.min(n - 1),
        };
        i as usize
    }
}

fn check_positive(what: &str, secs: f64) -> SpriteResult<()> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(SpriteError::domain(format!(
            "{what} must be a positive number of seconds, got {secs}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/timeline.rs"]
mod tests;
