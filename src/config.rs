//! Job configuration: the values a front end (CLI flags, a JSON job file) hands to the core.
//!
//! Nothing here touches pixels. Parsing helpers turn human-friendly strings (`1080p`, `1.5m`)
//! into the typed values [`JobConfig`] holds; [`JobConfig::validate`] checks them against the
//! loaded sheet before any rendering starts.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::codec::EncoderPreference;
use crate::foundation::core::{Canvas, FrameSelection};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::composite::validate_scale;
use crate::timeline::Playback;

/// Named output resolutions accepted by [`parse_resolution`].
pub const RESOLUTION_PRESETS: &[(&str, Canvas)] = &[
    (
        "720p",
        Canvas {
            width: 1280,
            height: 720,
        },
    ),
    (
        "1080p",
        Canvas {
            width: 1920,
            height: 1080,
        },
    ),
    (
        "2k",
        Canvas {
            width: 2560,
            height: 1440,
        },
    ),
    (
        "4k",
        Canvas {
            width: 3840,
            height: 2160,
        },
    ),
];

/// Everything one render job needs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Sprite sheet image.
    pub sheet: PathBuf,
    /// Width of one frame in the sheet, in pixels.
    pub frame_width: u32,
    /// First frame to use (1-based). Defaults to 1.
    #[serde(default)]
    pub start: Option<u32>,
    /// Last frame to use (1-based, inclusive). Defaults to the sheet's last frame.
    #[serde(default)]
    pub end: Option<u32>,
    /// Uniform scale applied to every frame.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Output resolution.
    pub canvas: Canvas,
    /// Total video length in seconds.
    pub duration_secs: f64,
    /// Seconds one pass through the frames takes. Defaults to `duration_secs`.
    #[serde(default)]
    pub cycle_secs: Option<f64>,
    /// Repeat the animation to fill the video instead of freezing on the last frame.
    #[serde(default, rename = "loop")]
    pub looped: bool,
    /// Output path; see [`JobConfig::resolved_out_path`].
    #[serde(default)]
    pub out: Option<PathBuf>,
    /// Codec order.
    #[serde(default)]
    pub encoder: EncoderPreference,
    /// Replace an existing output file.
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_scale() -> f64 {
    1.0
}

fn default_overwrite() -> bool {
    true
}

impl JobConfig {
    /// Minimal config with every optional value at its default.
    pub fn new(
        sheet: impl Into<PathBuf>,
        frame_width: u32,
        canvas: Canvas,
        duration_secs: f64,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            frame_width,
            start: None,
            end: None,
            scale: default_scale(),
            canvas,
            duration_secs,
            cycle_secs: None,
            looped: false,
            out: None,
            encoder: EncoderPreference::default(),
            overwrite: default_overwrite(),
        }
    }

    /// Read a JSON job file. Relative `sheet`/`out` paths resolve against the file's directory.
    pub fn from_json_file(path: &Path) -> SpriteResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read job file '{}'", path.display()))?;
        let mut cfg: Self = serde_json::from_str(&text).map_err(|e| {
            SpriteError::serde(format!("parse job file '{}': {e}", path.display()))
        })?;

        let root = path.parent().unwrap_or_else(|| Path::new(""));
        cfg.sheet = resolve_relative(root, &cfg.sheet);
        cfg.out = cfg.out.as_deref().map(|p| resolve_relative(root, p));
        Ok(cfg)
    }

    /// Serialize as pretty JSON (the format [`JobConfig::from_json_file`] reads).
    pub fn to_json_pretty(&self) -> SpriteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpriteError::serde(e.to_string()))
    }

    /// Check every value against a sheet holding `total_frames` frames and return the selection.
    pub fn validate(&self, total_frames: u32) -> SpriteResult<FrameSelection> {
        if self.frame_width == 0 {
            return Err(SpriteError::invalid_dimension(
                "per-frame width must be at least 1px",
            ));
        }
        if total_frames == 0 {
            return Err(SpriteError::empty_selection("sprite sheet holds no frames"));
        }
        validate_scale(self.scale)?;
        check_secs("duration", self.duration_secs)?;
        if let Some(cycle) = self.cycle_secs {
            check_secs("cycle", cycle)?;
        }

        let canvas = Canvas::new(self.canvas.width, self.canvas.height)?;
        if !canvas.width.is_multiple_of(2) || !canvas.height.is_multiple_of(2) {
            return Err(SpriteError::validation(format!(
                "canvas {}x{} must have even sides for yuv420p output",
                canvas.width, canvas.height
            )));
        }

        let selection = FrameSelection::new(
            self.start.unwrap_or(1),
            self.end.unwrap_or(total_frames),
        )?;
        selection.check_within(total_frames)?;
        Ok(selection)
    }

    /// Loop or freeze, from the `loop` flag.
    pub fn playback(&self) -> Playback {
        Playback::from_loop_flag(self.looped)
    }

    /// Output path: `out` with `.mp4` ensured, or the sheet path with its extension replaced.
    pub fn resolved_out_path(&self) -> PathBuf {
        match &self.out {
            Some(out) => ensure_mp4_extension(out),
            None => self.sheet.with_extension("mp4"),
        }
    }
}

fn check_secs(what: &str, secs: f64) -> SpriteResult<()> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(SpriteError::validation(format!(
            "{what} must be a positive number of seconds, got {secs}"
        )));
    }
    Ok(())
}

fn resolve_relative(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Append `.mp4` unless the path already ends in it (case-insensitive).
pub fn ensure_mp4_extension(path: &Path) -> PathBuf {
    let is_mp4 = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mp4"));
    if is_mp4 {
        return path.to_path_buf();
    }
    let mut s = path.as_os_str().to_owned();
    s.push(".mp4");
    PathBuf::from(s)
}

/// Parse `720p`, `1080p`, `2k`, `4k` or `WxH` (case-insensitive).
pub fn parse_resolution(text: &str) -> SpriteResult<Canvas> {
    let t = text.trim().to_ascii_lowercase();
    if let Some((_, canvas)) = RESOLUTION_PRESETS.iter().find(|(name, _)| *name == t) {
        return Ok(*canvas);
    }

    let (w, h) = t.split_once('x').ok_or_else(|| {
        SpriteError::validation(format!(
            "resolution '{text}' is not a preset (720p, 1080p, 2k, 4k) or WxH"
        ))
    })?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| SpriteError::validation(format!("resolution '{text}': {e}")))
    };
    Canvas::new(parse(w)?, parse(h)?)
}

/// Parse a duration: bare seconds (`4`, `2.5`) or suffixed `s`, `m`, `h` (`90s`, `1.5m`, `2h`).
pub fn parse_duration_secs(text: &str) -> SpriteResult<f64> {
    let t = text.trim().to_ascii_lowercase();
    let (num, mult) = match t.char_indices().last() {
        Some((i, 's')) => (&t[..i], 1.0),
        Some((i, 'm')) => (&t[..i], 60.0),
        Some((i, 'h')) => (&t[..i], 3600.0),
        _ => (t.as_str(), 1.0),
    };
    let v: f64 = num
        .trim()
        .parse()
        .map_err(|e| SpriteError::validation(format!("duration '{text}': {e}")))?;
    let secs = v * mult;
    check_secs("duration", secs)?;
    Ok(secs)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
