use std::ffi::OsString;
use std::io::{Read, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::frame::FrameRGB;

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl FfmpegSinkOpts {
    /// Create options for outputting an MP4 to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams raw `rgb24` frames to its stdin.
///
/// Output is H.264 in MP4 with `yuv420p` chroma for broad player support. The encoder comes
/// from [`SinkConfig::codec`], so the same sink can be begun again with another codec after an
/// [`abort`](FrameSink::abort).
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    spawned: bool,
}

impl FfmpegSink {
    /// Create a new sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            cfg: None,
            last_idx: None,
            spawned: false,
        }
    }

    /// Output path this sink writes.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }

    /// Reap a child that stopped reading and fold its stderr into the error message.
    fn exited_early(&mut self, msg: String) -> SpriteError {
        drop(self.stdin.take());
        let status = self.child.take().and_then(|mut c| c.wait().ok());
        let stderr = self.join_stderr().unwrap_or_default();
        let stderr = String::from_utf8_lossy(&stderr);
        match status {
            Some(status) => SpriteError::encode(format!(
                "{msg} (ffmpeg exited with status {status}: {})",
                stderr.trim()
            )),
            None => SpriteError::encode(msg),
        }
    }

    fn join_stderr(&mut self) -> SpriteResult<Vec<u8>> {
        match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SpriteError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| SpriteError::encode(format!("ffmpeg stderr read failed: {e}"))),
            None => Ok(Vec::new()),
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()> {
        validate_sink_config(&cfg)?;

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(SpriteError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(SpriteError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.args(ffmpeg_args(&self.opts, &cfg))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        tracing::debug!(codec = %cfg.codec, out = %self.opts.out_path.display(), "spawning ffmpeg");
        let mut child = cmd.spawn().map_err(|e| {
            SpriteError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        self.spawned = true;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SpriteError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| SpriteError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGB) -> SpriteResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| SpriteError::encode("ffmpeg sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(SpriteError::encode(
                "ffmpeg sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(SpriteError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        frame.validate()?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(SpriteError::encode("ffmpeg sink is already finalized"));
        };

        if let Err(e) = stdin.write_all(&frame.data) {
            // A broken pipe usually means ffmpeg already exited (e.g. codec unavailable).
            return Err(self.exited_early(format!("failed to write frame to ffmpeg stdin: {e}")));
        }
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| SpriteError::encode("ffmpeg sink not started"))?;

        let status = child.wait().map_err(|e| {
            SpriteError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = self.join_stderr()?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(SpriteError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        self.cfg = None;
        self.spawned = false;
        Ok(())
    }

    fn abort(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if let Ok(stderr) = self.join_stderr()
            && !stderr.is_empty()
        {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&stderr).trim(),
                "ffmpeg output from aborted attempt"
            );
        }

        if self.spawned
            && self.opts.out_path.exists()
            && let Err(e) = std::fs::remove_file(&self.opts.out_path)
        {
            tracing::warn!(
                out = %self.opts.out_path.display(),
                error = %e,
                "failed to remove partial output"
            );
        }

        self.cfg = None;
        self.last_idx = None;
        self.spawned = false;
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if self.child.is_some() {
            self.abort();
        }
    }
}

fn validate_sink_config(cfg: &SinkConfig) -> SpriteResult<()> {
    if !cfg.fps.is_finite() || cfg.fps <= 0.0 {
        return Err(SpriteError::validation(format!(
            "fps must be positive and finite, got {}",
            cfg.fps
        )));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(SpriteError::validation(
            "ffmpeg sink width/height must be non-zero",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(SpriteError::validation(
            "ffmpeg sink width/height must be even (required for yuv420p mp4 output)",
        ));
    }
    Ok(())
}

/// Full `ffmpeg` argument list for one attempt.
fn ffmpeg_args(opts: &FfmpegSinkOpts, cfg: &SinkConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    args.push(if opts.overwrite { "-y" } else { "-n" }.into());

    // Input: packed rgb24 frames; `-r` before `-i` sets the input frame rate.
    for a in [
        "-loglevel",
        "error",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgb24",
        "-s",
    ] {
        args.push(a.into());
    }
    args.push(format!("{}x{}", cfg.width, cfg.height).into());
    args.push("-r".into());
    args.push(cfg.fps.to_string().into());
    args.push("-i".into());
    args.push("pipe:0".into());

    // Output: h264 + yuv420p for broad compatibility.
    for a in [
        "-an",
        "-c:v",
        cfg.codec.ffmpeg_name(),
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ] {
        args.push(a.into());
    }
    args.push(opts.out_path.clone().into_os_string());
    args
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SpriteResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
