use std::fmt;

/// H.264 encoders the ffmpeg sink knows how to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoCodec {
    /// NVIDIA NVENC (`h264_nvenc`).
    H264Nvenc,
    /// x264 on the CPU (`libx264`).
    Libx264,
}

impl VideoCodec {
    /// Encoder name as passed to `ffmpeg -c:v`.
    pub fn ffmpeg_name(self) -> &'static str {
        match self {
            Self::H264Nvenc => "h264_nvenc",
            Self::Libx264 => "libx264",
        }
    }

    /// `true` for GPU encoders.
    pub fn is_hardware(self) -> bool {
        matches!(self, Self::H264Nvenc)
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ffmpeg_name())
    }
}

/// Which encoders to try, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderPreference {
    /// Hardware first, software if the hardware attempt fails.
    #[default]
    Auto,
    /// Hardware only.
    Hardware,
    /// Software only.
    Software,
}

impl EncoderPreference {
    /// Codecs to attempt, first to last.
    pub fn attempt_order(self) -> &'static [VideoCodec] {
        match self {
            Self::Auto => &[VideoCodec::H264Nvenc, VideoCodec::Libx264],
            Self::Hardware => &[VideoCodec::H264Nvenc],
            Self::Software => &[VideoCodec::Libx264],
        }
    }
}
