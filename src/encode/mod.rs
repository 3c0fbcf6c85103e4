//! Encoding: sinks, codec selection and the streaming encoder.
//!
//! Frames are produced lazily from the base-frame cache and pushed into a [`sink::FrameSink`]
//! in timeline order. The MP4 path goes through the system `ffmpeg` binary.

/// H.264 codec choices and fallback order.
pub mod codec;
/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// Lazy frame stream and the hardware -> software fallback driver.
pub mod stream;
