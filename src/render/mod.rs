//! Compositing sheet frames onto the output canvas.

/// Base-frame cache built once per job.
pub mod cache;
/// Centered nearest-neighbor compositing.
pub mod composite;
/// Packed RGB8 frame buffers.
pub mod frame;
