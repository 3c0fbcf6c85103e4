//! Sprite sheet loading and slicing.

/// Decoding sheets from files or bytes.
pub mod decode;
/// Partitioning a sheet into equal-width frames.
pub mod slice;
