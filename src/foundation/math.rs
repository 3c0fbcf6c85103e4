pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Scaled length for nearest-neighbor resampling; never collapses below one pixel.
pub(crate) fn scaled_len(len: u32, scale: f64) -> u32 {
    let v = (f64::from(len) * scale).round();
    if v < 1.0 {
        1
    } else if v >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        v as u32
    }
}

/// Floor-divided offset that centers `content` inside `container`. Negative when content overflows.
pub(crate) fn center_offset(container: u32, content: u32) -> i64 {
    (i64::from(container) - i64::from(content)).div_euclid(2)
}
