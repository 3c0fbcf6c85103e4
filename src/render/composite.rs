use image::GenericImageView as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::foundation::math::{center_offset, mul_div255_u16, scaled_len};
use crate::render::frame::FrameRGB;
use crate::sheet::slice::SpriteFrame;

/// Canvas background. Transparent sprite pixels are flattened against it.
pub const BACKGROUND_RGB: [u8; 3] = [0, 0, 0];

/// Reject scale factors that are zero, negative, NaN or infinite.
pub fn validate_scale(scale: f64) -> SpriteResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(SpriteError::invalid_scale(format!(
            "scale must be a positive finite number, got {scale}"
        )));
    }
    Ok(())
}

/// Scale one sheet frame and center it on an opaque canvas.
///
/// Resampling is nearest-neighbor so pixel-art edges stay hard. The scaled frame is placed at
/// `((canvas - scaled) div 2)` on each axis; a frame larger than the canvas is cropped on every
/// side. Only canvas pixels the frame covers are sampled, so work and memory are bounded by the
/// canvas whatever the scale. Alpha is flattened over [`BACKGROUND_RGB`] and the result is packed
/// RGB8 of exactly the canvas size.
pub fn composite_centered(
    frame: &SpriteFrame<'_>,
    canvas: Canvas,
    scale: f64,
) -> SpriteResult<FrameRGB> {
    validate_scale(scale)?;
    let (src_w, src_h) = frame.dimensions();
    let scaled_w = scaled_len(src_w, scale);
    let scaled_h = scaled_len(src_h, scale);

    let mut out = FrameRGB::solid(canvas.width, canvas.height, BACKGROUND_RGB);

    let ox = center_offset(canvas.width, scaled_w);
    let oy = center_offset(canvas.height, scaled_h);

    // Canvas region covered by the scaled frame.
    let cx0 = ox.max(0);
    let cy0 = oy.max(0);
    let cx1 = (ox + i64::from(scaled_w)).min(i64::from(canvas.width));
    let cy1 = (oy + i64::from(scaled_h)).min(i64::from(canvas.height));

    let stride = canvas.width as usize * FrameRGB::CHANNELS;
    for cy in cy0..cy1 {
        let sy = nearest_source(cy - oy, src_h, scaled_h);
        let row = cy as usize * stride;
        for cx in cx0..cx1 {
            let sx = nearest_source(cx - ox, src_w, scaled_w);
            let i = row + cx as usize * FrameRGB::CHANNELS;
            let px = frame.get_pixel(sx, sy).0;
            flatten_over(&mut out.data[i..i + FrameRGB::CHANNELS], px);
        }
    }

    Ok(out)
}

/// Source coordinate shown at position `d` of a `src` long axis stretched to `scaled`.
fn nearest_source(d: i64, src: u32, scaled: u32) -> u32 {
    let s = (d as u64 * u64::from(src)) / u64::from(scaled);
    s.min(u64::from(src) - 1) as u32
}

/// Straight-alpha `src` over the opaque RGB already in `dst`.
fn flatten_over(dst: &mut [u8], src: [u8; 4]) {
    let a = u16::from(src[3]);
    if a == 255 {
        dst.copy_from_slice(&src[..3]);
        return;
    }
    if a == 0 {
        return;
    }

    let inv = 255 - a;
    for (d, &s) in dst.iter_mut().zip(&src[..3]) {
        let v = mul_div255_u16(u16::from(s), a) + mul_div255_u16(u16::from(*d), inv);
        *d = v.min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
