use image::{RgbaImage, SubImage, imageops};

use crate::foundation::error::SpriteResult;
use crate::sheet::decode::SpriteSheet;

/// A borrowed view of one frame inside a [`SpriteSheet`].
pub type SpriteFrame<'a> = SubImage<&'a RgbaImage>;

/// Split `sheet` into `width / frame_width` frames, left to right.
///
/// Every frame is `frame_width` wide and as tall as the sheet. Columns past the last whole frame
/// are dropped. Frames borrow the sheet; no pixels are copied here.
pub fn slice_horizontal(sheet: &SpriteSheet, frame_width: u32) -> SpriteResult<Vec<SpriteFrame<'_>>> {
    let total = sheet.frame_count(frame_width)?;
    let height = sheet.height();

    Ok((0..total)
        .map(|i| imageops::crop_imm(sheet.image(), i * frame_width, 0, frame_width, height))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/slice.rs"]
mod tests;
