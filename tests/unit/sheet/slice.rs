use image::{GenericImageView, Rgba};

use super::*;
use crate::foundation::error::SpriteError;

/// Sheet whose column `x` is painted with red = x, so every slice is identifiable.
fn striped_sheet(width: u32, height: u32) -> SpriteSheet {
    let img = RgbaImage::from_fn(width, height, |x, _| Rgba([x as u8, 0, 0, 255]));
    SpriteSheet::from_rgba(img).unwrap()
}

#[test]
fn slices_are_ordered_full_height_and_non_overlapping() {
    let sheet = striped_sheet(40, 7);
    let frames = slice_horizontal(&sheet, 10).unwrap();
    assert_eq!(frames.len(), 4);

    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.dimensions(), (10, 7));
        assert_eq!(f.get_pixel(0, 0)[0], (i * 10) as u8);
        assert_eq!(f.get_pixel(9, 6)[0], (i * 10 + 9) as u8);
    }
}

#[test]
fn trailing_partial_column_is_dropped() {
    let sheet = striped_sheet(47, 3);
    let frames = slice_horizontal(&sheet, 10).unwrap();
    assert_eq!(frames.len(), 4);

    let covered: u32 = frames.iter().map(|f| f.width()).sum();
    assert!(covered <= sheet.width());
    assert_eq!(covered, 40);
}

#[test]
fn frame_count_matches_floor_division_for_many_widths() {
    let sheet = striped_sheet(96, 2);
    for w in 1..=96 {
        let frames = slice_horizontal(&sheet, w).unwrap();
        assert_eq!(frames.len() as u32, 96 / w);
        assert!(frames.iter().all(|f| f.height() == 2));
    }
}

#[test]
fn invalid_widths_are_rejected() {
    let sheet = striped_sheet(16, 4);
    assert!(matches!(
        slice_horizontal(&sheet, 0),
        Err(SpriteError::InvalidDimension(_))
    ));
    assert!(matches!(
        slice_horizontal(&sheet, 17),
        Err(SpriteError::InvalidDimension(_))
    ));
}
