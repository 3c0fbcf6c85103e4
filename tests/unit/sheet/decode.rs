use std::io::Cursor;

use super::*;

#[test]
fn decode_png_keeps_dimensions_and_straight_alpha() {
    let src = vec![100u8, 50, 200, 128, 1, 2, 3, 255];
    let img = RgbaImage::from_raw(2, 1, src.clone()).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let sheet = SpriteSheet::decode(&buf).unwrap();
    assert_eq!(sheet.width(), 2);
    assert_eq!(sheet.height(), 1);
    assert_eq!(sheet.image().as_raw(), &src);
}

#[test]
fn decode_garbage_is_wrapped_error() {
    let err = SpriteSheet::decode(b"not an image").unwrap_err();
    assert!(matches!(err, SpriteError::Other(_)));
}

#[test]
fn frame_count_floors_and_rejects_bad_widths() {
    let sheet = SpriteSheet::from_rgba(RgbaImage::new(100, 16)).unwrap();
    assert_eq!(sheet.frame_count(16).unwrap(), 6);
    assert_eq!(sheet.frame_count(100).unwrap(), 1);
    assert!(matches!(
        sheet.frame_count(0),
        Err(SpriteError::InvalidDimension(_))
    ));
    assert!(matches!(
        sheet.frame_count(101),
        Err(SpriteError::InvalidDimension(_))
    ));
}

#[test]
fn open_missing_file_mentions_path() {
    let err = SpriteSheet::open(Path::new("target/definitely-missing-sheet.png")).unwrap_err();
    assert!(err.to_string().contains("definitely-missing-sheet.png"));
}
