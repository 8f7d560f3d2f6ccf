use bmi::{Bitmap, Component, Error, Flags, ImageFormat, Point, Rect, codec, export};

fn color_at(bmp: &Bitmap, x: u32, y: u32) -> Component {
    bmp.get_pixel(Point::new(x, y)).unwrap()
}

/// The face drawn by the demo program: yellow background, two eyes and a
/// mouth built from black rectangles.
fn smiley() -> Bitmap {
    let mut bmp = Bitmap::new(256, 256, Flags::empty()).unwrap();
    bmp.fill_rect(Rect::from_size(256, 256), Component::YELLOW);

    bmp.fill_rect(Rect::new(32, 32, 48, 48), Component::BLACK);
    bmp.fill_rect(Rect::new(176, 32, 48, 48), Component::BLACK);
    bmp.fill_rect(Rect::new(32, 124, 48, 96), Component::BLACK);
    bmp.fill_rect(Rect::new(180, 124, 48, 96), Component::BLACK);
    bmp.fill_rect(Rect::new(32, 172, 196, 48), Component::BLACK);
    bmp
}

#[test_log::test]
fn bordered_square() {
    let mut bmp = Bitmap::new(256, 256, Flags::empty()).unwrap();
    bmp.fill_rect(bmp.bounds(), Component::BLACK);
    bmp.stroke_rect(bmp.bounds(), 8, Component::RED);

    let interior = Rect::new(8, 8, 240, 240);
    for y in 0..256 {
        for x in 0..256 {
            let expected = if interior.contains(Point::new(x, y)) {
                Component::BLACK
            } else {
                Component::RED
            };
            assert_eq!(color_at(&bmp, x, y), expected, "at ({x}, {y})");
        }
    }
}

#[test]
fn concentric_rects() {
    let rings = [
        (Rect::new(0, 0, 256, 256), Component::RED),
        (Rect::new(16, 16, 224, 224), Component::ORANGE),
        (Rect::new(16, 16, 224, 224), Component::YELLOW),
        (Rect::new(32, 32, 192, 192), Component::GREEN),
        (Rect::new(48, 48, 160, 160), Component::BLUE),
        (Rect::new(64, 64, 128, 128), Component::MAGENTA),
        (Rect::new(80, 80, 96, 96), Component::CYAN),
        (Rect::new(96, 96, 64, 64), Component::WHITE),
        (Rect::new(112, 112, 32, 32), Component::rgb(128, 64, 32)),
    ];

    let mut bmp = Bitmap::new(256, 256, Flags::empty()).unwrap();
    bmp.fill_rect(bmp.bounds(), Component::BLACK);
    for (rect, color) in rings {
        bmp.stroke_rect(rect, 8, color);
    }

    // Sample each ring on its top band, and the gap between rings.
    assert_eq!(color_at(&bmp, 128, 0), Component::RED);
    assert_eq!(color_at(&bmp, 128, 10), Component::BLACK);
    assert_eq!(color_at(&bmp, 128, 16), Component::YELLOW);
    assert_eq!(color_at(&bmp, 128, 33), Component::GREEN);
    assert_eq!(color_at(&bmp, 128, 50), Component::BLUE);
    assert_eq!(color_at(&bmp, 128, 64), Component::MAGENTA);
    assert_eq!(color_at(&bmp, 128, 87), Component::CYAN);
    assert_eq!(color_at(&bmp, 128, 100), Component::WHITE);
    assert_eq!(color_at(&bmp, 128, 112), Component::rgb(128, 64, 32));
    assert_eq!(color_at(&bmp, 128, 128), Component::BLACK);

    let ppm = export::to_ppm(&bmp);
    assert!(ppm.starts_with(b"P6\n256 256\n255\n"));
    assert_eq!(ppm.len(), b"P6\n256 256\n255\n".len() + 256 * 256 * 3);
}

#[test]
fn smiley_round_trips_through_file_format() {
    let bmp = smiley();
    let bytes = codec::encode(&bmp);
    assert_eq!(ImageFormat::detect(&bytes), Some(ImageFormat::Bmi));

    let back = codec::read_from(bytes.as_slice()).unwrap();
    assert_eq!(back, bmp);
    assert_eq!(color_at(&back, 0, 0), Component::YELLOW);
    assert_eq!(color_at(&back, 40, 40), Component::BLACK);
    assert_eq!(color_at(&back, 128, 200), Component::BLACK);
    assert_eq!(color_at(&back, 128, 100), Component::YELLOW);

    // Exported PPM of the decoded bitmap equals the PPM of the source bitmap.
    assert_eq!(export::to_ppm(&back), export::to_ppm(&bmp));
}

#[test]
fn grayscale_point_scenario() {
    let mut bmp = Bitmap::new(4, 4, Flags::GRAYSCALE).unwrap();
    bmp.draw_point(Point::new(1, 1), Component::gray(200));
    for y in 0..4 {
        for x in 0..4 {
            let expected = if (x, y) == (1, 1) { 200 } else { 0 };
            assert_eq!(color_at(&bmp, x, y), Component::gray(expected));
        }
    }
}

#[test]
fn header_only_input_is_too_small() {
    let err = codec::decode(&[0x42, 0x4d, 0x49, 0x00, 1, 0, 0, 0]).unwrap_err();
    assert!(matches!(err, Error::TooSmall { len: 8 }));
}

#[test]
fn future_version_is_rejected() {
    let mut bytes = codec::encode(&Bitmap::new(1, 1, Flags::GRAYSCALE).unwrap());
    bytes[3] = bmi::Version::new(1, 0, 0).pack();
    let err = codec::decode(&bytes).unwrap_err();
    assert!(matches!(err, Error::VersionFuture(_)));
    assert_eq!(err.to_string(), "file has version 1.0.0 from the future");
}

#[test]
fn composite_decoded_sprite() {
    let mut sprite = Bitmap::new(8, 8, Flags::empty()).unwrap();
    sprite.fill_ellipse(sprite.bounds(), Component::CYAN);
    let sprite = codec::decode(&codec::encode(&sprite)).unwrap();

    let mut canvas = smiley();
    canvas.overdraw(Rect::new(124, 60, 8, 8), &sprite).unwrap();
    assert_eq!(color_at(&canvas, 128, 64), Component::CYAN);
    // Sprite corners are outside the ellipse and were copied as black.
    assert_eq!(color_at(&canvas, 124, 60), Component::BLACK);
    assert_eq!(color_at(&canvas, 123, 60), Component::YELLOW);

    let err = canvas
        .overdraw(Rect::new(0, 0, 9, 8), &sprite)
        .unwrap_err();
    assert!(matches!(err, Error::SizeMismatch { .. }));
}

#[test]
fn line_stops_before_endpoint() {
    let mut bmp = Bitmap::new(8, 8, Flags::empty()).unwrap();
    bmp.stroke_line(Point::new(0, 0), Point::new(4, 0), 1, Component::WHITE);
    for x in 0..4 {
        assert_eq!(color_at(&bmp, x, 0), Component::WHITE);
    }
    assert_eq!(color_at(&bmp, 4, 0), Component::BLACK);
}
