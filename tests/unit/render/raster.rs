use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="6" viewBox="0 0 10 6"><rect x="0" y="0" width="10" height="6" fill="#ffffff"/><rect x="0" y="0" width="5" height="6" fill="#ff0000"/></svg>"##;

#[test]
fn rasterize_scales_document_units() {
    let img = rasterize_svg(SQUARE, &usvg::Options::default(), 3.0).unwrap();
    assert_eq!(img.dimensions(), (30, 18));
    assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(27, 15).0, [255, 255, 255, 255]);
}

#[test]
fn rasterize_rejects_bad_markup_and_sizes() {
    assert!(matches!(
        rasterize_svg("<svg", &usvg::Options::default(), 1.0),
        Err(CinetrendError::Render(_))
    ));
    assert!(rasterize_svg(SQUARE, &usvg::Options::default(), 10_000.0).is_err());
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = vec![64u8, 0, 32, 128, 10, 20, 30, 255, 0, 0, 0, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 0, 64, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..12], &[0, 0, 0, 0]);
}

#[test]
fn write_png_creates_parent_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("chart.png");
    let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([1, 2, 3, 255]));
    write_png(&path, &img, 300).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 3));
    assert_eq!(back.get_pixel(0, 0).0, [1, 2, 3, 255]);
}

fn phys_chunk(bytes: &[u8]) -> Option<&[u8]> {
    let at = bytes.windows(4).position(|w| w == b"pHYs")?;
    bytes.get(at + 4..at + 13)
}

#[test]
fn png_records_dpi_as_pixels_per_metre() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("chart.png");
    write_png(&path, &image::RgbaImage::new(2, 2), 300).unwrap();

    // 300 dpi is 11811 pixels per metre, unit byte 1 = metre.
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(
        phys_chunk(&bytes),
        Some(&[0, 0, 0x2e, 0x23, 0, 0, 0x2e, 0x23, 1][..])
    );
}

#[test]
fn rgb_png_keeps_three_channels() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("composite.png");
    let img = image::RgbImage::from_pixel(3, 2, image::Rgb([9, 8, 7]));
    write_rgb_png(&path, &img, 72).unwrap();

    let back = image::open(&path).unwrap();
    assert_eq!(back.color(), image::ColorType::Rgb8);
    assert_eq!(back.to_rgb8().get_pixel(2, 1).0, [9, 8, 7]);
    // 72 dpi is 2835 pixels per metre.
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(
        phys_chunk(&bytes),
        Some(&[0, 0, 0x0b, 0x13, 0, 0, 0x0b, 0x13, 1][..])
    );
}
