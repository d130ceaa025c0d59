use super::*;

#[test]
fn centered_x_splits_slack_evenly() {
    assert_eq!(centered_x(1600, 600), 500);
    assert_eq!(centered_x(100, 101), 0);
    assert_eq!(centered_x(100, 140), -20);
}

#[test]
fn subtitle_sits_below_title() {
    let Ok(fonts) = FontSet::load(None) else {
        return;
    };
    let cfg = HeaderConfig::default();
    let mut canvas = RgbaImage::from_pixel(1600, 1060, image::Rgba([255, 255, 255, 255]));
    let [title, subtitle] = draw_header(&mut canvas, &cfg, &fonts).unwrap();

    assert_eq!(title.y, 20);
    assert_eq!(subtitle.y, 20 + i64::from(title.height) + 10);
    assert_eq!(title.x, centered_x(1600, title.width));
    assert_eq!(subtitle.x, centered_x(1600, subtitle.width));

    let dark = canvas
        .enumerate_pixels()
        .filter(|(_, y, p)| *y < 100 && p.0[0] < 128)
        .count();
    assert!(dark > 0, "header text was drawn");
}
