use super::*;

#[test]
fn escape_handles_markup_characters() {
    assert_eq!(
        escape(r#"Tom & Jerry <"Ltd"> 'x'"#),
        "Tom &amp; Jerry &lt;&quot;Ltd&quot;&gt; &apos;x&apos;"
    );
    assert_eq!(escape("Amélie"), "Amélie");
}

#[test]
fn finished_document_parses_with_usvg() {
    let mut doc = SvgDoc::new(100.0, 50.0);
    doc.rect(0.0, 0.0, 100.0, 50.0, Rgb::WHITE, None);
    doc.line(0.0, 0.0, 100.0, 50.0, Rgb::BLACK, 1.0);
    doc.polyline(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)], Rgb([0, 128, 0]), 1.5);
    doc.polygon(&[(0.0, 50.0), (50.0, 0.0), (100.0, 50.0)], Rgb([200, 0, 0]), 0.5);
    doc.circle(10.0, 10.0, 3.0, Rgb::BLACK, Some((Rgb::WHITE, 0.5)));
    doc.text(
        50.0,
        25.0,
        "Fish & Chips",
        TextStyle::new(10.0, Rgb::BLACK)
            .anchor(Anchor::Middle)
            .rotate(-90.0),
    );
    let markup = doc.finish();

    assert!(markup.contains("Fish &amp; Chips"));
    assert!(markup.contains(r#"text-anchor="middle""#));
    assert!(markup.contains(r#"transform="rotate(-90.00 50.00 25.00)""#));

    let tree = usvg::Tree::from_str(&markup, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 100.0);
    assert_eq!(tree.size().height(), 50.0);
}

#[test]
fn negative_rect_sizes_are_clamped() {
    let mut doc = SvgDoc::new(10.0, 10.0);
    doc.rect(5.0, 5.0, -3.0, 2.0, Rgb::BLACK, None);
    assert!(doc.finish().contains(r#"width="0.00""#));
}
