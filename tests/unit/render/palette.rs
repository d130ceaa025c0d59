use super::*;

#[test]
fn hex_is_lowercase_rrggbb() {
    assert_eq!(Rgb([0x1f, 0x77, 0xb4]).hex(), "#1f77b4");
    assert_eq!(Rgb::WHITE.hex(), "#ffffff");
}

#[test]
fn tab20_spreads_small_counts() {
    assert!(tab20(0).is_empty());
    assert_eq!(tab20(1), vec![rgb(0x1f77b4)]);
    assert_eq!(tab20(2), vec![rgb(0x1f77b4), rgb(0x9edae5)]);
    assert_eq!(tab20(20), TAB20.to_vec());
}

#[test]
fn tab20_handles_more_layers_than_entries() {
    let colors = tab20(31);
    assert_eq!(colors.len(), 31);
    assert_eq!(colors[0], TAB20[0]);
    assert_eq!(colors[30], TAB20[19]);
}

#[test]
fn viridis_hits_stops_and_skips_endpoints() {
    assert_eq!(viridis_at(0.0), rgb(0x440154));
    assert_eq!(viridis_at(1.0), rgb(0xfde725));
    assert_eq!(viridis_at(0.5), rgb(0x21918c));

    let colors = viridis(3);
    assert_eq!(colors.len(), 3);
    assert_eq!(colors[1], viridis_at(0.5));
    assert_ne!(colors[0], viridis_at(0.0));
    assert_ne!(colors[2], viridis_at(1.0));
}
