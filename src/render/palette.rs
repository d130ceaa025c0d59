/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }
}

const fn rgb(hex: u32) -> Rgb {
    Rgb([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
}

const TAB20: [Rgb; 20] = [
    rgb(0x1f77b4),
    rgb(0xaec7e8),
    rgb(0xff7f0e),
    rgb(0xffbb78),
    rgb(0x2ca02c),
    rgb(0x98df8a),
    rgb(0xd62728),
    rgb(0xff9896),
    rgb(0x9467bd),
    rgb(0xc5b0d5),
    rgb(0x8c564b),
    rgb(0xc49c94),
    rgb(0xe377c2),
    rgb(0xf7b6d2),
    rgb(0x7f7f7f),
    rgb(0xc7c7c7),
    rgb(0xbcbd22),
    rgb(0xdbdb8d),
    rgb(0x17becf),
    rgb(0x9edae5),
];

const VIRIDIS_STOPS: [Rgb; 9] = [
    rgb(0x440154),
    rgb(0x472d7b),
    rgb(0x3b528b),
    rgb(0x2c728e),
    rgb(0x21918c),
    rgb(0x28ae80),
    rgb(0x5ec962),
    rgb(0xaddc30),
    rgb(0xfde725),
];

/// `n` colors spread evenly across the 20-entry `tab20` table.
///
/// Matches how a listed colormap is sampled at `linspace(0, 1, n)`: with few layers, colors come
/// from distant entries instead of adjacent light/dark pairs.
pub fn tab20(n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![TAB20[0]],
        _ => (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                TAB20[((t * TAB20.len() as f64) as usize).min(TAB20.len() - 1)]
            })
            .collect(),
    }
}

/// Continuous viridis lookup, `t` in `[0, 1]`.
pub fn viridis_at(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let span = (VIRIDIS_STOPS.len() - 1) as f64;
    let pos = t * span;
    let i = (pos.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    VIRIDIS_STOPS[i].lerp(VIRIDIS_STOPS[i + 1], pos - i as f64)
}

/// `n` discrete viridis colors, endpoints excluded.
pub fn viridis(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| viridis_at((i + 1) as f64 / (n + 1) as f64))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
