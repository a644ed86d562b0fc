//! Diverging red-yellow-green color scale for zone fill levels.
//!
//! Colors are `[r, g, b]` bytes so the scene stays independent of the
//! drawing backend.

/// ColorBrewer RdYlGn, 11 classes, red (empty) to green (full)
const RD_YL_GN: [[u8; 3]; 11] = [
    [0xa5, 0x00, 0x26],
    [0xd7, 0x30, 0x27],
    [0xf4, 0x6d, 0x43],
    [0xfd, 0xae, 0x61],
    [0xfe, 0xe0, 0x8b],
    [0xff, 0xff, 0xbf],
    [0xd9, 0xef, 0x8b],
    [0xa6, 0xd9, 0x6a],
    [0x66, 0xbd, 0x63],
    [0x1a, 0x98, 0x50],
    [0x00, 0x68, 0x37],
];

/// Map a fill fraction to the red-yellow-green scale.
///
/// `t` is clamped to [0.0, 1.0]; NaN maps to the empty end.
pub fn fill_color(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (RD_YL_GN.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    if lower >= RD_YL_GN.len() - 1 {
        return RD_YL_GN[RD_YL_GN.len() - 1];
    }
    let s = scaled - lower as f64;
    lerp(RD_YL_GN[lower], RD_YL_GN[lower + 1], s)
}

/// Darken a color by `factor` (1.0 = unchanged)
pub fn shade(rgb: [u8; 3], factor: f64) -> [u8; 3] {
    let factor = factor.clamp(0.0, 1.0);
    rgb.map(|c| (c as f64 * factor).round() as u8)
}

fn lerp(a: [u8; 3], b: [u8; 3], s: f64) -> [u8; 3] {
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = a[i] as f64 + (b[i] as f64 - a[i] as f64) * s;
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
