// File: crates/heatmap-core/src/color.rs
// Summary: RGB color type and the red-yellow-blue diverging palette (uniform B-spline ramp).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Round and clamp a floating channel into 0..=255 (NaN becomes 0).
    fn channel(v: f64) -> u8 {
        let v = (v + 0.5).floor();
        if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 }
    }

    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(Self::channel(r), Self::channel(g), Self::channel(b))
    }
}

/// CSS functional notation, e.g. `rgb(165, 0, 38)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Eleven-class RdYlBu scheme, red (hot) first.
pub const RD_YL_BU: [u32; 11] = [
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9, 0x74add1, 0x4575b4, 0x313695,
];

#[inline]
fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Uniform cubic B-spline through `values` evaluated at `t`, clamped to [0, 1].
/// End segments are extended by reflecting the neighbouring control point.
pub fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len().saturating_sub(1);
    if n == 0 {
        return values.first().copied().unwrap_or(0.0);
    }
    let (t, i) = if !(t > 0.0) {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i + 1 < n { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

/// Smooth ramp through a list of colors, one spline per channel.
#[derive(Clone, Debug)]
pub struct ColorRamp {
    r: Vec<f64>,
    g: Vec<f64>,
    b: Vec<f64>,
}

impl ColorRamp {
    pub fn from_hex(colors: &[u32]) -> Self {
        let rgb: Vec<Rgb> = colors.iter().map(|&c| Rgb::from_hex(c)).collect();
        Self {
            r: rgb.iter().map(|c| c.r as f64).collect(),
            g: rgb.iter().map(|c| c.g as f64).collect(),
            b: rgb.iter().map(|c| c.b as f64).collect(),
        }
    }

    pub fn rd_yl_bu() -> Self {
        Self::from_hex(&RD_YL_BU)
    }

    pub fn at(&self, t: f64) -> Rgb {
        Rgb::from_f64(basis_spline(&self.r, t), basis_spline(&self.g, t), basis_spline(&self.b, t))
    }
}
