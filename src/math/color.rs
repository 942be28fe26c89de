use std::ops::{Add, AddAssign, Div, Mul};

/// Glyph ramp for terminal output, densest first. The last glyph is a space.
pub const SHADE_CHARS: &[u8] = br#"$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\|()1{}[]?-_+~<>i!lI;:,"^`'. "#;

const MAX_BRIGHT: f64 = 3.0 * 255.0;

/// Linear, unclamped color. Light model values live around [0, 1].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);
}

// floor(min(c * 255, 255)), with negative and NaN channels mapped to 0
#[inline(always)]
fn channel_u8(c: f64) -> u8 {
    (c * 255.0).max(0.0).min(255.0) as u8
}

impl RGBColor {
    /// Clamps every channel to [0, 255]. NaN channels become 0.
    pub fn clamp(&self) -> RGBColor {
        RGBColor::new(
            self.r.max(0.0).min(255.0),
            self.g.max(0.0).min(255.0),
            self.b.max(0.0).min(255.0),
        )
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [channel_u8(self.r), channel_u8(self.g), channel_u8(self.b), 255]
    }

    /// Brightness glyph wrapped in a 24-bit foreground color escape.
    pub fn to_ansi_glyph(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        let sum = r as f64 + g as f64 + b as f64;
        let shade = (1.0 - sum / MAX_BRIGHT) * (SHADE_CHARS.len() - 1) as f64;
        let glyph = SHADE_CHARS[shade as usize] as char;

        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, glyph)
    }
}

// component-wise, models attenuation by a surface color
impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f64 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Div<f64> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f64) -> RGBColor {
        RGBColor::new(self.r / other, self.g / other, self.b / other)
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl From<f64> for RGBColor {
    fn from(s: f64) -> RGBColor {
        RGBColor::new(s, s, s)
    }
}
