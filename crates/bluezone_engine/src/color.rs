use serde::{Deserialize, Serialize};

/// RGBA color, channels in `0.0 ..= 1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:.2}, g={:.2}, b={:.2}, a={:.2}}}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Color { a, ..self }
    }

    /// Same hue with full opacity. Over a translucent fill of the same
    /// color this reads as a darker outline.
    pub fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    pub fn get_rgba_u8(&self) -> (u8, u8, u8, u8) {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (c(self.r), c(self.g), c(self.b), c(self.a))
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.get_rgba_u8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl From<(f64, f64, f64, f64)> for Color {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Color { r, g, b, a }
    }
}
