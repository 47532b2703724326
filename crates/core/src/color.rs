use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Saturation at or below this is drawn as gray.
const NEARLY_ZERO: f32 = 1.0 / 4096.0;

/// A packed 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

/// Hue, saturation and value. Carries no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Degrees, 0.0 to 360.0 (exclusive)
    pub hue: f32,
    /// 0.0 to 1.0
    pub saturation: f32,
    /// 0.0 to 1.0
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);

    /// Build an opaque color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn from_argb(alpha: u8, r: u8, g: u8, b: u8) -> Self {
        Color((alpha as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Red, green and blue channels. Alpha is dropped.
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Replace only the alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Convert to HSV. Grays get a hue and saturation of zero.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let value = max as f32 / 255.0;

        if max == min {
            return Hsv::new(0.0, 0.0, value);
        }

        let delta = (max - min) as f32;
        let saturation = delta / max as f32;

        let (r, g, b) = (r as f32, g as f32, b as f32);
        let sector = if max as f32 == r {
            (g - b) / delta
        } else if max as f32 == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsv::new(hue, saturation, value)
    }

    /// Build an opaque color from HSV.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_ahsv(0xFF, hsv)
    }

    /// Build a color from an explicit alpha and HSV.
    ///
    /// Saturation and value are pinned to [0, 1] and the hue is wrapped into
    /// [0, 360), so eased fractions that overshoot still produce a color.
    pub fn from_ahsv(alpha: u8, hsv: Hsv) -> Self {
        let saturation = hsv.saturation.clamp(0.0, 1.0);
        let value = hsv.value.clamp(0.0, 1.0);
        let v = round_channel(value * 255.0);

        if saturation <= NEARLY_ZERO {
            return Self::from_argb(alpha, v, v, v);
        }

        let mut hue = hsv.hue.rem_euclid(360.0);
        if hue >= 360.0 {
            hue = 0.0;
        }

        let sector = hue / 60.0;
        let whole = sector.floor();
        let frac = sector - whole;

        let p = round_channel((1.0 - saturation) * value * 255.0);
        let q = round_channel((1.0 - saturation * frac) * value * 255.0);
        let t = round_channel((1.0 - saturation * (1.0 - frac)) * value * 255.0);

        let (r, g, b) = match whole as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::from_argb(alpha, r, g, b)
    }
}

/// Round half-up and saturate into a channel.
pub(crate) fn round_channel(value: f32) -> u8 {
    (value + 0.5) as u8
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Error from parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected #RRGGBB or #AARRGGBB, got {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#RRGGBB`, `#AARRGGBB` and the same with a `0x` prefix.
    /// Six digit colors are opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let invalid = || ColorParseError(s.to_string());

        // from_str_radix alone would accept a leading '+'
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | packed?)),
            8 => Ok(Color(packed?)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_channel_packing() {
        let color = Color::from_argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(color, Color(0x8012_3456));
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.rgb(), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_rgb(1, 2, 3).alpha(), 0xFF);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let color = Color(0xFF03_A9F4).with_alpha(0x40);
        assert_eq!(color, Color(0x4003_A9F4));
    }

    #[test]
    fn test_to_hsv_primaries() {
        let red = Color::RED.to_hsv();
        assert_relative_eq!(red.hue, 0.0);
        assert_relative_eq!(red.saturation, 1.0);
        assert_relative_eq!(red.value, 1.0);

        assert_relative_eq!(Color::GREEN.to_hsv().hue, 120.0);
        assert_relative_eq!(Color::BLUE.to_hsv().hue, 240.0);
        // magenta sits at the top of the wheel, hue must not go negative
        assert_relative_eq!(Color::from_rgb(255, 0, 255).to_hsv().hue, 300.0);
    }

    #[test]
    fn test_to_hsv_gray() {
        let gray = Color::from_rgb(128, 128, 128).to_hsv();
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert_relative_eq!(gray.value, 128.0 / 255.0);
    }

    #[test]
    fn test_from_hsv() {
        assert_eq!(Color::from_hsv(Hsv::new(0.0, 1.0, 1.0)), Color::RED);
        assert_eq!(Color::from_hsv(Hsv::new(120.0, 1.0, 1.0)), Color::GREEN);
        assert_eq!(Color::from_hsv(Hsv::new(240.0, 1.0, 1.0)), Color::BLUE);
        assert_eq!(Color::from_hsv(Hsv::new(360.0, 1.0, 1.0)), Color::RED);
        assert_eq!(
            Color::from_ahsv(0x20, Hsv::new(60.0, 1.0, 1.0)),
            Color(0x20FF_FF00)
        );
        assert_eq!(Color::from_hsv(Hsv::new(200.0, 0.0, 0.0)), Color::BLACK);
    }

    #[test]
    fn test_from_hsv_near_zero_saturation_is_gray() {
        let gray = Color::from_rgb(128, 128, 128);
        assert_eq!(Color::from_hsv(Hsv::new(120.0, 1.0e-4, 0.5)), gray);
        assert_eq!(Color::from_hsv(Hsv::new(300.0, 0.0, 0.5)), gray);
        assert_ne!(Color::from_hsv(Hsv::new(120.0, 0.01, 0.5)), gray);
    }

    #[test]
    fn test_hsv_round_trip() {
        let samples = [
            0xFF03_A9F4,
            0xFF00_9688,
            0xFFFF_5722,
            0xFF9C_27B0,
            0xFF12_3456,
            0xFFFE_DCBA,
            0xFF01_0203,
        ];
        for argb in samples {
            let color = Color(argb);
            let back = Color::from_hsv(color.to_hsv());
            let (r1, g1, b1) = color.rgb();
            let (r2, g2, b2) = back.rgb();
            assert!((r1 as i16 - r2 as i16).abs() <= 1, "{color} -> {back}");
            assert!((g1 as i16 - g2 as i16).abs() <= 1, "{color} -> {back}");
            assert!((b1 as i16 - b2 as i16).abs() <= 1, "{color} -> {back}");
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#03a9f4".parse::<Color>().unwrap(), Color(0xFF03_A9F4));
        assert_eq!("#8003A9F4".parse::<Color>().unwrap(), Color(0x8003_A9F4));
        assert_eq!("0xff009688".parse::<Color>().unwrap(), Color(0xFF00_9688));
        assert_eq!(
            "#123".parse::<Color>(),
            Err(ColorParseError("#123".to_string()))
        );
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("+1234567".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_and_serde() {
        let color = Color(0x8003_A9F4);
        assert_eq!(color.to_string(), "#8003A9F4");

        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#8003A9F4\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
