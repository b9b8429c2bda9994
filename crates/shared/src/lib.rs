use serde::{Deserialize, Serialize};

/// Stable identifier of a part inside the loaded model.
///
/// Assigned once when the model is imported; display names are kept
/// separately because GLB files may contain duplicate mesh names.
pub type PartId = String;

/// Linear RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::from_u8(r, g, b))
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_u8(self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Component-wise comparison within `epsilon`, for round-trip checks
    /// after u8 quantization.
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
    }
}

/// Accent color applied to highlighted parts and their directory rows.
pub const ACCENT: Rgb = Rgb::new(1.0, 0.0, 0.498);

/// Default color for newly submitted overlay text.
pub const DEFAULT_TEXT_COLOR: Rgb = Rgb::new(1.0, 0.0, 0.0);

/// Default viewport background (light gray, 0xf5f5f5).
pub const DEFAULT_BACKGROUND: [u8; 3] = [245, 245, 245];

/// Prompt shown as the initial overlay text after a model loads.
pub const DEFAULT_PROMPT: &str = "Double click on model to select";

/// A request to (re)create the 3D text overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub text: String,
    pub color: Rgb,
}

impl OverlaySpec {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb::from_hex("#00ff00").unwrap();
        assert_eq!(c.to_hex(), "#00ff00");
        assert!(c.approx_eq(Rgb::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_hex_without_hash() {
        assert!(Rgb::from_hex("ff007f").is_some());
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Rgb::from_hex("#ff007").is_none());
        assert!(Rgb::from_hex("#gg0000").is_none());
        assert!(Rgb::from_hex("").is_none());
    }

    #[test]
    fn test_accent_hex_round_trip() {
        let accent = Rgb::from_hex("#ff007f").unwrap();
        assert!(accent.approx_eq(ACCENT, 0.01));
    }

    #[test]
    fn test_u8_quantization() {
        let c = Rgb::from_u8(245, 245, 245);
        assert_eq!(c.to_u8(), [245, 245, 245]);
    }
}
