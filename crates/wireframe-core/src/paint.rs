//! Paint definitions for fills, strokes and backgrounds.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Floating-point RGB color with an optional alpha channel.
///
/// Components are stored in `0.0..=1.0`. A missing alpha channel means the
/// color is a plain opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl PaintColor {
    /// Tolerance used when comparing stored color components.
    pub const TOLERANCE: f64 = 0.01;

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Compare the RGB channels within [`Self::TOLERANCE`], ignoring alpha.
    pub fn approx_eq(&self, other: &PaintColor) -> bool {
        (self.r - other.r).abs() < Self::TOLERANCE
            && (self.g - other.g).abs() < Self::TOLERANCE
            && (self.b - other.b).abs() < Self::TOLERANCE
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        let rgba = Color::from(*self).to_rgba8();
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    }
}

impl From<PaintColor> for Color {
    fn from(color: PaintColor) -> Self {
        Color::new([
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a.unwrap_or(1.0) as f32,
        ])
    }
}

impl From<Color> for PaintColor {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.components;
        Self::rgba(r as f64, g as f64, b as f64, a as f64)
    }
}

/// The kind of a paint entry. Only solid paints carry a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid { color: PaintColor },
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
}

/// A single fill, stroke or background entry.
///
/// Paint lists are ordered bottom-to-top: the last entry is painted last and
/// is therefore the topmost one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(flatten)]
    pub kind: PaintKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

fn default_visible() -> bool {
    true
}

impl Paint {
    /// A visible solid paint with no explicit opacity.
    pub fn solid(color: PaintColor) -> Self {
        Self {
            kind: PaintKind::Solid { color },
            visible: true,
            opacity: None,
        }
    }

    /// A visible paint of a non-solid kind.
    pub fn of_kind(kind: PaintKind) -> Self {
        Self {
            kind,
            visible: true,
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The color of a solid paint.
    pub fn color(&self) -> Option<PaintColor> {
        match self.kind {
            PaintKind::Solid { color } => Some(color),
            _ => None,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.kind, PaintKind::Solid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_json_shape() {
        let paint = Paint::solid(PaintColor::rgb(0.5, 0.25, 1.0));
        let json = serde_json::to_value(paint).unwrap();
        assert_eq!(json["type"], "SOLID");
        assert_eq!(json["visible"], true);
        assert!(json.get("opacity").is_none());
        assert!(json["color"].get("a").is_none());
    }

    #[test]
    fn test_paint_defaults_when_parsing() {
        let paint: Paint = serde_json::from_str(r#"{"type":"IMAGE"}"#).unwrap();
        assert_eq!(paint.kind, PaintKind::Image);
        assert!(paint.visible);
        assert_eq!(paint.opacity, None);

        let paint: Paint = serde_json::from_str(
            r#"{"type":"SOLID","color":{"r":1,"g":0,"b":0,"a":0.5},"visible":false,"opacity":0.3}"#,
        )
        .unwrap();
        assert!(!paint.visible);
        assert_eq!(paint.opacity, Some(0.3));
        assert_eq!(paint.color().and_then(|c| c.a), Some(0.5));
    }

    #[test]
    fn test_approx_eq_ignores_alpha() {
        let a = PaintColor::rgb(0.29, 0.43, 0.9);
        let b = PaintColor::rgba(0.295, 0.425, 0.905, 0.2);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&PaintColor::rgb(0.31, 0.43, 0.9)));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(PaintColor::white().to_hex(), "#FFFFFF");
        assert_eq!(PaintColor::black().to_hex(), "#000000");
        assert_eq!(PaintColor::rgb(0.2, 0.2, 0.2).to_hex(), "#333333");
    }
}
