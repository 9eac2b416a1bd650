//! Theme registry: the fixed palettes, luminance thresholds and font mapping.

use crate::error::{WireframeError, WireframeResult};
use crate::paint::PaintColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of wireframe themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeKind {
    /// Grayscale on white.
    #[default]
    Mono,
    /// Light content on blue fields.
    Blueprint,
    /// Light content on near-black.
    DarkMode,
}

impl ThemeKind {
    /// Name as used in UI messages.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Mono => "mono",
            ThemeKind::Blueprint => "blueprint",
            ThemeKind::DarkMode => "dark-mode",
        }
    }

    /// Get all available themes.
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Mono, ThemeKind::Blueprint, ThemeKind::DarkMode]
    }

    /// Luminance below which a solid paint counts as dark under this theme.
    ///
    /// Blue fields read darker than gray ones at equal luminance, so
    /// blueprint uses a lower cut.
    pub fn luminance_threshold(&self) -> f64 {
        match self {
            ThemeKind::Mono => 0.5,
            ThemeKind::Blueprint => 0.35,
            ThemeKind::DarkMode => 0.45,
        }
    }

    /// The registered theme for this kind.
    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeKind::Mono => &MONO,
            ThemeKind::Blueprint => &BLUEPRINT,
            ThemeKind::DarkMode => &DARK_MODE,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = WireframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| WireframeError::UnknownTheme(s.to_string()))
    }
}

/// The six semantic colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Text and icons.
    pub content: PaintColor,
    /// Text on surfaces that need the alternate content color.
    ///
    /// Light in mono and blueprint. In dark-mode this is a dark gray and is
    /// used for text placed on the light surfaces of that theme.
    pub content_light: PaintColor,
    /// Regular filled surfaces.
    pub fill: PaintColor,
    /// Surfaces that were dark in the source design.
    pub fill_inverted: PaintColor,
    /// Borders.
    pub stroke: PaintColor,
    /// Surfaces that were white in the source design.
    pub background: PaintColor,
}

/// A named, immutable palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub palette: Palette,
}

impl Theme {
    pub fn luminance_threshold(&self) -> f64 {
        self.kind.luminance_threshold()
    }
}

pub static MONO: Theme = Theme {
    kind: ThemeKind::Mono,
    palette: Palette {
        content: PaintColor::rgb(0.2, 0.2, 0.2),
        content_light: PaintColor::rgb(0.95, 0.95, 0.95),
        fill: PaintColor::rgb(0.9, 0.9, 0.9),
        fill_inverted: PaintColor::rgb(0.25, 0.25, 0.25),
        stroke: PaintColor::rgb(0.6, 0.6, 0.6),
        background: PaintColor::rgb(1.0, 1.0, 1.0),
    },
};

pub static BLUEPRINT: Theme = Theme {
    kind: ThemeKind::Blueprint,
    palette: Palette {
        content: PaintColor::rgb(1.0, 1.0, 1.0),
        content_light: PaintColor::rgb(0.81, 0.85, 0.97),
        fill: PaintColor::rgb(0.29, 0.43, 0.9),
        fill_inverted: PaintColor::rgb(0.0, 0.13, 0.51),
        stroke: PaintColor::rgb(0.81, 0.85, 0.97),
        background: PaintColor::rgb(0.19, 0.34, 0.88),
    },
};

pub static DARK_MODE: Theme = Theme {
    kind: ThemeKind::DarkMode,
    palette: Palette {
        content: PaintColor::rgb(0.9, 0.9, 0.9),
        content_light: PaintColor::rgb(0.2, 0.2, 0.2),
        fill: PaintColor::rgb(0.24, 0.24, 0.24),
        fill_inverted: PaintColor::rgb(0.75, 0.75, 0.75),
        stroke: PaintColor::rgb(0.4, 0.4, 0.4),
        background: PaintColor::rgb(0.1, 0.1, 0.1),
    },
};

/// Look up a theme by its message name.
///
/// Fails only for names outside the closed set; callers that accept user
/// input default to `mono` first.
pub fn resolve_theme(name: &str) -> WireframeResult<&'static Theme> {
    name.parse::<ThemeKind>().map(|kind| kind.theme())
}

/// Luminance threshold for a theme name, `None` for unknown names.
pub fn luminance_threshold(name: &str) -> Option<f64> {
    name.parse::<ThemeKind>()
        .ok()
        .map(|kind| kind.luminance_threshold())
}

/// Font choice offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontChoice {
    #[default]
    Handwritten,
    SansSerif,
    Serif,
}

impl FontChoice {
    pub fn name(&self) -> &'static str {
        match self {
            FontChoice::Handwritten => "handwritten",
            FontChoice::SansSerif => "sans-serif",
            FontChoice::Serif => "serif",
        }
    }

    pub fn all() -> &'static [FontChoice] {
        &[FontChoice::Handwritten, FontChoice::SansSerif, FontChoice::Serif]
    }

    /// Parse a message name, falling back to `handwritten`.
    pub fn from_name_or_default(name: &str) -> Self {
        FontChoice::all()
            .iter()
            .copied()
            .find(|choice| choice.name() == name)
            .unwrap_or_default()
    }

    /// The concrete family/style pair for this choice.
    pub fn font_spec(&self) -> FontSpec {
        match self {
            FontChoice::Handwritten => FontSpec::new("Figma Hand", "Regular"),
            FontChoice::SansSerif => FontSpec::new("Helvetica", "Regular"),
            FontChoice::Serif => FontSpec::new("Times New Roman", "Regular"),
        }
    }
}

/// A concrete font family and style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub style: String,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Map a font choice name to its font, defaulting to the handwritten font.
pub fn font_spec(choice: &str) -> FontSpec {
    FontChoice::from_name_or_default(choice).font_spec()
}
