//! Resolved configuration for one conversion run.

use crate::theme::{FontChoice, FontSpec, Palette, Theme, ThemeKind};

/// User choices for a conversion, already defaulted to valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    pub theme: ThemeKind,
    pub font: FontChoice,
    pub rounded_corners: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Mono,
            font: FontChoice::Handwritten,
            rounded_corners: true,
        }
    }
}

/// Stroke widths carried by the style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidths {
    pub default: f64,
    pub border: f64,
}

/// The immutable style threaded through a whole traversal.
///
/// Built once per session; converters only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeStyle {
    pub theme: &'static Theme,
    pub strokes: StrokeWidths,
    pub font: FontSpec,
    pub radius: f64,
    pub apply_radius: bool,
}

impl WireframeStyle {
    /// Corner radius applied to non-ellipse nodes when rounding is enabled.
    pub const DEFAULT_RADIUS: f64 = 8.0;
    pub const DEFAULT_STROKE: f64 = 1.0;
    pub const BORDER_STROKE: f64 = 0.5;

    pub fn new(options: &ConversionOptions) -> Self {
        Self {
            theme: options.theme.theme(),
            strokes: StrokeWidths {
                default: Self::DEFAULT_STROKE,
                border: Self::BORDER_STROKE,
            },
            font: options.font.font_spec(),
            radius: Self::DEFAULT_RADIUS,
            apply_radius: options.rounded_corners,
        }
    }

    pub fn kind(&self) -> ThemeKind {
        self.theme.kind
    }

    pub fn colors(&self) -> &Palette {
        &self.theme.palette
    }

    /// The radius every corner receives under this style.
    pub fn corner_radius(&self) -> f64 {
        if self.apply_radius { self.radius } else { 0.0 }
    }
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self::new(&ConversionOptions::default())
    }
}
