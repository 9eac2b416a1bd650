//! Text node payload.

use crate::paint::Paint;
use crate::theme::FontSpec;
use serde::{Deserialize, Serialize};

/// How a text box sizes itself when its content or font changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    /// Fixed box; text may overflow.
    None,
    /// Box grows in both directions to fit the text.
    #[default]
    WidthAndHeight,
    /// Fixed width, height follows the text.
    Height,
    /// Fixed box; overflowing text is truncated.
    Truncate,
}

impl TextAutoResize {
    /// Whether the box width follows the text.
    pub fn width_floats(&self) -> bool {
        matches!(self, TextAutoResize::WidthAndHeight)
    }

    /// Whether the box height follows the text.
    pub fn height_floats(&self) -> bool {
        matches!(self, TextAutoResize::WidthAndHeight | TextAutoResize::Height)
    }
}

/// A text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// The text content.
    pub characters: String,
    /// Font size in pixels.
    pub font_size: f64,
    pub font: FontSpec,
    #[serde(default)]
    pub auto_resize: TextAutoResize,
    #[serde(default)]
    pub fills: Vec<Paint>,
}

impl TextNode {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    pub fn new(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font: FontSpec::new("Inter", "Regular"),
            auto_resize: TextAutoResize::default(),
            fills: Vec::new(),
        }
    }

    /// Number of lines in the content (at least one).
    pub fn line_count(&self) -> usize {
        self.characters.lines().count().max(1)
    }

    /// Character count of the longest line.
    pub fn longest_line(&self) -> usize {
        self.characters
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}
