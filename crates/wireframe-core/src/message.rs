//! Messages exchanged with the settings UI.

use crate::style::ConversionOptions;
use crate::theme::{FontChoice, ThemeKind};
use serde::{Deserialize, Serialize};

/// Messages sent by the UI to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Convert the current selection.
    #[serde(alias = "convert-to-wireframe", rename_all = "camelCase")]
    Convert {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_choice: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        theme_choice: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        use_rounded_corners: Option<bool>,
    },
    /// Show usage help.
    Help,
    /// Close the plugin session.
    Close,
}

impl UiMessage {
    /// Parse a message from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// A convert request carrying explicit options.
    pub fn convert(options: &ConversionOptions) -> Self {
        UiMessage::Convert {
            font_choice: Some(options.font.name().to_string()),
            theme_choice: Some(options.theme.name().to_string()),
            use_rounded_corners: Some(options.rounded_corners),
        }
    }
}

/// Resolve the raw choices of a convert message into valid options.
///
/// Absent values take their defaults silently; unknown names are logged and
/// defaulted.
pub fn resolve_options(
    font_choice: Option<&str>,
    theme_choice: Option<&str>,
    use_rounded_corners: Option<bool>,
) -> ConversionOptions {
    let theme = match theme_choice {
        Some(name) => name.parse::<ThemeKind>().unwrap_or_else(|err| {
            log::warn!("{}, falling back to {}", err, ThemeKind::default());
            ThemeKind::default()
        }),
        None => ThemeKind::default(),
    };
    let font = match font_choice {
        Some(name) => {
            let choice = FontChoice::from_name_or_default(name);
            if choice.name() != name {
                log::warn!("Unknown font choice '{}', falling back to {}", name, choice.name());
            }
            choice
        }
        None => FontChoice::default(),
    };
    ConversionOptions {
        theme,
        font,
        rounded_corners: use_rounded_corners.unwrap_or(true),
    }
}

/// Messages sent by the core to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CoreMessage {
    /// `value` of `total` nodes have been visited.
    Progress { value: usize, total: usize },
    /// The conversion request has finished.
    Complete,
}

impl CoreMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
