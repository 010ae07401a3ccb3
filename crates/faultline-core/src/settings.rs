use serde::Deserialize;

/// Defaults applied when a format or report call leaves an option unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    /// Prefix messages with the status emoji
    pub show_emoji: bool,
    /// Render on a single line instead of a table
    pub default_compact: bool,
    /// Color output with the configured styler
    pub colorize: bool,
}

/// Partial update to [`DisplaySettings`]; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettingsPatch {
    pub show_emoji: Option<bool>,
    pub default_compact: Option<bool>,
    pub colorize: Option<bool>,
}

impl DisplaySettings {
    /// Overwrite the fields set in `patch`
    pub fn apply(&mut self, patch: DisplaySettingsPatch) {
        if let Some(show_emoji) = patch.show_emoji {
            self.show_emoji = show_emoji;
        }
        if let Some(default_compact) = patch.default_compact {
            self.default_compact = default_compact;
        }
        if let Some(colorize) = patch.colorize {
            self.colorize = colorize;
        }
    }
}

impl From<DisplaySettings> for DisplaySettingsPatch {
    fn from(settings: DisplaySettings) -> Self {
        Self {
            show_emoji: Some(settings.show_emoji),
            default_compact: Some(settings.default_compact),
            colorize: Some(settings.colorize),
        }
    }
}
