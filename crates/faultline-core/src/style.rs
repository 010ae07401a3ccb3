use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Colors used when rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    /// SGR foreground code for this color
    pub const fn ansi_code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
        }
    }

    /// Color band for a status code
    ///
    /// 5xx and above are red, 4xx yellow, 3xx green, anything lower blue.
    pub const fn for_status(status_code: u16) -> Self {
        match status_code {
            500.. => Self::Red,
            400..=499 => Self::Yellow,
            300..=399 => Self::Green,
            _ => Self::Blue,
        }
    }
}

/// Text styling capability used by formatters
///
/// Terminals get [`AnsiStyler`]; anything that cannot render escape
/// sequences should use [`PlainStyler`].
pub trait Styler: Send + Sync {
    /// Wrap `text` in the given color
    fn paint<'a>(&self, text: &'a str, color: Color) -> Cow<'a, str>;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint<'a>(&self, text: &'a str, _color: Color) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Wraps text in ANSI SGR sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint<'a>(&self, text: &'a str, color: Color) -> Cow<'a, str> {
        Cow::Owned(format!("\x1b[{}m{text}\x1b[0m", color.ansi_code()))
    }
}

/// Remove ANSI SGR sequences from `text`
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("must be valid regex"))
    }

    re().replace_all(text, "")
}

/// Number of visible characters once escape sequences are removed
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}
