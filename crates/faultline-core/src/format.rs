//! Text rendering for [`StructuredError`]: single-line, multi-line and table

use std::borrow::Cow;

use crate::settings::DisplaySettings;
use crate::structured::{Details, StructuredError};
use crate::style::{Color, PlainStyler, Styler, visible_width};

/// Longest details preview shown inline before it is cut off
pub const DETAILS_PREVIEW_LEN: usize = 30;

const ELLIPSIS: &str = "...";
const EMPTY_CELL: &str = "—";
const EMOJI_WIDTH: usize = 2;
const HEADERS: [&str; 5] = ["", "Message", "StatusCode", "Details", "Category"];

/// Per-call rendering options; unset fields fall back to [`DisplaySettings`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub compact: Option<bool>,
    pub show_emoji: Option<bool>,
    pub colorize: Option<bool>,
}

impl FormatOptions {
    #[must_use]
    pub const fn compact(mut self, compact: bool) -> Self {
        self.compact = Some(compact);
        self
    }

    #[must_use]
    pub const fn show_emoji(mut self, show_emoji: bool) -> Self {
        self.show_emoji = Some(show_emoji);
        self
    }

    #[must_use]
    pub const fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = Some(colorize);
        self
    }

    /// Fill unset options from `settings`
    pub fn resolve(self, settings: &DisplaySettings) -> ResolvedOptions {
        ResolvedOptions {
            compact: self.compact.unwrap_or(settings.default_compact),
            show_emoji: self.show_emoji.unwrap_or(settings.show_emoji),
            colorize: self.colorize.unwrap_or(settings.colorize),
        }
    }
}

/// Fully specified rendering options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub compact: bool,
    pub show_emoji: bool,
    pub colorize: bool,
}

/// Serialize `details` as JSON, cutting it to `max_len` characters plus `...`
pub fn truncated_json(details: &Details, max_len: usize) -> String {
    let json = serde_json::to_string(details).unwrap_or_default();

    if json.chars().count() <= max_len {
        return json;
    }

    let mut truncated: String = json.chars().take(max_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn pad(text: &str, width: usize) -> Cow<'_, str> {
    let visible = visible_width(text);
    if visible >= width {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{text}{}", " ".repeat(width - visible)))
    }
}

fn border(widths: &[usize; 5]) -> String {
    widths.iter().fold(String::from("+"), |mut line, width| {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
        line
    })
}

fn row(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    cells.iter().zip(widths).fold(String::from("|"), |mut line, (cell, width)| {
        line.push(' ');
        line.push_str(&pad(cell, *width));
        line.push_str(" |");
        line
    })
}

impl StructuredError {
    fn details_preview(&self) -> String {
        self.details()
            .map_or_else(|| EMPTY_CELL.to_owned(), |details| truncated_json(details, DETAILS_PREVIEW_LEN))
    }

    /// Render as a single line (`compact`) or as three lines
    ///
    /// `styler` is only used when `options.colorize` is set. The stored
    /// message is never modified; the emoji prefix exists only in the
    /// returned text.
    pub fn format(&self, options: ResolvedOptions, styler: &dyn Styler) -> String {
        let styler: &dyn Styler = if options.colorize { styler } else { &PlainStyler };

        let status = self.status_code().to_string();
        let details = self.details_preview();

        let message = styler.paint(self.message(), Color::Magenta);
        let status = styler.paint(&status, Color::for_status(self.status_code()));
        let details = styler.paint(&details, Color::Cyan);
        let emoji = if options.show_emoji {
            format!("{} ", self.emoji())
        } else {
            String::new()
        };

        if options.compact {
            format!("{emoji}{message} [{status}] {details}")
        } else {
            format!("{emoji}{message}\nStatusCode: {status}\nDetails: {details}")
        }
    }

    /// Render the bordered table used by full console reports
    ///
    /// Column widths are measured on the uncolored text so escape
    /// sequences never skew the alignment. When the details are too long
    /// for the inline preview, a pretty-printed block follows the table.
    pub fn render_table(&self, options: ResolvedOptions, styler: &dyn Styler) -> String {
        let styler: &dyn Styler = if options.colorize { styler } else { &PlainStyler };
        let band = Color::for_status(self.status_code());

        let message = crate::style::strip_ansi(self.message());
        let status = self.status_code().to_string();
        let details = self.details_preview();
        let category = if self.category().is_empty() {
            EMPTY_CELL
        } else {
            self.category()
        };

        let plain: [&str; 5] = ["", &message, &status, &details, category];
        let mut widths = [EMOJI_WIDTH; 5];
        for (i, width) in widths.iter_mut().enumerate().skip(1) {
            *width = plain[i].chars().count().max(HEADERS[i].chars().count());
        }

        let emoji = if options.show_emoji { self.emoji() } else { "" };
        let message = styler.paint(&message, Color::Magenta);
        let status = styler.paint(&status, band);
        let details = styler.paint(&details, Color::Cyan);
        let category = styler.paint(category, band);

        let line = border(&widths);
        let mut table = String::new();
        table.push_str(&line);
        table.push('\n');
        table.push_str(&row(&HEADERS, &widths));
        table.push('\n');
        table.push_str(&line);
        table.push('\n');
        table.push_str(&row(&[emoji, &*message, &*status, &*details, &*category], &widths));
        table.push('\n');
        table.push_str(&line);
        table.push('\n');

        if let Some(full) = self.details().and_then(|details| serde_json::to_string_pretty(details).ok())
            && full.chars().count() > DETAILS_PREVIEW_LEN
        {
            table.push_str("\nDetails (full):\n");
            table.push_str(&styler.paint(&full, Color::Cyan));
            table.push('\n');
        }

        table
    }
}
