use std::io::{self, Write};
use std::sync::Arc;

use crate::error::ConfigError;
use crate::format::{FormatOptions, ResolvedOptions};
use crate::logger::{LogLevel, Logger, LoggerBinding};
use crate::settings::{DisplaySettings, DisplaySettingsPatch};
use crate::structured::StructuredError;
use crate::style::{AnsiStyler, Styler};

/// Owns display settings and the optional external logger
///
/// Every format or report call reads its defaults from here, so separate
/// reporters can run side by side with different configurations.
#[derive(Clone)]
pub struct Reporter {
    settings: DisplaySettings,
    logger: Option<LoggerBinding>,
    styler: Arc<dyn Styler>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter")
            .field("settings", &self.settings)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

impl Reporter {
    /// Create a reporter that colors with ANSI escape sequences
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            settings,
            logger: None,
            styler: Arc::new(AnsiStyler),
        }
    }

    /// Replace the styler used when colorizing
    #[must_use]
    pub fn with_styler(mut self, styler: impl Styler + 'static) -> Self {
        self.styler = Arc::new(styler);
        self
    }

    pub const fn settings(&self) -> DisplaySettings {
        self.settings
    }

    /// Apply a partial settings update; affects subsequent calls only
    pub fn configure(&mut self, patch: DisplaySettingsPatch) {
        self.settings.apply(patch);
        tracing::debug!(settings = ?self.settings, "display settings updated");
    }

    /// Forward full reports to `logger` at `level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingLoggerMethod`] when the logger does not
    /// accept `level`. The current binding is left untouched in that case.
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>, level: LogLevel) -> Result<(), ConfigError> {
        if !logger.supports(level) {
            return Err(ConfigError::MissingLoggerMethod(level));
        }

        self.logger = Some(LoggerBinding { logger, level });
        tracing::debug!(%level, "external logger bound");
        Ok(())
    }

    /// Drop the external logger binding
    pub fn clear_logger(&mut self) {
        self.logger = None;
    }

    /// Level of the bound external logger, if any
    pub fn logger_level(&self) -> Option<LogLevel> {
        self.logger.as_ref().map(LoggerBinding::level)
    }

    /// Restore default settings and drop the logger binding
    pub fn reset(&mut self) {
        self.settings = DisplaySettings::default();
        self.logger = None;
    }

    pub fn resolve(&self, options: FormatOptions) -> ResolvedOptions {
        options.resolve(&self.settings)
    }

    /// Format `err`, filling unset options from the current settings
    pub fn format(&self, err: &StructuredError, options: FormatOptions) -> String {
        err.format(self.resolve(options), self.styler.as_ref())
    }

    /// Print `err` to standard output
    pub fn report(&self, err: &StructuredError, options: FormatOptions) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.report_to(err, options, &mut out) {
            tracing::warn!(error = %e, "failed to write error report");
        }
    }

    /// Write a console report for `err` to `out`
    ///
    /// Compact reports are a single line. Full reports render a table,
    /// the full details when they do not fit inline, forward the
    /// formatted text to the bound logger, and end with a blank line.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to `out`
    pub fn report_to<W: Write>(&self, err: &StructuredError, options: FormatOptions, out: &mut W) -> io::Result<()> {
        let resolved = self.resolve(options);

        if resolved.compact {
            return writeln!(out, "{}", err.format(resolved, self.styler.as_ref()));
        }

        out.write_all(err.render_table(resolved, self.styler.as_ref()).as_bytes())?;

        if let Some(ref binding) = self.logger {
            binding.forward(&err.format(resolved, self.styler.as_ref()));
        }

        writeln!(out)
    }
}
