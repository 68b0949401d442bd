//! Output management and formatting.
//!
//! Plain output writes messages exactly as given, so scripts can match on
//! them. Human output adds glyphs and colors; JSON emits one object per line.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use modgen_core::application::{ProgressSink, ScaffoldEvent};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` in config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_config(&config.output.format).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Plain, msg)
    }

    /// Success indicator: `✓ <msg>` in human format.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Success, msg)
    }

    /// Informational indicator: `ℹ <msg>` in human format.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Info, msg)
    }

    /// Warning indicator: `⚠ <msg>` in human format.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Warning, msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Level::Header, text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn emit(&self, level: Level, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.render(level, msg))
    }

    fn render(&self, level: Level, msg: &str) -> String {
        match self.resolved_format {
            OutputFormat::Json => serde_json::json!({
                "level": level.as_str(),
                "message": msg,
            })
            .to_string(),
            OutputFormat::Human => self.render_human(level, msg),
            OutputFormat::Plain | OutputFormat::Auto => msg.to_owned(),
        }
    }

    fn render_human(&self, level: Level, msg: &str) -> String {
        let glyph = level.glyph();
        if self.no_color {
            return match glyph {
                Some(g) => format!("{g} {msg}"),
                None => msg.to_owned(),
            };
        }
        match level {
            Level::Plain => msg.to_owned(),
            Level::Header => msg.cyan().bold().to_string(),
            Level::Success => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            Level::Info => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
            Level::Warning => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
        }
    }
}

impl ProgressSink for OutputManager {
    fn on_event(&self, event: ScaffoldEvent) {
        // A closed stdout must not abort a half-written module.
        if let Err(e) = self.info(event.message()) {
            tracing::debug!(error = %e, "Failed to report progress");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Plain,
    Header,
    Success,
    Info,
    Warning,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Plain | Self::Header => "output",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Plain | Self::Header => None,
            Self::Success => Some("\u{2713}"), // ✓
            Self::Info => Some("\u{2139}"),    // ℹ
            Self::Warning => Some("\u{26a0}"), // ⚠
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
