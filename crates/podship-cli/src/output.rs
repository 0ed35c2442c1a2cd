//! Severity-tagged console lines.

use console::Term;
use owo_colors::{OwoColorize as _, Style};
use podship_engine::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Ok,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Stylesheet for the severity labels. All styles are plain until colorized.
#[derive(Default, Clone)]
pub struct Styles {
    pub info: Style,
    pub ok: Style,
    pub warn: Style,
    pub error: Style,
}

impl Styles {
    pub fn colorize(&mut self) {
        self.info = Style::new().blue().bold();
        self.ok = Style::new().green().bold();
        self.warn = Style::new().yellow().bold();
        self.error = Style::new().red().bold();
    }

    fn for_level(&self, level: Level) -> Style {
        match level {
            Level::Info => self.info,
            Level::Ok => self.ok,
            Level::Warn => self.warn,
            Level::Error => self.error,
        }
    }
}

/// Writes every line to stdout, including errors, so callers see one stream.
pub struct Console {
    styles: Styles,
}

impl Console {
    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn new() -> Self {
        let use_colors = Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();
        Self::with_colors(use_colors)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }
        Self { styles }
    }

    pub fn render(&self, level: Level, msg: &str) -> String {
        let tag = format!("[{}]", level.label());
        format!(
            "{} {msg}",
            format!("{tag:<7}").style(self.styles.for_level(level))
        )
    }

    pub fn error(&self, msg: &str) {
        println!("{}", self.render(Level::Error, msg));
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for Console {
    fn info(&self, msg: &str) {
        println!("{}", self.render(Level::Info, msg));
    }

    fn success(&self, msg: &str) {
        println!("{}", self.render(Level::Ok, msg));
    }

    fn warn(&self, msg: &str) {
        println!("{}", self.render(Level::Warn, msg));
    }
}
