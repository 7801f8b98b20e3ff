//! Severity-tagged message sink
//!
//! All user-visible output flows through [`MessageSink`] so the
//! extraction and resolution logic never touches escape codes or
//! formatting. A sink owns one [`Renderer`]:
//!
//! - [`AnsiRenderer`]: color per severity for interactive terminals
//! - [`PlainRenderer`]: text only, for pipes and CI logs
//! - [`JsonRenderer`]: one JSON object per message, for log collectors
//!
//! Operator diagnostics (index sizes, scan details) do NOT go through
//! the sink; they use the `log` facade.

use serde::Serialize;

/// Message severity, doubling as the display category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Guidance and progress chatter
    Info,
    /// Recoverable problems (malformed input line, unresolvable frame)
    Warn,
    /// The faulting instruction and run-level failures
    Error,
    /// Frame headers and section banners
    Highlight,
    /// Report body lines
    Plain,
}

/// Renders one message. Implementations decide how a severity looks.
pub trait Renderer {
    fn render(&self, severity: Severity, message: &str);
}

/// ANSI color renderer.
///
/// Palette follows the tool's report conventions: cyan guidance, yellow
/// warnings, red faulting instructions, green frame headers.
pub struct AnsiRenderer;

impl AnsiRenderer {
    fn color(severity: Severity) -> Option<&'static str> {
        match severity {
            Severity::Info => Some("36"),
            Severity::Warn => Some("33"),
            Severity::Error => Some("31"),
            Severity::Highlight => Some("32"),
            Severity::Plain => None,
        }
    }
}

impl Renderer for AnsiRenderer {
    fn render(&self, severity: Severity, message: &str) {
        match Self::color(severity) {
            Some(code) => println!("\x1b[{code}m{message}\x1b[0m"),
            None => println!("{message}"),
        }
    }
}

/// Plain-text renderer: severities render identically.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, _severity: Severity, message: &str) {
        println!("{message}");
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    severity: Severity,
    message: &'a str,
}

/// Structured renderer: one JSON object per line.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, severity: Severity, message: &str) {
        if let Ok(line) = serde_json::to_string(&JsonRecord { severity, message }) {
            println!("{line}");
        }
    }
}

/// Severity-tagged message sink with a pluggable renderer.
pub struct MessageSink {
    renderer: Box<dyn Renderer>,
}

impl MessageSink {
    #[must_use]
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self { renderer }
    }

    #[must_use]
    pub fn ansi() -> Self {
        Self::new(Box::new(AnsiRenderer))
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::new(Box::new(PlainRenderer))
    }

    #[must_use]
    pub fn json() -> Self {
        Self::new(Box::new(JsonRenderer))
    }

    pub fn emit(&self, severity: Severity, message: &str) {
        self.renderer.render(severity, message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.emit(Severity::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    pub fn highlight(&self, message: &str) {
        self.emit(Severity::Highlight, message);
    }

    pub fn body(&self, message: &str) {
        self.emit(Severity::Plain, message);
    }
}
