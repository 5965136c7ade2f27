//! Record formatters and line templates
//!
//! Two formatter variants share one contract: given a record, produce a
//! single line per a fixed template. The colorized variant rewrites the
//! timestamp, level label, and message with ANSI color escapes before
//! delegating to the same template.

pub mod message;

pub use message::{format_function_call, format_test_call, MessageTemplate};

use crate::core::{DateFormat, LogRecord};
use colored::Colorize;

/// Turns a log record into an output line.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

/// Record templates keyed by purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTemplate {
    /// `<timestamp> - <LEVEL> - <message>`
    #[default]
    Default,

    /// `<LEVEL> - <message>`
    Short,

    /// `<timestamp> - <LEVEL> - <name> - <message>`
    Detailed,
}

impl LineTemplate {
    fn render(&self, timestamp: &str, level: &str, logger: &str, message: &str) -> String {
        match self {
            LineTemplate::Default => format!("{} - {} - {}", timestamp, level, message),
            LineTemplate::Short => format!("{} - {}", level, message),
            LineTemplate::Detailed => {
                format!("{} - {} - {} - {}", timestamp, level, logger, message)
            }
        }
    }
}

/// Plain template substitution, no decoration.
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter {
    template: LineTemplate,
    date_format: DateFormat,
}

impl PlainFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_template(mut self, template: LineTemplate) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}

impl Formatter for PlainFormatter {
    fn format(&self, record: &LogRecord) -> String {
        self.template.render(
            &self.date_format.format(&record.timestamp),
            record.level.to_str(),
            &record.logger,
            &record.message,
        )
    }
}

/// Same templates as [`PlainFormatter`], with ANSI color escapes: green
/// timestamp, per-level color on the level label, yellow message body.
#[derive(Debug, Clone, Default)]
pub struct ColorFormatter {
    template: LineTemplate,
    date_format: DateFormat,
}

impl ColorFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_template(mut self, template: LineTemplate) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}

impl Formatter for ColorFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let timestamp = self
            .date_format
            .format(&record.timestamp)
            .green()
            .to_string();
        let level = record
            .level
            .to_str()
            .color(record.level.color_code())
            .to_string();
        let message = record.message.yellow().to_string();

        self.template
            .render(&timestamp, &level, &record.logger, &message)
    }
}
