//! Main logger implementation

use super::{
    appender::Appender, error::Result, log_level::LogLevel, log_record::LogRecord,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use crate::format::{ColorFormatter, PlainFormatter};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed file sink shared by the preset loggers.
///
/// Opened in append mode; every logger built via a preset writes here.
pub const DEFAULT_LOG_PATH: &str = "naiveLogger.log";

pub struct Logger {
    name: String,
    min_level: LogLevel,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    propagate: bool,
    parent: Option<Arc<Logger>>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use naive_logger::prelude::*;
    ///
    /// let logger = Logger::builder("app")
    ///     .level(LogLevel::Debug)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Preset: level `Debug`, non-propagating, a console sink and a file
    /// sink on [`DEFAULT_LOG_PATH`], both plainly formatted.
    pub fn build_default() -> Result<Logger> {
        Self::preset_at(DEFAULT_LOG_PATH, false)
    }

    /// Preset: like [`Logger::build_default`], with both sinks colorized.
    pub fn build_colorful_default() -> Result<Logger> {
        Self::preset_at(DEFAULT_LOG_PATH, true)
    }

    fn preset_at(path: &str, colorful: bool) -> Result<Logger> {
        let name = if colorful { "colorful" } else { "default" };
        let builder = Logger::builder(name)
            .level(LogLevel::Debug)
            .propagate(false);

        let builder = if colorful {
            builder
                .appender(ConsoleAppender::new().with_formatter(ColorFormatter::new()))
                .appender(FileAppender::new(path)?.with_formatter(ColorFormatter::new()))
        } else {
            builder
                .appender(ConsoleAppender::new().with_formatter(PlainFormatter::new()))
                .appender(FileAppender::new(path)?.with_formatter(PlainFormatter::new()))
        };

        Ok(builder.build())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    pub fn propagate(&self) -> bool {
        self.propagate
    }

    pub fn parent(&self) -> Option<&Arc<Logger>> {
        self.parent.as_ref()
    }

    /// Number of sinks attached to this logger.
    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Emit a record at `level`, dropping it when below the minimum level.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < self.min_level {
            return;
        }

        let record = LogRecord::new(&self.name, level, message.into());
        self.handle(&record);
        self.forward(&record);
    }

    /// Hand a record to every appender in attachment order.
    fn handle(&self, record: &LogRecord) {
        let mut appenders = self.appenders.write();
        for (idx, appender) in appenders.iter_mut().enumerate() {
            if let Err(e) = appender.append(record) {
                eprintln!("[LOGGER ERROR] Appender #{} failed: {}", idx, e);
            }
        }
    }

    /// Walk the parent chain while propagation stays enabled.
    ///
    /// Ancestor appenders receive the record directly; ancestor minimum
    /// levels are not re-checked.
    fn forward(&self, record: &LogRecord) {
        let mut next = if self.propagate {
            self.parent.clone()
        } else {
            None
        };
        while let Some(logger) = next {
            logger.handle(record);
            next = if logger.propagate {
                logger.parent.clone()
            } else {
                None
            };
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Typed logger configuration with named optional fields
///
/// Each absent field defaults instead of being skipped: name `"root"`,
/// level `Info`, propagate `true`. Appenders and parents are attached
/// through the builder, which owns the non-serializable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<LogLevel>,
    #[serde(default)]
    pub propagate: Option<bool>,
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use naive_logger::prelude::*;
///
/// let logger = Logger::builder("app")
///     .level(LogLevel::Debug)
///     .appender(ConsoleAppender::new())
///     .propagate(false)
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
    propagate: bool,
    parent: Option<Arc<Logger>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::default(),
            appenders: Vec::new(),
            propagate: true,
            parent: None,
        }
    }

    /// Start a builder from a typed configuration, defaulting every absent
    /// field.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.name.clone().unwrap_or_else(|| "root".to_string()))
            .level(config.level.unwrap_or_default())
            .propagate(config.propagate.unwrap_or(true))
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Set whether records are forwarded to the parent after local handling
    #[must_use = "builder methods return a new value"]
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    /// Set the parent logger for hierarchical fallback
    #[must_use = "builder methods return a new value"]
    pub fn parent(mut self, parent: Arc<Logger>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            min_level: self.min_level,
            appenders: RwLock::new(self.appenders),
            propagate: self.propagate,
            parent: self.parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::ConsoleAppender;

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder("app").level(LogLevel::Debug).build();

        assert_eq!(logger.name(), "app");
        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(logger.propagate());
        assert_eq!(logger.appender_count(), 0);
    }

    #[test]
    fn test_builder_with_appender() {
        let logger = Logger::builder("app")
            .appender(ConsoleAppender::new())
            .build();

        assert_eq!(logger.appender_count(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder("app").build();

        assert_eq!(logger.level(), LogLevel::Info);
        assert!(logger.propagate());
        assert!(logger.parent().is_none());
    }

    #[test]
    fn test_from_config_defaults_absent_fields() {
        let logger = LoggerBuilder::from_config(&LoggerConfig::default()).build();

        assert_eq!(logger.name(), "root");
        assert_eq!(logger.level(), LogLevel::Info);
        assert!(logger.propagate());
    }

    #[test]
    fn test_from_config_applies_present_fields() {
        let config = LoggerConfig {
            name: Some("worker".to_string()),
            level: Some(LogLevel::Error),
            propagate: Some(false),
        };
        let logger = LoggerBuilder::from_config(&config).build();

        assert_eq!(logger.name(), "worker");
        assert_eq!(logger.level(), LogLevel::Error);
        assert!(!logger.propagate());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = LoggerConfig {
            name: Some("worker".to_string()),
            level: Some(LogLevel::Warning),
            propagate: None,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_partial_json() {
        let parsed: LoggerConfig =
            serde_json::from_str(r#"{"level":"Debug"}"#).expect("deserialize");
        assert_eq!(parsed.level, Some(LogLevel::Debug));
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.propagate, None);
    }

    #[test]
    fn test_preset_shape() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("preset.log");
        let logger = Logger::preset_at(path.to_str().unwrap(), false).expect("preset");

        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(!logger.propagate());
        assert_eq!(logger.appender_count(), 2);
    }

    #[test]
    fn test_colorful_preset_shape() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("preset_color.log");
        let logger = Logger::preset_at(path.to_str().unwrap(), true).expect("preset");

        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(!logger.propagate());
        assert_eq!(logger.appender_count(), 2);
    }

    #[test]
    fn test_level_filtering() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("filter.log");
        let logger = Logger::builder("app")
            .level(LogLevel::Warning)
            .appender(
                FileAppender::new(path.to_str().unwrap()).expect("file appender"),
            )
            .build();

        logger.debug("hidden");
        logger.info("hidden too");
        logger.warning("visible");
        logger.flush().expect("flush");

        let content = std::fs::read_to_string(&path).expect("read log");
        assert!(!content.contains("hidden"));
        assert!(content.contains("visible"));
    }
}
