//! Console appender implementation

use crate::core::{Appender, LogLevel, LogRecord, Result};
use crate::format::{Formatter, PlainFormatter};

pub struct ConsoleAppender {
    formatter: Box<dyn Formatter>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            formatter: Box::new(PlainFormatter::new()),
        }
    }

    /// Set the formatter that decorates this sink
    ///
    /// # Example
    ///
    /// ```
    /// use naive_logger::appenders::ConsoleAppender;
    /// use naive_logger::format::ColorFormatter;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_formatter(ColorFormatter::new());
    /// ```
    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.formatter.format(record);

        // Route Error and Critical levels to stderr, others to stdout
        match record.level {
            LogLevel::Error | LogLevel::Critical => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
