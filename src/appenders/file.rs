//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use crate::format::{Formatter, PlainFormatter};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileAppender {
    writer: Option<BufWriter<File>>,
    formatter: Box<dyn Formatter>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_appender(path.display().to_string(), e.to_string())
            })?;
        let writer = Some(BufWriter::new(file));

        Ok(Self {
            writer,
            formatter: Box::new(PlainFormatter::new()),
        })
    }

    /// Set the formatter that decorates this sink
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use naive_logger::appenders::FileAppender;
    /// use naive_logger::format::ColorFormatter;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_formatter(ColorFormatter::new());
    /// ```
    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut output = self.formatter.format(record);
        output.push('\n');

        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
