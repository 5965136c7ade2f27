//! # Naive Logger
//!
//! A convenience layer over logging: pre-configured logger instances with
//! console and file sinks, plain and colorized line formatters, call
//! introspection helpers, and stateless text-formatting utilities.
//!
//! ## Features
//!
//! - **Preset Loggers**: one call builds a debug-level logger writing to
//!   console and file, plain or colorized
//! - **Message Templates**: structured function-call and test-call log lines
//!   rendered from extraction mappings
//! - **Text Utilities**: padding, alignment, truncation, tag wrapping

pub mod appenders;
pub mod core;
pub mod extract;
pub mod format;
pub mod macros;
pub mod text;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, DateFormat, FieldMap, FieldValue, LogLevel, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, DEFAULT_LOG_PATH,
    };
    pub use crate::extract::{
        ArgValue, FnMeta, ModuleMeta, Target, TypeMeta, VarMeta,
    };
    pub use crate::format::{
        ColorFormatter, Formatter, LineTemplate, MessageTemplate, PlainFormatter,
    };
    pub use crate::text::TextError;
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    Appender, DateFormat, FieldMap, FieldValue, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, Result, DEFAULT_LOG_PATH,
};
pub use crate::format::{ColorFormatter, Formatter, LineTemplate, MessageTemplate, PlainFormatter};
