//! Logging and capture macros.
//!
//! The level macros provide a convenient interface for logging with
//! automatic string formatting, similar to `println!` and `format!`. The
//! capture macros record call-site metadata (module path, name, line,
//! type names) for the extractors.
//!
//! # Examples
//!
//! ```
//! use naive_logger::prelude::*;
//! use naive_logger::info;
//!
//! let logger = Logger::builder("app").build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use naive_logger::prelude::*;
/// # let logger = Logger::builder("app").build();
/// use naive_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use naive_logger::prelude::*;
/// # let logger = Logger::builder("app").level(LogLevel::Debug).build();
/// use naive_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use naive_logger::prelude::*;
/// # let logger = Logger::builder("app").build();
/// use naive_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use naive_logger::prelude::*;
/// # let logger = Logger::builder("app").build();
/// use naive_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use naive_logger::prelude::*;
/// # let logger = Logger::builder("app").build();
/// use naive_logger::error;
/// error!(logger, "Failed to open sink");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use naive_logger::prelude::*;
/// # let logger = Logger::builder("app").build();
/// use naive_logger::critical;
/// critical!(logger, "Unrecoverable failure");
/// critical!(logger, "Cannot continue: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Capture function metadata at the call site.
///
/// The module path and line number come from the invocation site; pass a
/// doc string as the second argument when one is worth carrying.
///
/// ```
/// use naive_logger::fn_meta;
///
/// fn add(x: i64, y: i64) -> i64 { x + y }
///
/// let meta = fn_meta!(add);
/// assert_eq!(meta.name, "add");
/// ```
#[macro_export]
macro_rules! fn_meta {
    ($name:ident) => {
        $crate::extract::FnMeta {
            module: module_path!(),
            name: stringify!($name),
            line: line!(),
            doc: None,
        }
    };
    ($name:ident, $doc:expr) => {
        $crate::extract::FnMeta {
            module: module_path!(),
            name: stringify!($name),
            line: line!(),
            doc: Some($doc),
        }
    };
}

/// Capture a variable's name, type and value.
///
/// The name is taken from the expression itself, so there is no ambiguity
/// when several bindings hold equal values.
///
/// ```
/// use naive_logger::var_meta;
///
/// let retries = 3;
/// let meta = var_meta!(retries);
/// assert_eq!(meta.name, "retries");
/// assert_eq!(meta.value, "3");
/// ```
#[macro_export]
macro_rules! var_meta {
    ($var:expr) => {
        $crate::extract::VarMeta::of(stringify!($var), &$var)
    };
}

/// Capture type metadata, optionally with a doc string and member names.
///
/// ```
/// use naive_logger::type_meta;
///
/// struct Point { x: f64, y: f64 }
/// # let _ = Point { x: 0.0, y: 0.0 };
///
/// let meta = type_meta!(Point, members = [x, y]);
/// assert_eq!(meta.members, &["x", "y"]);
/// ```
#[macro_export]
macro_rules! type_meta {
    ($ty:ident) => {
        $crate::extract::TypeMeta {
            name: stringify!($ty),
            module: module_path!(),
            doc: None,
            members: &[],
        }
    };
    ($ty:ident, doc = $doc:expr) => {
        $crate::extract::TypeMeta {
            name: stringify!($ty),
            module: module_path!(),
            doc: Some($doc),
            members: &[],
        }
    };
    ($ty:ident, members = [$($member:ident),* $(,)?]) => {
        $crate::extract::TypeMeta {
            name: stringify!($ty),
            module: module_path!(),
            doc: None,
            members: &[$(stringify!($member)),*],
        }
    };
    ($ty:ident, doc = $doc:expr, members = [$($member:ident),* $(,)?]) => {
        $crate::extract::TypeMeta {
            name: stringify!($ty),
            module: module_path!(),
            doc: Some($doc),
            members: &[$(stringify!($member)),*],
        }
    };
}

/// Capture metadata for the current module.
///
/// ```
/// use naive_logger::module_meta;
///
/// let meta = module_meta!();
/// assert!(meta.name.contains("::") || !meta.name.is_empty());
/// ```
#[macro_export]
macro_rules! module_meta {
    () => {
        $crate::extract::ModuleMeta {
            name: module_path!(),
            doc: None,
            members: &[],
        }
    };
    (doc = $doc:expr) => {
        $crate::extract::ModuleMeta {
            name: module_path!(),
            doc: Some($doc),
            members: &[],
        }
    };
    (doc = $doc:expr, members = [$($member:ident),* $(,)?]) => {
        $crate::extract::ModuleMeta {
            name: module_path!(),
            doc: Some($doc),
            members: &[$(stringify!($member)),*],
        }
    };
}

/// Stringify call arguments for the extractors.
///
/// ```
/// use naive_logger::args;
///
/// let values = args![2i64, "two"];
/// assert_eq!(values[0].to_string(), "i64 2");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::extract::ArgValue::of(&$arg)),*]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::extract::{fn_data, Target};

    #[test]
    fn test_log_macro() {
        let logger = Logger::builder("macros").build();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::builder("macros").level(LogLevel::Debug).build();
        debug!(logger, "Debug message");
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Failure: {}", "system");
    }

    #[test]
    fn test_fn_meta_macro() {
        fn add(x: i64, y: i64) -> i64 {
            x + y
        }

        let meta = fn_meta!(add);
        assert_eq!(meta.name, "add");
        assert!(meta.module.contains("macros"));
        assert!(meta.line > 0);

        let fields = fn_data(&Target::Function(&meta), &args![2i64, 3i64], || add(2, 3))
            .expect("fn_data");
        assert_eq!(fields.get("args").unwrap().to_string(), "i64 2, i64 3");
    }

    #[test]
    fn test_var_meta_macro() {
        let retries = 3u32;
        let meta = var_meta!(retries);
        assert_eq!(meta.name, "retries");
        assert_eq!(meta.type_name, "u32");
        assert_eq!(meta.value, "3");
    }

    #[test]
    fn test_type_meta_macro() {
        #[allow(dead_code)]
        struct Point {
            x: f64,
            y: f64,
        }

        let meta = type_meta!(Point, doc = "A point.", members = [x, y]);
        assert_eq!(meta.name, "Point");
        assert_eq!(meta.doc, Some("A point."));
        assert_eq!(meta.members, &["x", "y"]);
    }

    #[test]
    fn test_module_meta_macro() {
        let meta = module_meta!(doc = "Macro tests.");
        assert!(meta.name.ends_with("macros::tests"));
        assert_eq!(meta.doc, Some("Macro tests."));
    }
}
