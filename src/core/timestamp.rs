//! Date formatting presets for log timestamps
//!
//! Records are stamped in local time; each preset is a named strftime
//! pattern, with a `Custom` escape hatch for anything else.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Named date-format presets
///
/// # Examples
///
/// ```
/// use naive_logger::core::DateFormat;
/// use chrono::Local;
///
/// let stamp = DateFormat::Default.format(&Local::now());
/// // Output: "2025-01-08 10:30:45"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// Full date and time: `2025-01-08 10:30:45`
    #[default]
    Default,

    /// Date only: `2025-01-08`
    Short,

    /// Time only: `10:30:45`
    Time,

    /// Date only, alias of `Short`: `2025-01-08`
    Date,

    /// Compact sortable stamp: `20250108103045`
    Zettelkasten,

    /// Custom strftime format
    ///
    /// ```
    /// use naive_logger::core::DateFormat;
    ///
    /// let format = DateFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl DateFormat {
    /// The strftime pattern behind this preset.
    pub fn pattern(&self) -> &str {
        match self {
            DateFormat::Default => "%Y-%m-%d %H:%M:%S",
            DateFormat::Short | DateFormat::Date => "%Y-%m-%d",
            DateFormat::Time => "%H:%M:%S",
            DateFormat::Zettelkasten => "%Y%m%d%H%M%S",
            DateFormat::Custom(pattern) => pattern,
        }
    }

    /// Format a local timestamp according to this preset.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        datetime.format(self.pattern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_format() {
        let result = DateFormat::Default.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_short_and_date_agree() {
        let dt = fixed_datetime();
        assert_eq!(DateFormat::Short.format(&dt), "2025-01-08");
        assert_eq!(DateFormat::Short.format(&dt), DateFormat::Date.format(&dt));
    }

    #[test]
    fn test_time_format() {
        assert_eq!(DateFormat::Time.format(&fixed_datetime()), "10:30:45");
    }

    #[test]
    fn test_zettelkasten_format() {
        assert_eq!(
            DateFormat::Zettelkasten.format(&fixed_datetime()),
            "20250108103045"
        );
    }

    #[test]
    fn test_custom_format() {
        let format = DateFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_default_is_full_stamp() {
        assert_eq!(DateFormat::default(), DateFormat::Default);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&DateFormat::Default).expect("serialize");
        assert_eq!(json, "\"Default\"");

        let custom = DateFormat::Custom("%Y-%m-%d".to_string());
        let json = serde_json::to_string(&custom).expect("serialize custom");
        assert!(json.contains("Custom"));

        let parsed: DateFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(parsed, custom);
    }
}
