//! Message templates for structured function-call logging
//!
//! Templates substitute named fields from an extraction mapping into a fixed
//! string pattern. A missing required key is an error, never a silent
//! default.

use std::fmt;

use crate::core::{FieldMap, FieldValue, LoggerError, Result};
use crate::extract::{self, ArgValue, Target};

/// Message templates keyed by purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTemplate {
    /// `['<module>' | line=<line> | <name>] [<name>(<args>) -> <return_type> <return>] :: [exec_time=<time> ms]`
    Function,

    /// The [`MessageTemplate::Function`] rendering suffixed with
    /// `>>> expected=<expected>, actual=<actual> equal?=<bool>`.
    TestFunction,
}

impl MessageTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            MessageTemplate::Function => "function",
            MessageTemplate::TestFunction => "test_function",
        }
    }

    /// Substitute the mapping's fields into this template.
    pub fn render(&self, fields: &FieldMap) -> Result<String> {
        let base = format!(
            "['{}' | line={} | {}] [{}({}) -> {} {}] :: [exec_time={} ms]",
            self.field(fields, "module")?,
            self.field(fields, "line")?,
            self.field(fields, "name")?,
            self.field(fields, "name")?,
            self.field(fields, "args")?,
            self.field(fields, "return_type")?,
            self.field(fields, "return")?,
            self.field(fields, "exec_time")?,
        );

        match self {
            MessageTemplate::Function => Ok(base),
            MessageTemplate::TestFunction => Ok(format!(
                "{} >>> expected={}, actual={} equal?={}",
                base,
                self.field(fields, "expected")?,
                self.field(fields, "actual")?,
                self.field(fields, "equal")?,
            )),
        }
    }

    fn field<'a>(&self, fields: &'a FieldMap, key: &str) -> Result<&'a FieldValue> {
        fields
            .get(key)
            .ok_or_else(|| LoggerError::missing_field(self.name(), key))
    }
}

/// Extract call data from `target` and render it through the function
/// template in one step.
pub fn format_function_call<R, F>(
    target: &Target<'_>,
    args: &[ArgValue],
    call: F,
) -> Result<String>
where
    F: FnOnce() -> R,
    R: fmt::Debug,
{
    let fields = extract::fn_data(target, args, call)?;
    MessageTemplate::Function.render(&fields)
}

/// Extract test-call data from `target` and render it through the
/// test-function template in one step.
pub fn format_test_call<R, F>(
    target: &Target<'_>,
    args: &[ArgValue],
    call: F,
    expected: &R,
) -> Result<String>
where
    F: FnOnce() -> R,
    R: fmt::Debug + PartialEq,
{
    let fields = extract::test_fn_data(target, args, call, expected)?;
    MessageTemplate::TestFunction.render(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_fields() -> FieldMap {
        FieldMap::new()
            .with_field("module", "geometry")
            .with_field("line", 12)
            .with_field("name", "area")
            .with_field("args", "i64 3, i64 4")
            .with_field("return", "12")
            .with_field("return_type", "i64")
            .with_field("exec_time", "0.004")
    }

    #[test]
    fn test_function_template() {
        let line = MessageTemplate::Function.render(&call_fields()).unwrap();
        assert_eq!(
            line,
            "['geometry' | line=12 | area] [area(i64 3, i64 4) -> i64 12] :: [exec_time=0.004 ms]"
        );
    }

    #[test]
    fn test_test_function_template() {
        let fields = call_fields()
            .with_field("expected", "12")
            .with_field("actual", "12")
            .with_field("equal", true);

        let line = MessageTemplate::TestFunction.render(&fields).unwrap();
        assert!(line.ends_with(">>> expected=12, actual=12 equal?=true"));
        assert!(line.starts_with("['geometry' | line=12 | area]"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let fields = FieldMap::new()
            .with_field("module", "geometry")
            .with_field("line", 12)
            .with_field("name", "area");

        let err = MessageTemplate::Function.render(&fields).unwrap_err();
        match err {
            LoggerError::MissingField { template, field } => {
                assert_eq!(template, "function");
                assert_eq!(field, "args");
            }
            other => panic!("expected MissingField, got {other}"),
        }
    }

    #[test]
    fn test_test_template_requires_comparison_fields() {
        let err = MessageTemplate::TestFunction
            .render(&call_fields())
            .unwrap_err();
        match err {
            LoggerError::MissingField { field, .. } => assert_eq!(field, "expected"),
            other => panic!("expected MissingField, got {other}"),
        }
    }
}
