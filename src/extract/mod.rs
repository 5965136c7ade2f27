//! Introspection helpers: turn call-site metadata into field mappings
//!
//! There is no ambient reflection to lean on, so the metadata is captured
//! where it is statically known: the [`crate::fn_meta!`], [`crate::var_meta!`],
//! [`crate::type_meta!`] and [`crate::module_meta!`] macros record module
//! paths, names, line numbers and type names into small meta structs. The
//! extraction functions then validate that they were pointed at the right
//! kind of [`Target`] and produce a [`FieldMap`] for the message templates.
//!
//! Extracting function data actually performs the call: it is not
//! side-effect-free, and the elapsed wall time of the call is part of the
//! mapping.

use std::fmt;
use std::time::Instant;

use crate::core::{FieldMap, LoggerError, Result};

/// Trim a `std::any::type_name` path down to bare type names.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
    out
}

/// Static metadata describing a function, captured at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnMeta {
    pub module: &'static str,
    pub name: &'static str,
    pub line: u32,
    pub doc: Option<&'static str>,
}

/// A variable snapshot: explicit name, short type name, debug value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarMeta {
    pub name: &'static str,
    pub type_name: String,
    pub value: String,
}

impl VarMeta {
    pub fn of<T: fmt::Debug>(name: &'static str, value: &T) -> Self {
        Self {
            name,
            type_name: short_type_name::<T>(),
            value: format!("{:?}", value),
        }
    }
}

/// Static metadata describing a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMeta {
    pub name: &'static str,
    pub module: &'static str,
    pub doc: Option<&'static str>,
    pub members: &'static [&'static str],
}

/// Static metadata describing a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleMeta {
    pub name: &'static str,
    pub doc: Option<&'static str>,
    pub members: &'static [&'static str],
}

/// What an extractor is pointed at.
///
/// Pointing an extractor at the wrong kind of target is the type-mismatch
/// error; it is raised before anything is invoked.
#[derive(Debug, Clone)]
pub enum Target<'a> {
    Function(&'a FnMeta),
    Var(VarMeta),
    Type(&'a TypeMeta),
    Module(&'a ModuleMeta),
}

impl Target<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Target::Function(_) => "function",
            Target::Var(_) => "variable",
            Target::Type(_) => "type",
            Target::Module(_) => "module",
        }
    }
}

/// One stringified call argument: short type name plus debug value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgValue {
    pub type_name: String,
    pub value: String,
}

impl ArgValue {
    pub fn of<T: fmt::Debug>(value: &T) -> Self {
        Self {
            type_name: short_type_name::<T>(),
            value: format!("{:?}", value),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.value)
    }
}

/// Invoke the function behind `target` and map its call data.
///
/// The mapping carries module, name, source line, doc string, stringified
/// arguments, return value, return type name, and elapsed milliseconds.
/// Non-function targets are rejected without invoking the closure.
pub fn fn_data<R, F>(target: &Target<'_>, args: &[ArgValue], call: F) -> Result<FieldMap>
where
    F: FnOnce() -> R,
    R: fmt::Debug,
{
    run_call(target, args, call).map(|(fields, _)| fields)
}

/// Everything [`fn_data`] produces, plus `expected`, `actual` and an
/// `equal` flag. The function is invoked exactly once; the single result
/// serves both the return and actual fields.
pub fn test_fn_data<R, F>(
    target: &Target<'_>,
    args: &[ArgValue],
    call: F,
    expected: &R,
) -> Result<FieldMap>
where
    F: FnOnce() -> R,
    R: fmt::Debug + PartialEq,
{
    let (mut fields, actual) = run_call(target, args, call)?;
    fields.insert("expected", format!("{:?}", expected));
    fields.insert("actual", format!("{:?}", actual));
    fields.insert("equal", actual == *expected);
    Ok(fields)
}

fn run_call<R, F>(target: &Target<'_>, args: &[ArgValue], call: F) -> Result<(FieldMap, R)>
where
    F: FnOnce() -> R,
    R: fmt::Debug,
{
    let meta = match target {
        Target::Function(meta) => meta,
        other => return Err(LoggerError::target_mismatch("function", other.kind())),
    };

    let start = Instant::now();
    let ret = call();
    let elapsed = start.elapsed();

    let args = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut fields = FieldMap::new();
    fields.insert("module", meta.module);
    fields.insert("name", meta.name);
    fields.insert("line", meta.line);
    fields.insert("doc", meta.doc);
    fields.insert("args", args);
    fields.insert("return", format!("{:?}", ret));
    fields.insert("return_type", short_type_name::<R>());
    fields.insert(
        "exec_time",
        format!("{:.3}", elapsed.as_secs_f64() * 1000.0),
    );
    Ok((fields, ret))
}

/// Map a variable snapshot: name, type, value.
pub fn var_data(target: &Target<'_>) -> Result<FieldMap> {
    let meta = match target {
        Target::Var(meta) => meta,
        other => return Err(LoggerError::target_mismatch("variable", other.kind())),
    };

    let mut fields = FieldMap::new();
    fields.insert("name", meta.name);
    fields.insert("type", meta.type_name.clone());
    fields.insert("value", meta.value.clone());
    Ok(fields)
}

/// Map a type's metadata: name, containing module, doc string, members.
pub fn type_data(target: &Target<'_>) -> Result<FieldMap> {
    let meta = match target {
        Target::Type(meta) => meta,
        other => return Err(LoggerError::target_mismatch("type", other.kind())),
    };

    let mut fields = FieldMap::new();
    fields.insert("name", meta.name);
    fields.insert("module", meta.module);
    fields.insert("doc", meta.doc);
    fields.insert("members", meta.members.join(", "));
    Ok(fields)
}

/// Map a module's metadata: name, doc string, members.
pub fn module_data(target: &Target<'_>) -> Result<FieldMap> {
    let meta = match target {
        Target::Module(meta) => meta,
        other => return Err(LoggerError::target_mismatch("module", other.kind())),
    };

    let mut fields = FieldMap::new();
    fields.insert("name", meta.name);
    fields.insert("doc", meta.doc);
    fields.insert("members", meta.members.join(", "));
    Ok(fields)
}
