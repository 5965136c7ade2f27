//! Structured call logging example
//!
//! Demonstrates the extractors, message templates, and text utilities.
//!
//! Run with: cargo run --example call_logging

use naive_logger::extract::{var_data, Target};
use naive_logger::format::{format_function_call, format_test_call};
use naive_logger::prelude::*;
use naive_logger::text;
use naive_logger::{args, fn_meta, var_meta};

fn area(width: i64, height: i64) -> i64 {
    width * height
}

fn main() -> Result<()> {
    let logger = Logger::builder("demo")
        .level(LogLevel::Debug)
        .appender(ConsoleAppender::new())
        .propagate(false)
        .build();

    // A function call rendered through the function template
    let meta = fn_meta!(area, "Rectangle area.");
    let line = format_function_call(&Target::Function(&meta), &args![3i64, 4i64], || area(3, 4))?;
    logger.debug(line);

    // The same call rendered as a test-style entry
    let line = format_test_call(
        &Target::Function(&meta),
        &args![3i64, 4i64],
        || area(3, 4),
        &12,
    )?;
    logger.debug(line);

    // A variable snapshot
    let retries = 3u32;
    let fields = var_data(&Target::Var(var_meta!(retries)))?;
    logger.info(fields.format_fields());

    // Text utilities for banner-style output
    let banner = text::wrap(" call log ", -1, "==");
    logger.info(banner);
    logger.info(text::tag_wrap("done", "<b>"));
    logger.info(text::shorten("a very long trailing explanation", 24, "..."));

    logger.flush()?;
    Ok(())
}
