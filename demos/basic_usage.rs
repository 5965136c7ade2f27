//! Basic logger usage example
//!
//! Demonstrates the preset loggers and builder-configured logging at
//! different levels.
//!
//! Run with: cargo run --example basic_usage

use naive_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Naive Logger - Basic Usage Example ===\n");

    // The colorful preset: debug level, non-propagating, console + file
    println!("1. Colorful preset, all five levels:");
    let preset = Logger::build_colorful_default()?;
    preset.info("info");
    preset.debug("debug");
    preset.warning("warning");
    preset.error("error");
    preset.critical("critical");

    // A custom logger built by hand
    println!("\n2. Builder-configured logger (warnings and above):");
    let logger = Logger::builder("app")
        .level(LogLevel::Warning)
        .appender(ConsoleAppender::new())
        .propagate(false)
        .build();

    logger.debug("hidden: below the minimum level");
    logger.warning("low disk space");
    logger.error("request failed");

    // Short template, no timestamp
    println!("\n3. Short line template:");
    let terse = Logger::builder("terse")
        .appender(
            ConsoleAppender::new()
                .with_formatter(PlainFormatter::new().with_template(LineTemplate::Short)),
        )
        .build();
    terse.info("compact output");

    preset.flush()?;
    logger.flush()?;
    terse.flush()?;
    Ok(())
}
