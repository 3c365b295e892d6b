//! Basic logger usage example
//!
//! Demonstrates level masks, stream routing and reconfiguration.
//!
//! Run with: cargo run --example basic_usage

use logwrap::prelude::*;

fn main() -> Result<()> {
    println!("=== logwrap - Basic Usage Example ===\n");

    let logger = Options::new()
        .with_level(LevelSet::ALL)
        .with_prefixes(Prefixes::standard())
        .with_decorator(Decorator::ansi())
        .build();

    // Fatal, Error and Warn go to stderr; Info, Debug and Trace to stdout
    println!("1. Logging at every level but fatal:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logwrap::info!(logger, "Formatted: {} + {} = {}", 2, 2, 4);

    println!("\n2. Everything but debug and trace:");
    logger.set_level(LevelSet::ALL ^ LevelSet::DEBUG ^ LevelSet::TRACE);
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");

    println!("\n3. Caller locations and microseconds:");
    logger.reset(
        logger
            .options()
            .with_flags(Flags::STD | Flags::MICROSECONDS | Flags::SHORT_FILE),
    );
    logger.info("Where am I?");

    println!("\n4. Fatal is off, so this does not exit:");
    logger.set_level(LevelSet::ALL ^ LevelSet::FATAL);
    logger.fatal("Fatal message (hidden, program keeps running)");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
