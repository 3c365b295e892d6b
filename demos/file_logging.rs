//! File logging example
//!
//! Sends the error stream to one file and the output stream to another.
//!
//! Run with: cargo run --example file_logging

use logwrap::prelude::*;

fn main() -> Result<()> {
    println!("=== logwrap - File Logging Example ===\n");

    let level = LevelSet::from_env("LOG_LEVEL")?.unwrap_or(LevelSet::ALL);

    let logger = Options::new()
        .with_stderr(FileAppender::new("errors.log")?)
        .with_stdout(FileAppender::new("application.log")?)
        .with_level(level)
        .with_prefixes(Prefixes::standard())
        .build();

    println!("1. Logging with level {}:", logger.level());

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logwrap::info!(logger, "Processing item {}/5", i);
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    // Flush to ensure all logs are written
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'errors.log' for the output");

    Ok(())
}
