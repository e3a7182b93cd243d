//! Basic logger usage example
//!
//! Demonstrates threshold filtering with the fixed rank table
//! (INFO=0, WARN=1, ERROR=2, DEBUG=3).
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    // Writes "Logger initialized with log level INFO" to stdout
    let logger = LeveledLogger::new();

    println!("\n1. Default INFO threshold - only INFO shows:");
    logger.info("This is an info message");
    logger.warn("This is a warning message (hidden)");
    logger.error("This is an error message (hidden)");
    logger.debug("This is a debug message (hidden)");

    println!("\n2. ERROR threshold - INFO, WARN and ERROR show:");
    logger.set_threshold(Severity::Error);
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    warn!(logger, "Retry attempt {} of {}", 3, 5);
    logger.debug("Still hidden");

    println!("\n3. Rejected threshold name:");
    logger.set_threshold_str("TRACE");
    println!("   Threshold is still {}", logger.threshold());

    println!("\n4. DEBUG threshold - everything shows:");
    logger.set_threshold_str("DEBUG");
    logger.debug("Debug output enabled");

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
