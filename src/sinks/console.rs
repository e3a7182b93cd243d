//! Standard output sink

use crate::core::{Result, Sink};
use std::io::{self, Write};

/// Writes lines to the process's standard output.
///
/// Stdout is borrowed, never closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut handle = io::stdout().lock();
        handle.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
