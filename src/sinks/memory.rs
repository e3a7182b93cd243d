//! In-memory sink
//!
//! Clones share one buffer, so a caller can keep a handle while the logger
//! owns another.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.buffer.lock().push_str(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
