//! Logger metrics
//!
//! Counters for lines written, lines filtered out by the threshold, sink
//! write failures and rejected threshold changes.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the sink successfully
    written: AtomicU64,

    /// Calls suppressed by the threshold or an unknown level
    filtered: AtomicU64,

    /// Lines the sink failed to accept
    write_failures: AtomicU64,

    /// Threshold changes refused because the name was not a severity
    rejected_thresholds: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            rejected_thresholds: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_thresholds(&self) -> u64 {
        self.rejected_thresholds.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected_threshold(&self) -> u64 {
        self.rejected_thresholds.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            written: AtomicU64::new(self.written()),
            filtered: AtomicU64::new(self.filtered()),
            write_failures: AtomicU64::new(self.write_failures()),
            rejected_thresholds: AtomicU64::new(self.rejected_thresholds()),
        }
    }
}
