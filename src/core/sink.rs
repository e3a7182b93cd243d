//! Sink trait for the logger's output destination

use super::error::Result;

/// The only write surface a logger holds.
///
/// `line` is already fully rendered and newline-terminated; implementations
/// should write it in one piece so concurrent lines never interleave.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
