//! Sink over any `io::Write`

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl WriterSink<File> {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use leveled_logger::sinks::WriterSink;
    ///
    /// let sink = WriterSink::file("/var/log/app.log").unwrap();
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(format!("opening '{}'", path.display()), e)
            })?;

        Ok(Self::new(file).with_name(path.display().to_string()))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
