//! Plain text output formatter

use super::{OutputFormatter, TranscriptionRecord};
use anyhow::Result;
use std::io::Write;

/// Text formatter - writes the bare transcription, one per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &TranscriptionRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.ipa)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
