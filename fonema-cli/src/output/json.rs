//! JSON output formatter

use super::{OutputFormatter, TranscriptionRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs transcription envelopes
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<TranscriptionRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &TranscriptionRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // A single transcription renders as one object, not a one-element
        // array
        match self.records.as_slice() {
            [only] => serde_json::to_writer_pretty(&mut self.writer, only)?,
            records => serde_json::to_writer_pretty(&mut self.writer, records)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
