//! Plain text output formatter

use super::OutputFormatter;
use ahotrie_core::Emit;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Plain text formatter - outputs one match per line as
/// `file:start-end<TAB>keyword<TAB>matched text`
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
    fn format_match(&mut self, file: &Path, emit: &Emit, matched: &str) -> Result<()> {
        writeln!(
            self.writer,
            "{}:{}-{}\t{}\t{}",
            file.display(),
            emit.start(),
            emit.end(),
            emit.keyword(),
            matched
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
