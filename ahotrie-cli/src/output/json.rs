//! JSON output formatter

use super::OutputFormatter;
use ahotrie_core::Emit;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs matches as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    matches: Vec<MatchData>,
}

/// Data structure for JSON output
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchData {
    /// File the match was found in
    pub file: String,
    /// Character offset of the first matched character
    pub start: usize,
    /// Character offset of the last matched character
    pub end: usize,
    /// Keyword as registered
    pub keyword: String,
    /// Matched text as written in the file
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            matches: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_match(&mut self, file: &Path, emit: &Emit, matched: &str) -> Result<()> {
        self.matches.push(MatchData {
            file: file.display().to_string(),
            start: emit.start(),
            end: emit.end(),
            keyword: emit.keyword().to_string(),
            text: matched.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.matches)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
