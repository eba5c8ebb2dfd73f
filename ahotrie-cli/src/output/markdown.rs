//! Markdown output formatter

use super::OutputFormatter;
use ahotrie_core::Emit;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Markdown formatter - outputs matches as a numbered list per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    current_file: Option<PathBuf>,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_file: None,
            match_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_match(&mut self, file: &Path, emit: &Emit, matched: &str) -> Result<()> {
        if self.current_file.as_deref() != Some(file) {
            if self.current_file.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", file.display())?;
            writeln!(self.writer)?;
            self.current_file = Some(file.to_path_buf());
        }

        self.match_count += 1;
        writeln!(
            self.writer,
            "{}. **{}** at {}-{}: `{}`",
            self.match_count,
            emit.keyword(),
            emit.start(),
            emit.end(),
            matched
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
