//! Scan progress with a running match count

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Counts scanned files and the matches found so far.
///
/// Workers report through `&self`, so one reporter is shared across the
/// scan's thread pool.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    matches: AtomicUsize,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            matches: AtomicUsize::new(0),
            quiet,
        }
    }

    /// Show a bar sized to the number of input files
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files, {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.set_message("0 matches");
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a scanned file and the number of matches it produced
    pub fn file_completed(&self, filename: &str, matches: usize) {
        let total = self.matches.fetch_add(matches, Ordering::Relaxed) + matches;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{total} matches (last: {filename})"));
            pb.inc(1);
        }
    }

    /// Matches reported so far, counted even when quiet
    pub fn match_total(&self) -> usize {
        self.matches.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} matches", self.match_total()));
        }
    }
}
