//! Scan command implementation

use crate::error::CliError;
use crate::input::{load_keywords, resolve_patterns};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use ahotrie_core::{Emit, KeywordConfig, Trie};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::iter;
use std::path::{Path, PathBuf};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Keyword to search for (repeatable)
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// File with one keyword per line; blank lines and `#` comments are skipped
    #[arg(short = 'K', long, value_name = "FILE")]
    pub keywords_file: Vec<PathBuf>,

    /// TOML file with keywords and match options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Match regardless of letter case
    #[arg(long)]
    pub ignore_case: bool,

    /// Only report matches bounded by non-alphanumeric characters
    #[arg(long)]
    pub whole_words: bool,

    /// Only report matches bounded by whitespace
    #[arg(long)]
    pub whitespace_words: bool,

    /// Resolve overlapping matches, longest first
    #[arg(long)]
    pub no_overlaps: bool,

    /// Report only the first match of each file
    #[arg(long)]
    pub first: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N", env = "AHOTRIE_THREADS")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One match per line: file, span, keyword and matched text
    Text,
    /// JSON array of matches with metadata
    Json,
    /// Markdown formatted list
    Markdown,
}

/// Matches found in one input file
#[derive(Debug)]
struct FileMatches {
    path: PathBuf,
    matches: Vec<(Emit, String)>,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting keyword scan");
        log::debug!("Arguments: {:?}", self);

        let trie = self.load_config()?.build_trie();
        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Scanning {} file(s) for {} keyword(s)",
            files.len(),
            trie.automaton().keywords().len()
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count()?)
            .build()
            .context("Failed to create thread pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let found = scan_file(&trie, path)?;
                    progress.file_completed(&path.display().to_string(), found.matches.len());
                    Ok(found)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();
        log::debug!("Progress counted {} match(es)", progress.match_total());

        let mut formatter = self.create_formatter()?;
        let mut total = 0;
        for file in &results {
            log::debug!("{}: {} match(es)", file.path.display(), file.matches.len());
            for (emit, matched) in &file.matches {
                formatter.format_match(&file.path, emit, matched)?;
            }
            total += file.matches.len();
        }
        formatter.finish()?;

        log::info!("Found {} match(es) in {} file(s)", total, results.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Merge the config file, keyword sources and flags.
    ///
    /// Flags can only switch options on; keywords from every source are
    /// concatenated in the order config file, `-k`, `-K`.
    fn load_config(&self) -> Result<KeywordConfig> {
        let mut config = match &self.config {
            Some(path) => KeywordConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => KeywordConfig::default(),
        };

        config.keywords.extend(self.keywords.iter().cloned());
        for path in &self.keywords_file {
            config.keywords.extend(load_keywords(path)?);
        }

        if config.keywords.is_empty() {
            return Err(CliError::NoKeywords.into());
        }

        let options = &mut config.options;
        options.case_insensitive |= self.ignore_case;
        options.only_whole_words |= self.whole_words;
        options.only_whole_words_whitespace_separated |= self.whitespace_words;
        options.remove_overlaps |= self.no_overlaps;
        options.stop_at_first_match |= self.first;

        Ok(config)
    }

    fn thread_count(&self) -> Result<usize> {
        match self.threads {
            Some(0) => Err(CliError::InvalidThreadCount(0).into()),
            Some(count) => Ok(count),
            None => Ok(num_cpus::get()),
        }
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

/// Read `path` and pair each match with the text it covers
fn scan_file(trie: &Trie, path: &Path) -> Result<FileMatches> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    log::trace!("Read {} bytes from {}", text.len(), path.display());
    Ok(FileMatches {
        path: path.to_path_buf(),
        matches: match_texts(trie, &text),
    })
}

fn match_texts(trie: &Trie, text: &str) -> Vec<(Emit, String)> {
    // Emit offsets count characters; map them to byte offsets
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(iter::once(text.len()))
        .collect();

    trie.parse_text(text)
        .into_iter()
        .map(|emit| {
            let matched = text[offsets[emit.start()]..offsets[emit.end() + 1]].to_string();
            (emit, matched)
        })
        .collect()
}
