//! Match records and inclusive intervals

use crate::error::TrieError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[start, end]` range of character offsets
pub trait Interval {
    /// First character offset
    fn start(&self) -> usize;

    /// Last character offset (inclusive)
    fn end(&self) -> usize;

    /// Number of characters covered
    fn size(&self) -> usize {
        self.end() - self.start() + 1
    }

    /// Check if the two ranges share at least one offset
    fn overlaps_with<I: Interval + ?Sized>(&self, other: &I) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// Check if `point` lies inside the range
    fn overlaps_point(&self, point: usize) -> bool {
        self.start() <= point && point <= self.end()
    }
}

/// One occurrence of a keyword in a scanned text.
///
/// Offsets are character offsets into the text passed to the scan,
/// 0-based with `end` inclusive. `keyword` always carries the spelling the
/// keyword was registered with, even when matching ignored case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EmitRecord")]
pub struct Emit {
    start: usize,
    end: usize,
    keyword: String,
}

/// Wire form of an [`Emit`], checked before it becomes one
#[derive(Deserialize)]
struct EmitRecord {
    start: usize,
    end: usize,
    keyword: String,
}

impl TryFrom<EmitRecord> for Emit {
    type Error = TrieError;

    fn try_from(record: EmitRecord) -> Result<Self, Self::Error> {
        if record.start > record.end {
            return Err(TrieError::invalid_argument(format!(
                "emit start {} after end {}",
                record.start, record.end
            )));
        }
        Ok(Self::new(record.start, record.end, record.keyword))
    }
}

impl Emit {
    /// Create an emit covering `start..=end`
    pub fn new(start: usize, end: usize, keyword: impl Into<String>) -> Self {
        debug_assert!(start <= end, "emit start {start} after end {end}");
        Self {
            start,
            end,
            keyword: keyword.into(),
        }
    }

    /// First character offset of the match
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last character offset of the match (inclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Matched keyword, original casing
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Consume the emit, keeping only the keyword
    pub fn into_keyword(self) -> String {
        self.keyword
    }
}

impl Interval for Emit {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl fmt::Display for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}={}", self.start, self.end, self.keyword)
    }
}
