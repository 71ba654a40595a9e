use crate::error::EngineError;
use std::path::PathBuf;

/// Bucket a single line falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Code,
    Blank,
    Comment,
}

/// Per-file (code, blank, comment) triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub code: usize,
    pub blank: usize,
    pub comment: usize,
}

impl LineCounts {
    #[inline]
    pub const fn zero() -> Self {
        Self {
            code: 0,
            blank: 0,
            comment: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
        }
    }

    #[inline]
    pub const fn total(&self) -> usize {
        self.code + self.blank + self.comment
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub code: usize,
    pub blank: usize,
    pub comment: usize,
}

impl Totals {
    /// Fold one processed file into the totals.
    pub fn add_file(&mut self, counts: LineCounts) {
        self.files += 1;
        self.code += counts.code;
        self.blank += counts.blank;
        self.comment += counts.comment;
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub totals: Totals,
    /// Files that failed to read, in walk order. Each contributed zero lines.
    pub errors: Vec<(PathBuf, EngineError)>,
}
