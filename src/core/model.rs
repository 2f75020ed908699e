//! Report Model
//!
//! Every processed file maps to one `FileReport`; a run collects them into a
//! `RunReport` before rendering.

use serde::{Deserialize, Serialize};

/// What happened to a processed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Updated,
    Skipped,
    Failed,
}

/// Number of replacements a single rule made in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

/// Content metadata captured around the rewrite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Size of the original content in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_before: Option<u64>,

    /// Size of the transformed content in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_after: Option<u64>,

    /// XXH3 hash of the original content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_before: Option<String>,

    /// XXH3 hash of the transformed content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_after: Option<String>,
}

/// Error information attached to a failed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ReportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome for one processed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub status: Status,

    /// Display path, using '/' as separator
    pub path: String,

    /// Per-rule replacement counts (only rules that fired)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hits: Vec<RuleHit>,

    #[serde(default)]
    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl FileReport {
    fn new(status: Status, path: impl Into<String>) -> Self {
        Self {
            status,
            path: path.into(),
            hits: Vec::new(),
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// File was rewritten
    pub fn updated(path: impl Into<String>) -> Self {
        Self::new(Status::Updated, path)
    }

    /// File content was already in its final form
    pub fn skipped(path: impl Into<String>) -> Self {
        Self::new(Status::Skipped, path)
    }

    /// File could not be read or written
    pub fn failed(path: impl Into<String>, error: ReportError) -> Self {
        let mut report = Self::new(Status::Failed, path);
        report.errors.push(error);
        report
    }

    pub fn with_hits(mut self, hits: Vec<RuleHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Total replacements across all rules
    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

/// Counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// All file reports of a run, in processing order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub items: Vec<FileReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: FileReport) {
        self.items.push(item);
    }

    pub fn summary(&self) -> Summary {
        self.items
            .iter()
            .fold(Summary::default(), |mut acc, item| {
                match item.status {
                    Status::Updated => acc.updated += 1,
                    Status::Skipped => acc.skipped += 1,
                    Status::Failed => acc.failed += 1,
                }
                acc
            })
    }

    pub fn has_failures(&self) -> bool {
        self.items.iter().any(|i| i.status == Status::Failed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for RunReport {
    type Item = FileReport;
    type IntoIter = std::vec::IntoIter<FileReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<FileReport> for RunReport {
    fn from_iter<T: IntoIterator<Item = FileReport>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
