//! FileRewriter - discover, read, transform, compare, write, report

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::error::{Result, RewriteError};
use crate::core::model::{FileReport, ReportError, RunReport};
use crate::core::paths::normalize_path;
use crate::core::util::content_meta;
use crate::rewrite::discover::discover;
use crate::rewrite::rules::RuleSet;
use crate::rewrite::transform::transform;

/// Directory searched, relative to the working directory
pub const DEFAULT_ROOT: &str = "app/survey";

/// Extension of the component files that get rewritten
pub const DEFAULT_EXTENSION: &str = "tsx";

/// What to do when a single file cannot be read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run at the first failure
    #[default]
    Abort,
    /// Record the failure and move on to the next file
    Continue,
}

/// Configuration for a rewrite run
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    pub root: PathBuf,
    pub extension: String,
    pub error_policy: ErrorPolicy,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            error_policy: ErrorPolicy::Abort,
        }
    }
}

impl RewriteConfig {
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

pub struct FileRewriter<'r> {
    config: RewriteConfig,
    rules: &'r RuleSet,
}

impl<'r> FileRewriter<'r> {
    pub fn new(config: RewriteConfig, rules: &'r RuleSet) -> Self {
        Self { config, rules }
    }

    /// Process every candidate under the root in path order.
    ///
    /// `on_report` is called as soon as each file is done, so callers can
    /// print progress that survives an aborted run.
    pub fn run<F>(&self, mut on_report: F) -> Result<RunReport>
    where
        F: FnMut(&FileReport),
    {
        if self.rules.is_empty() {
            warn!("rule set is empty, every file will be skipped");
        }
        let paths = discover(&self.config.root, &self.config.extension)?;
        info!(
            root = %self.config.root.display(),
            files = paths.len(),
            rules = self.rules.len(),
            "starting rewrite"
        );

        let mut report = RunReport::new();
        for path in paths {
            let item = match self.process_file(&path) {
                Ok(item) => item,
                Err(err) => self.recover(&path, err)?,
            };
            on_report(&item);
            report.push(item);
        }

        Ok(report)
    }

    /// Read, transform and conditionally write a single file
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        let original = read_text(path)?;
        let transformed = transform(self.rules, &original)?;
        let meta = content_meta(&original, &transformed.text);
        let shown = normalize_path(path);

        if transformed.text == original {
            debug!(path = %shown, "unchanged");
            return Ok(FileReport::skipped(shown)
                .with_hits(transformed.hits)
                .with_meta(meta));
        }

        write_text(path, &transformed.text)?;
        debug!(path = %shown, hits = transformed.hits.len(), "rewritten");
        Ok(FileReport::updated(shown)
            .with_hits(transformed.hits)
            .with_meta(meta))
    }

    /// Apply the error policy to a failure on `path`: per-file failures become
    /// a failed report entry under `Continue`, everything else propagates.
    fn recover(&self, path: &Path, err: RewriteError) -> Result<FileReport> {
        if !err.is_per_file() || self.config.error_policy == ErrorPolicy::Abort {
            return Err(err);
        }
        warn!(path = %path.display(), error = %err, "file failed, continuing");
        Ok(FileReport::failed(
            normalize_path(path),
            ReportError::new(err.code(), err.to_string()),
        ))
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| RewriteError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes()).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
