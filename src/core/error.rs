//! Error taxonomy for discovery, reading, writing and rule evaluation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("search root does not exist or is not a directory: {}", root.display())]
    MissingRoot { root: PathBuf },

    #[error("failed to walk {}: {source}", root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rule '{rule}' failed: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

impl RewriteError {
    /// Stable machine-readable code used in structured reports
    pub fn code(&self) -> &'static str {
        match self {
            RewriteError::MissingRoot { .. } => "MISSING_ROOT",
            RewriteError::Discovery { .. } => "DISCOVERY_FAILED",
            RewriteError::Read { .. } => "READ_FAILED",
            RewriteError::Decode { .. } => "DECODE_FAILED",
            RewriteError::Write { .. } => "WRITE_FAILED",
            RewriteError::Pattern { .. } => "PATTERN_FAILED",
        }
    }

    /// Whether the error concerns a single file rather than the whole run
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            RewriteError::Read { .. } | RewriteError::Decode { .. } | RewriteError::Write { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_per_kind() {
        let read = RewriteError::Read {
            path: PathBuf::from("a.tsx"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let write = RewriteError::Write {
            path: PathBuf::from("a.tsx"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(read.code(), "READ_FAILED");
        assert_eq!(write.code(), "WRITE_FAILED");
    }

    #[test]
    fn test_missing_root_is_not_per_file() {
        let err = RewriteError::MissingRoot {
            root: PathBuf::from("app/survey"),
        };
        assert!(!err.is_per_file());
        assert!(err.to_string().contains("app/survey"));
    }

    #[test]
    fn test_decode_error_message_names_path() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = RewriteError::Decode {
            path: PathBuf::from("app/survey/page.tsx"),
            source,
        };
        assert!(err.is_per_file());
        assert!(err.to_string().starts_with("app/survey/page.tsx is not valid UTF-8"));
    }
}
