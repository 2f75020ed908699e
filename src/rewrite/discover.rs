//! Candidate discovery
//!
//! Walks the root recursively with walkdir and keeps regular files carrying
//! the wanted extension. A symlink counts when it resolves to a regular file;
//! symlinked directories are not descended.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::error::{Result, RewriteError};
use crate::core::paths::has_extension;

/// Find all files under `root` with the given extension, sorted by path
pub fn discover(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(RewriteError::MissingRoot {
            root: root.to_path_buf(),
        });
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            // The root itself must be readable; deeper failures skip that subtree
            Err(e) if e.depth() == 0 => {
                return Err(RewriteError::Discovery {
                    root: root.to_path_buf(),
                    source: e,
                })
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.path().is_file() && has_extension(entry.path(), extension) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    debug!(root = %root.display(), count = found.len(), "discovered candidates");
    Ok(found)
}
