//! Golden tests for restyle
//!
//! The sample project is copied into a temporary directory, rewritten, and
//! compared file by file against the expected tree.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use walkdir::WalkDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

fn expected_tree() -> PathBuf {
    fixtures_dir().join("expected")
}

/// Copy a directory tree so the fixtures themselves are never rewritten
fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from) {
        let entry = entry.unwrap();
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn restyle_in(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("restyle"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_rewritten_tree_matches_expected() {
        let temp = tempdir().unwrap();
        copy_tree(&sample_project(), temp.path());

        restyle_in(temp.path()).assert().success();

        for entry in WalkDir::new(expected_tree()) {
            let entry = entry.unwrap();
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(expected_tree()).unwrap();
            let actual = fs::read_to_string(temp.path().join(relative)).unwrap();
            let expected = fs::read_to_string(entry.path()).unwrap();
            assert_eq!(actual, expected, "mismatch in {}", relative.display());
        }
    }

    #[test]
    fn golden_report_lines() {
        let temp = tempdir().unwrap();
        copy_tree(&sample_project(), temp.path());

        let output = restyle_in(temp.path()).output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(
            lines,
            vec![
                "✅ Updated app/survey/dimensions/1/page.tsx",
                "Skipped app/survey/firmographics/page.tsx (no matches)",
                "✅ Updated app/survey/layout.tsx",
                "2 updated, 1 skipped, 0 failed",
            ]
        );
    }

    #[test]
    fn golden_sibling_directories_untouched() {
        let temp = tempdir().unwrap();
        copy_tree(&sample_project(), temp.path());

        restyle_in(temp.path()).assert().success();

        let original =
            fs::read_to_string(sample_project().join("app/report/page.tsx")).unwrap();
        let after = fs::read_to_string(temp.path().join("app/report/page.tsx")).unwrap();
        assert_eq!(after, original);
    }

    #[test]
    fn golden_rerun_is_stable() {
        let temp = tempdir().unwrap();
        copy_tree(&sample_project(), temp.path());

        restyle_in(temp.path()).assert().success();
        let output = restyle_in(temp.path()).output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("0 updated, 3 skipped, 0 failed"));
    }
}
