//! Newline-delimited seed files.
//!
//! Each line holds one seed string, optionally followed by whitespace and a
//! free-text label. Lines are trimmed and blank lines are skipped. Entries are
//! not validated here; a seed is checked when it is decoded.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// One line of a seeds file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedEntry {
    pub seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SeedEntry {
    /// Parses one line; `None` for blank lines.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (seed, label) = match line.split_once(char::is_whitespace) {
            Some((seed, label)) => (seed, Some(label.trim().to_owned())),
            None => (line, None),
        };
        Some(Self {
            seed: seed.to_owned(),
            label,
        })
    }
}

/// A seeds file on disk.
#[derive(Debug, Clone)]
pub struct SeedList {
    path: PathBuf,
}

impl SeedList {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses seeds file contents.
    #[must_use]
    pub fn parse(contents: &str) -> Vec<SeedEntry> {
        contents.lines().filter_map(SeedEntry::parse).collect()
    }

    /// Reads every entry; a missing file has none.
    pub fn entries(&self) -> Result<Vec<SeedEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read seeds file {}", self.path.display()))?;
        Ok(Self::parse(&contents))
    }

    /// Appends a seed unless the file already lists it.
    ///
    /// Creates the file and its parent directories as needed, and terminates
    /// an unterminated last line first. Returns `false` if the seed was
    /// already present.
    pub fn append(&self, seed: &str, label: Option<&str>) -> Result<bool> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }

        let existing = if self.path.exists() {
            fs::read_to_string(&self.path)
                .with_context(|| format!("read seeds file {}", self.path.display()))?
        } else {
            String::new()
        };
        if Self::parse(&existing).iter().any(|entry| entry.seed == seed) {
            debug!(seed, path = %self.path.display(), "seed already listed");
            return Ok(false);
        }

        let mut line = String::new();
        if !existing.is_empty() && !existing.ends_with(&['\n', '\r'][..]) {
            line.push('\n');
        }
        line.push_str(seed);
        if let Some(label) = label.map(str::trim).filter(|label| !label.is_empty()) {
            line.push(' ');
            line.push_str(label);
        }
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open seeds file {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("write seeds file {}", self.path.display()))?;
        debug!(seed, path = %self.path.display(), "appended seed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines_and_labels() {
        let entries = SeedList::parse("AAAAA-BBBBB\n\n  CCCCC-DDDDD   my run  \r\n");
        assert_eq!(
            entries,
            vec![
                SeedEntry {
                    seed: "AAAAA-BBBBB".to_owned(),
                    label: None
                },
                SeedEntry {
                    seed: "CCCCC-DDDDD".to_owned(),
                    label: Some("my run".to_owned())
                },
            ]
        );
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = SeedList::new(dir.path().join("seeds.txt"));
        assert!(list.entries().unwrap().is_empty());
    }

    #[test]
    fn append_creates_parents_and_dedupes() {
        let dir = tempfile::tempdir().unwrap();
        let list = SeedList::new(dir.path().join("nested").join("seeds.txt"));
        assert!(list.append("AAAAA-BBBBB", None).unwrap());
        assert!(list.append("CCCCC-DDDDD", Some("speedrun")).unwrap());
        assert!(!list.append("AAAAA-BBBBB", Some("again")).unwrap());

        let contents = fs::read_to_string(list.path()).unwrap();
        assert_eq!(contents, "AAAAA-BBBBB\nCCCCC-DDDDD speedrun\n");
    }

    #[test]
    fn append_terminates_last_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "AAAAA-BBBBB").unwrap();
        let list = SeedList::new(&path);
        assert!(list.append("CCCCC-DDDDD", None).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "AAAAA-BBBBB\nCCCCC-DDDDD\n"
        );
        assert_eq!(list.entries().unwrap().len(), 2);
    }
}
