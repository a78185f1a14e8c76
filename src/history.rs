// history.rs

use crate::error::{Result, ShellError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only record of every line typed this session, mirrored to a file.
pub struct History {
    entries: Vec<String>,
    file: Option<PathBuf>,
}

impl History {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { entries: Vec::new(), file }
    }

    /// Records `entry` in memory, then appends it to the history file.
    ///
    /// The in-memory entry is kept even when the file write fails.
    pub fn add(&mut self, entry: &str) -> Result<()> {
        self.entries.push(entry.to_string());
        match &self.file {
            Some(path) => append_line(path, entry),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn all(&self) -> &[String] {
        &self.entries
    }

    /// The last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

fn append_line(path: &Path, entry: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ShellError::History)?;
    writeln!(file, "{}", entry).map_err(ShellError::History)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("minish-history-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn keeps_insertion_order() {
        let mut h = History::new(None);
        h.add("ls").unwrap();
        h.add("echo hi").unwrap();
        h.add("ls").unwrap();
        assert_eq!(h.all(), ["ls", "echo hi", "ls"]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn tail_clamps_to_length() {
        let mut h = History::new(None);
        h.add("a").unwrap();
        h.add("b").unwrap();
        h.add("c").unwrap();
        assert_eq!(h.tail(2), ["b", "c"]);
        assert_eq!(h.tail(10), ["a", "b", "c"]);
        assert!(h.tail(0).is_empty());
    }

    #[test]
    fn appends_each_entry_to_file() {
        let path = scratch("append");
        std::fs::write(&path, "from last session\n").unwrap();
        let mut h = History::new(Some(path.clone()));
        h.add("echo one").unwrap();
        h.add("history").unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "from last session\necho one\nhistory\n");
        // earlier sessions are not loaded back
        assert_eq!(h.len(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_file_still_records_in_memory() {
        let path = std::env::temp_dir()
            .join(format!("minish-missing-dir-{}", std::process::id()))
            .join("history");
        let mut h = History::new(Some(path));
        let err = h.add("pwd").unwrap_err();
        assert!(matches!(err, ShellError::History(_)));
        assert_eq!(h.all(), ["pwd"]);
    }
}
