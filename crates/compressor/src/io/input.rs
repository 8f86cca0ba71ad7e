//! Loading input text from disk.

use huffer_core::{HuffError, Result};
use std::path::Path;

/// Read a UTF-8 text file.
///
/// With `first_line_only` the text is cut at the first line terminator
/// (`\n` or `\r\n`), which is dropped. An empty file gives an empty string.
pub fn load_text(path: &Path, first_line_only: bool) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|err| HuffError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded input");

    if first_line_only {
        Ok(first_line(&text).to_string())
    } else {
        Ok(text)
    }
}

/// Read the first line of a UTF-8 text file.
pub fn load_first_line(path: &Path) -> Result<String> {
    load_text(path, true)
}

/// The first line of `text`, without its terminator.
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("abc\ndef"), "abc");
        assert_eq!(first_line("abc\r\ndef"), "abc");
        assert_eq!(first_line("abc"), "abc");
        assert_eq!(first_line("\nabc"), "");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_load_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first line\nsecond line\n").unwrap();

        assert_eq!(load_text(file.path(), true).unwrap(), "first line");
        assert_eq!(load_first_line(file.path()).unwrap(), "first line");
        assert_eq!(
            load_text(file.path(), false).unwrap(),
            "first line\nsecond line\n"
        );
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(load_first_line(file.path()).unwrap(), "");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        assert!(matches!(
            load_text(&missing, true),
            Err(HuffError::Io { path, .. }) if path == missing
        ));
    }
}
