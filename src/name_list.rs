//! Reader for exported image lists.
//!
//! Downstream tools (e.g. converters that build COLMAP text models from pose
//! files) look image ids up by name. This turns a list written by the exporter
//! back into a `name -> image_id` map.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error_handling::NameListError;

/// Parses the contents of an image list.
///
/// Each non-blank line is split at its last space, so names that themselves
/// contain spaces are kept intact. If a name appears twice, the later id wins.
///
/// # Errors
///
/// Returns `NameListError::Malformed` for a line with no space or a
/// non-integer id. Line numbers start at 1.
pub fn parse_name_id_list(contents: &str) -> Result<HashMap<String, i64>, NameListError> {
    let mut ids = HashMap::new();

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let malformed = || NameListError::Malformed {
            line: index + 1,
            content: line.to_string(),
        };

        let (name, id) = line.rsplit_once(' ').ok_or_else(malformed)?;
        if name.is_empty() {
            return Err(malformed());
        }
        let id: i64 = id.trim().parse().map_err(|_| malformed())?;

        ids.insert(name.to_string(), id);
    }

    Ok(ids)
}

/// Reads and parses an image list from disk.
///
/// # Errors
///
/// Returns `NameListError::IoError` if the file cannot be read, or
/// `NameListError::Malformed` as described in [`parse_name_id_list`].
pub fn read_name_id_list(path: &Path) -> Result<HashMap<String, i64>, NameListError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NameListError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let ids = parse_name_id_list(&contents)?;
    debug!("Read {} image ids from {}", ids.len(), path.display());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_list() {
        let ids = parse_name_id_list("img001.jpg 1\nimg002.jpg 2\n").expect("parse");
        assert_eq!(ids.len(), 2);
        assert_eq!(ids["img001.jpg"], 1);
        assert_eq!(ids["img002.jpg"], 2);
    }

    #[test]
    fn test_parse_name_with_spaces_and_blank_lines() {
        let ids = parse_name_id_list("\nmy photo 01.jpg 17\r\n\n  \n").expect("parse");
        assert_eq!(ids.get("my photo 01.jpg"), Some(&17));
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_parse_duplicate_name_keeps_last() {
        let ids = parse_name_id_list("a.jpg 1\na.jpg 4\n").expect("parse");
        assert_eq!(ids["a.jpg"], 4);
    }

    #[test]
    fn test_parse_malformed_lines() {
        let err = parse_name_id_list("a.jpg 1\nb.jpg\n").expect_err("missing id");
        assert!(matches!(err, NameListError::Malformed { line: 2, ref content } if content == "b.jpg"));

        let err = parse_name_id_list("a.jpg one\n").expect_err("bad id");
        assert!(matches!(err, NameListError::Malformed { line: 1, .. }));

        let err = parse_name_id_list(" 3\n").expect_err("empty name");
        assert!(matches!(err, NameListError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_name_id_list(&dir.path().join("absent.txt")).expect_err("missing");
        assert!(matches!(err, NameListError::IoError { .. }));
    }
}
