//! Table file discovery inside a folder.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;

/// Lists all supported table files in a directory.
///
/// Subdirectories and files with other extensions are skipped. Returns files
/// sorted by filename.
pub fn list_table_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if SourceFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_supported_files_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.csv", "a.json", "notes.txt", "c.TSV"] {
            std::fs::write(dir.path().join(name), "x").expect("write");
        }
        std::fs::create_dir(dir.path().join("nested.csv")).expect("mkdir");

        let files = list_table_files(dir.path()).expect("list");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.json", "b.csv", "c.TSV"]);
    }
}
