//! Raw file access with size and encoding guards.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum file size for table loading (500 MB default).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn read_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject encodings other than UTF-8.
///
/// UTF-16 is what spreadsheet programs write for "Unicode text" exports, so
/// it gets a dedicated message. A UTF-8 BOM is fine.
pub fn validate_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let unsupported = |encoding: &'static str| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    };
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(unsupported("UTF-16 LE"));
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(unsupported("UTF-16 BE"));
    }
    if std::str::from_utf8(bytes).is_err() {
        return Err(unsupported("non-UTF-8"));
    }
    Ok(())
}

/// Reads a whole text file, enforcing the size limit and UTF-8.
///
/// The UTF-8 BOM, if present, is stripped.
pub fn read_text(path: &Path, max_size: u64) -> Result<String> {
    check_file_size_with_limit(path, max_size)?;
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
    validate_encoding(path, &bytes)?;
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    String::from_utf8(body.to_vec()).map_err(|_| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding: "non-UTF-8",
    })
}

/// File stem used as the sheet name for a single-table file.
pub fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Sheet1")
        .to_string()
}

/// File or folder name used as the workbook name.
pub fn workbook_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_utf16_bom() {
        let err = validate_encoding(Path::new("x.csv"), &[0xFF, 0xFE, b'a', 0]).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            }
        ));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = validate_encoding(Path::new("x.csv"), &[b'a', 0xE9, b'b']).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "non-UTF-8",
                ..
            }
        ));
    }

    #[test]
    fn names_come_from_path() {
        assert_eq!(sheet_name(Path::new("/data/orders.csv")), "orders");
        assert_eq!(workbook_name(Path::new("/data/orders.csv")), "orders.csv");
        assert_eq!(workbook_name(Path::new("/data/exports")), "exports");
    }
}
