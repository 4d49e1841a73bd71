use std::path::Path;

/// Table file formats the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Tsv,
    Json,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Field delimiter for delimited formats.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Json => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a.CSV")),
            Some(SourceFormat::Csv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("a.tab")),
            Some(SourceFormat::Tsv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("a.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(SourceFormat::from_path(Path::new("a.xlsx")), None);
        assert_eq!(SourceFormat::from_path(Path::new("noext")), None);
    }
}
