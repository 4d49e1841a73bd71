use std::fmt;
use std::path::Path;

use chrono::NaiveDate;

/// File name prefix for results saved without an explicit path.
pub const DEFAULT_OUTPUT_PREFIX: &str = "matched_result";

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// Picks the format from a file extension, falling back to CSV.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("tsv" | "tab") => Self::Tsv,
            Some("json") => Self::Json,
            _ => Self::Csv,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Default result file name for a given day, e.g. `matched_result_2024-03-09.csv`.
pub fn default_output_name(date: NaiveDate, format: OutputFormat) -> String {
    format!(
        "{DEFAULT_OUTPUT_PREFIX}_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("r.JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("r.tsv")), OutputFormat::Tsv);
        assert_eq!(OutputFormat::from_path(Path::new("r.xlsx")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("r")), OutputFormat::Csv);
    }

    #[test]
    fn default_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        assert_eq!(
            default_output_name(date, OutputFormat::Csv),
            "matched_result_2024-03-09.csv"
        );
        assert_eq!(
            default_output_name(date, OutputFormat::Json),
            "matched_result_2024-03-09.json"
        );
    }
}
