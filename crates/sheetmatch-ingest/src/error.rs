//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source file or folder.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File or folder does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Folder contains no supported table files.
    #[error("no CSV, TSV or JSON files found in {path}")]
    NoTableFiles { path: PathBuf },

    // === Format Errors ===
    /// Extension is not one of the supported table formats.
    #[error("unsupported file format: {path} (expected .csv, .tsv, .tab or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// File is not UTF-8 text.
    #[error("unsupported encoding {encoding} in {path} (save the file as UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Parsing Errors ===
    /// Failed to parse delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to parse JSON.
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// JSON parsed but is not an array of objects.
    #[error("unexpected JSON layout in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
