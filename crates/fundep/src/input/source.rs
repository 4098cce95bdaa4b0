//! Data source abstraction and metadata.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been analyzed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }

    /// Metadata for a table built in memory rather than read from a file.
    pub fn in_memory(table: &DataTable) -> Self {
        Self::new(
            PathBuf::new(),
            String::new(),
            0,
            "memory".to_string(),
            table.row_count(),
            table.column_count(),
        )
    }
}

/// Parsed tabular data: column names plus rows of string cells.
///
/// Every row holds exactly one cell per column. [`Parser`](super::Parser)
/// rejects ragged input rather than padding it.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// First header name that appears more than once, if any.
    pub fn duplicate_header(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.headers
            .iter()
            .find(|h| !seen.insert(h.as_str()))
            .map(|h| h.as_str())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        DataTable::new(
            vec!["id".to_string(), "city".to_string()],
            vec![
                vec!["1".to_string(), "Paris".to_string()],
                vec!["2".to_string(), "Lyon".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_by_name() {
        let table = sample();
        assert_eq!(table.column_by_name("city"), Some(vec!["Paris", "Lyon"]));
        assert_eq!(table.column_by_name("country"), None);
    }

    #[test]
    fn test_duplicate_header() {
        assert_eq!(sample().duplicate_header(), None);

        let table = DataTable::new(
            vec!["a".to_string(), "b".to_string(), "a".to_string()],
            Vec::new(),
        );
        assert_eq!(table.duplicate_header(), Some("a"));
    }

    #[test]
    fn test_in_memory_metadata() {
        let table = sample();
        let source = SourceMetadata::in_memory(&table);

        assert_eq!(source.format, "memory");
        assert_eq!(source.row_count, 2);
        assert_eq!(source.column_count, 2);
        assert!(source.file.is_empty());
    }
}
