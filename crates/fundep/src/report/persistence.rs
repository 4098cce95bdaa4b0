//! Persistence for dependency reports - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FundepError, Result};

use super::document::DependencyReport;

impl DependencyReport {
    /// Save the report to a JSON file, creating parent directories as needed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fundep::DependencyReport;
    /// # fn example(report: &DependencyReport) -> fundep::Result<()> {
    /// report.save("output/orders.dependencies.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    FundepError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            FundepError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            FundepError::Persistence(format!("Failed to serialize report: {}", e))
        })?;

        debug!(path = %path.display(), "saved dependency report");
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            FundepError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let report: DependencyReport = serde_json::from_reader(reader).map_err(|e| {
            FundepError::Persistence(format!(
                "Failed to parse report '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(report)
    }
}

/// Report file path for a data file inside an output directory.
///
/// # Example
///
/// ```
/// use fundep::report::report_path;
///
/// let path = report_path("output", "data/orders.csv");
/// assert_eq!(path.to_string_lossy(), "output/orders.dependencies.json");
/// ```
pub fn report_path(output_dir: impl AsRef<Path>, data_path: impl AsRef<Path>) -> PathBuf {
    let stem = data_path
        .as_ref()
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    output_dir
        .as_ref()
        .join(format!("{}.dependencies.json", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::DependencyVerdict;
    use crate::input::{DataTable, SourceMetadata};
    use tempfile::TempDir;

    #[test]
    fn test_report_path() {
        assert_eq!(
            report_path("output", "data/orders.csv").to_string_lossy(),
            "output/orders.dependencies.json"
        );
        assert_eq!(
            report_path("./output/", "people.tsv").to_string_lossy(),
            "./output/people.dependencies.json"
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("t.dependencies.json");

        let columns = vec!["a".to_string(), "b".to_string()];
        let table = DataTable::new(columns.clone(), Vec::new());
        let verdicts = vec![
            DependencyVerdict {
                determinant: "a".to_string(),
                dependent: "b".to_string(),
                holds: true,
            },
            DependencyVerdict {
                determinant: "b".to_string(),
                dependent: "a".to_string(),
                holds: false,
            },
        ];
        let report = DependencyReport::from_verdicts(
            SourceMetadata::in_memory(&table),
            columns,
            &verdicts,
            true,
        );

        report.save(&path).unwrap();
        let loaded = DependencyReport::load(&path).unwrap();

        assert_eq!(loaded.dependencies, report.dependencies);
        assert_eq!(loaded.summary, report.summary);
        assert_eq!(loaded.candidate_keys, vec!["a"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DependencyReport::load("/nonexistent/report.json").unwrap_err();
        assert!(matches!(err, FundepError::Persistence(_)));
    }
}
