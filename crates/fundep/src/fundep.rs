//! Main Fundep struct and public API.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::dependency::{is_functionally_dependent, DependencyDiscovery, DiscoveryConfig};
use crate::error::{FundepError, Result};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::report::{report_path, DependencyReport};

/// Configuration for a dependency analysis run.
///
/// Built once by the caller (usually from command-line arguments) and passed
/// in explicitly.
#[derive(Debug, Clone)]
pub struct FundepConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Discovery configuration.
    pub discovery: DiscoveryConfig,
    /// Directory that reports are written to.
    pub output_dir: PathBuf,
}

impl Default for FundepConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            discovery: DiscoveryConfig::default(),
            output_dir: PathBuf::from("./output/"),
        }
    }
}

/// The main dependency analysis engine.
pub struct Fundep {
    config: FundepConfig,
    parser: Parser,
    discovery: DependencyDiscovery,
}

impl Fundep {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(FundepConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: FundepConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let discovery = DependencyDiscovery::with_config(config.discovery.clone());

        Self {
            config,
            parser,
            discovery,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &FundepConfig {
        &self.config
    }

    /// Load a data file and check every ordered column pair.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<DependencyReport> {
        let (table, source) = self.parser.parse_file(path)?;
        self.analyze_table(&table, source)
    }

    /// Check every ordered column pair of an already loaded table.
    pub fn analyze_table(
        &self,
        table: &DataTable,
        source: SourceMetadata,
    ) -> Result<DependencyReport> {
        let verdicts = self.discovery.discover(table)?;

        let report = DependencyReport::from_verdicts(
            source,
            table.headers.clone(),
            &verdicts,
            self.config.discovery.include_rejected,
        );

        info!(
            file = %report.source.file,
            holding = report.summary.holding,
            rejected = report.summary.rejected,
            "analysis complete"
        );

        Ok(report)
    }

    /// Analyze a data file and write the report into the output directory.
    ///
    /// Returns the report and the path it was written to.
    pub fn analyze_and_save(&self, path: impl AsRef<Path>) -> Result<(DependencyReport, PathBuf)> {
        let path = path.as_ref();
        let report = self.analyze(path)?;
        let output_path = report_path(&self.config.output_dir, path);
        report.save(&output_path)?;
        Ok((report, output_path))
    }

    /// Check a single named pair: does `determinant` determine `dependent`?
    pub fn check_pair(&self, table: &DataTable, determinant: &str, dependent: &str) -> Result<bool> {
        let left = table
            .column_by_name(determinant)
            .ok_or_else(|| FundepError::UnknownColumn(determinant.to_string()))?;
        let right = table
            .column_by_name(dependent)
            .ok_or_else(|| FundepError::UnknownColumn(dependent.to_string()))?;

        Ok(is_functionally_dependent(&left, &right)?)
    }

    /// Load a data file with the configured parser.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        self.parser.parse_file(path)
    }
}

impl Default for Fundep {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_simple_csv() {
        let content = "order_id,customer,region\n1,acme,north\n2,acme,north\n3,globex,south\n";
        let file = create_test_file(content);

        let report = Fundep::new().analyze(file.path()).unwrap();

        assert_eq!(report.columns, vec!["order_id", "customer", "region"]);
        assert_eq!(report.source.row_count, 3);
        assert_eq!(report.summary.pairs_checked, 6);
        assert_eq!(report.verdict("customer", "region"), Some(true));
        assert_eq!(report.verdict("region", "order_id"), Some(false));
        assert_eq!(report.candidate_keys, vec!["order_id"]);
    }

    #[test]
    fn test_check_pair() {
        let table = DataTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec!["x".to_string(), "1".to_string()],
                vec!["x".to_string(), "2".to_string()],
            ],
        );
        let fundep = Fundep::new();

        assert!(!fundep.check_pair(&table, "a", "b").unwrap());
        assert!(fundep.check_pair(&table, "b", "a").unwrap());
    }

    #[test]
    fn test_check_pair_unknown_column() {
        let table = DataTable::new(vec!["a".to_string()], vec![vec!["x".to_string()]]);
        let err = Fundep::new().check_pair(&table, "a", "zzz").unwrap_err();

        assert!(matches!(err, FundepError::UnknownColumn(name) if name == "zzz"));
    }

    #[test]
    fn test_analyze_table_rejects_duplicate_headers() {
        let table = DataTable::new(
            vec!["a".to_string(), "a".to_string(), "b".to_string()],
            vec![
                vec!["1".to_string(), "x".to_string(), "p".to_string()],
                vec!["1".to_string(), "y".to_string(), "p".to_string()],
                vec!["2".to_string(), "x".to_string(), "q".to_string()],
            ],
        );
        let source = SourceMetadata::in_memory(&table);

        let err = Fundep::new().analyze_table(&table, source).unwrap_err();
        assert!(matches!(err, FundepError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_analyze_and_save() {
        let dir = TempDir::new().unwrap();
        let file = create_test_file("k,v\n1,a\n2,a\n");

        let fundep = Fundep::with_config(FundepConfig {
            output_dir: dir.path().join("out"),
            ..Default::default()
        });
        let (report, path) = fundep.analyze_and_save(file.path()).unwrap();

        assert!(path.exists());
        assert!(path.starts_with(dir.path().join("out")));
        assert_eq!(DependencyReport::load(&path).unwrap().dependencies, report.dependencies);
    }
}
