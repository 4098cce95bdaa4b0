//! The dependency report document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dependency::DependencyVerdict;
use crate::input::SourceMetadata;

/// Current version of the report format.
pub const REPORT_VERSION: &str = "1.0.0";

/// Disclaimer stored with every report.
pub const CANDIDATE_NOTICE: &str = "Dependencies marked true had no counterexample in the sampled rows. \
They are candidates for review, not guarantees about the full data.";

/// Counts over all checked pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Ordered column pairs checked.
    pub pairs_checked: usize,
    /// Pairs with no counterexample.
    pub holding: usize,
    /// Pairs with at least one counterexample.
    pub rejected: usize,
}

/// Candidate functional dependencies found in one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Report format version.
    pub version: String,
    /// Metadata about the analyzed file.
    pub source: SourceMetadata,
    /// Column names in file order.
    pub columns: Vec<String>,
    /// `"determinant -> dependent"` to verdict, in column order.
    pub dependencies: IndexMap<String, bool>,
    /// Columns that no other single column determines. These may depend on a
    /// composite key.
    #[serde(default)]
    pub undetermined_columns: Vec<String>,
    /// Columns that determine every other column.
    #[serde(default)]
    pub candidate_keys: Vec<String>,
    /// Counts over all checked pairs, including omitted rejections.
    pub summary: ReportSummary,
    /// How to read the verdicts.
    pub notice: String,
}

impl DependencyReport {
    /// Build a report from discovery verdicts.
    ///
    /// Summaries are computed from every verdict; `include_rejected` only
    /// controls whether `false` entries are listed in `dependencies`.
    pub fn from_verdicts(
        source: SourceMetadata,
        columns: Vec<String>,
        verdicts: &[DependencyVerdict],
        include_rejected: bool,
    ) -> Self {
        let dependencies: IndexMap<String, bool> = verdicts
            .iter()
            .filter(|v| include_rejected || v.holds)
            .map(|v| (v.key(), v.holds))
            .collect();

        let undetermined_columns = columns
            .iter()
            .filter(|c| {
                !verdicts
                    .iter()
                    .any(|v| v.holds && &v.dependent == *c)
            })
            .cloned()
            .collect();

        let candidate_keys = columns
            .iter()
            .filter(|c| {
                verdicts
                    .iter()
                    .filter(|v| &v.determinant == *c)
                    .all(|v| v.holds)
            })
            .cloned()
            .collect();

        let holding = verdicts.iter().filter(|v| v.holds).count();
        let summary = ReportSummary {
            pairs_checked: verdicts.len(),
            holding,
            rejected: verdicts.len() - holding,
        };

        Self {
            version: REPORT_VERSION.to_string(),
            source,
            columns,
            dependencies,
            undetermined_columns,
            candidate_keys,
            summary,
            notice: CANDIDATE_NOTICE.to_string(),
        }
    }

    /// Keys of the dependencies that hold, in column order.
    pub fn holding(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|(_, holds)| **holds)
            .map(|(key, _)| key.as_str())
    }

    /// Verdict for a pair, if it is listed in the report.
    pub fn verdict(&self, determinant: &str, dependent: &str) -> Option<bool> {
        self.dependencies
            .get(&format!("{} -> {}", determinant, dependent))
            .copied()
    }
}
