//! Dependency discovery across every ordered column pair of a table.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::error::{FundepError, Result};
use crate::input::DataTable;

use super::checker::is_functionally_dependent;

/// Configuration for dependency discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Largest determinant size to try. Only single-column determinants are
    /// supported, so this must be 1.
    pub max_composite_key_size: usize,
    /// Worker threads for pair checks (None = available parallelism).
    pub max_threads: Option<usize>,
    /// Request GPU execution. There is no GPU path; checks run on the CPU.
    pub use_gpu: bool,
    /// Keep rejected pairs (`false` verdicts) in the report.
    pub include_rejected: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_composite_key_size: 1,
            max_threads: None,
            use_gpu: false,
            include_rejected: true,
        }
    }
}

impl DiscoveryConfig {
    /// Check the configuration before any work is scheduled.
    pub fn validate(&self) -> Result<()> {
        if self.max_composite_key_size != 1 {
            return Err(FundepError::Config(format!(
                "max composite key size {} is not supported; only single-column determinants (1) are checked",
                self.max_composite_key_size
            )));
        }
        if self.max_threads == Some(0) {
            return Err(FundepError::Config(
                "max thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of worker threads to use.
    pub fn thread_count(&self) -> usize {
        self.max_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// Verdict of one dependency check between two named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyVerdict {
    /// Left side of the dependency.
    pub determinant: String,
    /// Right side of the dependency.
    pub dependent: String,
    /// Whether the sample contains no counterexample.
    pub holds: bool,
}

impl DependencyVerdict {
    /// Report key for this pair, e.g. `"city -> country"`.
    pub fn key(&self) -> String {
        format!("{} -> {}", self.determinant, self.dependent)
    }
}

/// Runs the pairwise dependency check for every ordered pair of columns.
pub struct DependencyDiscovery {
    config: DiscoveryConfig,
}

impl DependencyDiscovery {
    /// Create a discovery engine with default configuration.
    pub fn new() -> Self {
        Self {
            config: DiscoveryConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Check every ordered pair of distinct columns in `table`.
    ///
    /// Verdicts come back in header order: determinant outer, dependent inner.
    /// Self-pairs are skipped since a column always determines itself.
    pub fn discover(&self, table: &DataTable) -> Result<Vec<DependencyVerdict>> {
        self.config.validate()?;

        // Report keys are built from header names
        if let Some(name) = table.duplicate_header() {
            return Err(FundepError::DuplicateColumn(name.to_string()));
        }

        if self.config.use_gpu {
            warn!("GPU execution is not available; checking dependencies on the CPU");
        }

        let columns: Vec<Vec<&str>> = (0..table.column_count())
            .map(|index| table.column_values(index).collect())
            .collect();

        let pairs: Vec<(usize, usize)> = (0..columns.len())
            .flat_map(|i| {
                (0..columns.len())
                    .filter(move |&j| j != i)
                    .map(move |j| (i, j))
            })
            .collect();

        let threads = self.config.thread_count();
        debug!(
            pairs = pairs.len(),
            threads,
            rows = table.row_count(),
            "scheduling dependency checks"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| FundepError::Config(format!("Failed to build thread pool: {}", e)))?;

        let verdicts = pool.install(|| {
            pairs
                .par_iter()
                .map(|&(i, j)| -> Result<DependencyVerdict> {
                    let holds = is_functionally_dependent(&columns[i], &columns[j])?;
                    trace!(
                        determinant = %table.headers[i],
                        dependent = %table.headers[j],
                        holds,
                        "checked pair"
                    );
                    Ok(DependencyVerdict {
                        determinant: table.headers[i].clone(),
                        dependent: table.headers[j].clone(),
                        holds,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })?;

        info!(
            pairs = verdicts.len(),
            holding = verdicts.iter().filter(|v| v.holds).count(),
            "dependency discovery finished"
        );

        Ok(verdicts)
    }
}

impl Default for DependencyDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
