//! fundep: candidate functional dependency discovery for tabular datasets.
//!
//! Given sample data exported as CSV, fundep checks every ordered pair of
//! columns `A -> B`: does each value of `A` always appear with the same value
//! of `B`? The answer is a *candidate* dependency for schema design, found in a
//! sample rather than proven for all data.
//!
//! # Example
//!
//! ```no_run
//! use fundep::Fundep;
//!
//! let fundep = Fundep::new();
//! let report = fundep.analyze("orders.csv").unwrap();
//!
//! for dependency in report.holding() {
//!     println!("{}", dependency);
//! }
//! ```
//!
//! The pairwise check is usable on its own:
//!
//! ```
//! use fundep::is_functionally_dependent;
//!
//! let city = ["Paris", "Lyon", "Paris"];
//! let country = ["FR", "FR", "FR"];
//! assert!(is_functionally_dependent(&city, &country).unwrap());
//! ```

pub mod dependency;
pub mod error;
pub mod input;
pub mod report;

mod fundep;

pub use crate::fundep::{Fundep, FundepConfig};
pub use dependency::{
    is_functionally_dependent, partition, DependencyDiscovery, DependencyVerdict, DiscoveryConfig,
    Grouping,
};
pub use error::{FundepError, InvalidInputError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use report::{DependencyReport, ReportSummary};
