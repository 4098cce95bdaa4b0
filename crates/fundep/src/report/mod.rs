//! Dependency reports.
//!
//! A report collects the verdicts of one discovery run over a table, together
//! with the source file's metadata, and is written as JSON next to other
//! reports in an output directory.
//!
//! ```text
//! output/
//! └── orders.dependencies.json
//! ```
//!
//! ```json
//! {
//!   "dependencies": {
//!     "order_id -> customer": true,
//!     "customer -> order_id": false
//!   }
//! }
//! ```

mod document;
mod persistence;

pub use document::{DependencyReport, ReportSummary, CANDIDATE_NOTICE, REPORT_VERSION};
pub use persistence::report_path;
