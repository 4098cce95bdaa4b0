//! Functional dependency inference.
//!
//! [`partition`] groups the rows of a determinant column by value and
//! [`is_functionally_dependent`] checks that a dependent column is constant
//! inside each group. [`DependencyDiscovery`] runs that check over every
//! ordered pair of columns in a [`DataTable`](crate::input::DataTable).

mod checker;
mod discovery;
mod partition;

pub use checker::is_functionally_dependent;
pub use discovery::{DependencyDiscovery, DependencyVerdict, DiscoveryConfig};
pub use partition::{partition, Grouping};
