//! Grouping of row indices by equal cell value.

use std::collections::HashMap;

/// Row indices of one column grouped by cell value.
///
/// Keys are the distinct values observed in the column; each value maps to the
/// ascending list of row indices holding it. Iteration order over keys is
/// unspecified.
pub type Grouping<'a> = HashMap<&'a str, Vec<usize>>;

/// Group the row indices of `values` by equal value.
///
/// Every index in `0..values.len()` appears in exactly one group, the one keyed
/// by `values[i]`. An empty column yields an empty grouping.
///
/// Each key gets its own index list the first time it is seen, so groups never
/// share storage.
///
/// Only single-column determinants are grouped here. Composite determinants
/// would group by the tuple of values per row instead; nothing else about the
/// dependency check changes.
///
/// # Example
///
/// ```
/// use fundep::partition;
///
/// let grouping = partition(&["A", "A", "B"]);
/// assert_eq!(grouping["A"], vec![0, 1]);
/// assert_eq!(grouping["B"], vec![2]);
/// ```
pub fn partition<S: AsRef<str>>(values: &[S]) -> Grouping<'_> {
    let mut grouping: Grouping<'_> = HashMap::new();

    for (index, value) in values.iter().enumerate() {
        grouping.entry(value.as_ref()).or_default().push(index);
    }

    grouping
}
