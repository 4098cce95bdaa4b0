//! Pairwise functional dependency test.

use crate::error::InvalidInputError;

use super::partition::partition;

/// Decide whether `dependent` is functionally determined by `determinant`
/// (`determinant -> dependent`).
///
/// Rows are grouped by their determinant value; the dependency holds when every
/// group carries a single dependent value. The scan stops at the first group
/// with two different dependent values.
///
/// A `true` result means no counterexample exists in *this sample*. It is a
/// candidate dependency for a human to confirm, not a law about all data the
/// columns could ever hold.
///
/// Two empty columns are vacuously dependent and return `true`.
///
/// # Errors
///
/// Returns [`InvalidInputError::LengthMismatch`] when the columns have
/// different lengths. No partial verdict is computed.
///
/// # Example
///
/// ```
/// use fundep::is_functionally_dependent;
///
/// assert!(is_functionally_dependent(&["A", "A", "B"], &["1", "1", "2"]).unwrap());
/// assert!(!is_functionally_dependent(&["A", "A", "B"], &["1", "2", "2"]).unwrap());
/// ```
pub fn is_functionally_dependent<S, T>(
    determinant: &[S],
    dependent: &[T],
) -> Result<bool, InvalidInputError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if determinant.len() != dependent.len() {
        return Err(InvalidInputError::LengthMismatch {
            determinant: determinant.len(),
            dependent: dependent.len(),
        });
    }

    let grouping = partition(determinant);

    let consistent = grouping.values().all(|indices| {
        let mut values = indices.iter().map(|&i| dependent[i].as_ref());
        match values.next() {
            Some(first) => values.all(|value| value == first),
            None => true,
        }
    });

    Ok(consistent)
}
