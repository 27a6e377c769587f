//! Divisibility filter.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("division by zero: divisor must be non-zero")]
    DivisionByZero,
}

/// Keep every number evenly divisible by `divisor`, in input order.
///
/// Duplicates are kept. A zero divisor is an error even for empty input.
pub fn filter(numbers: &[i64], divisor: i64) -> Result<Vec<i64>, FilterError> {
    if divisor == 0 {
        return Err(FilterError::DivisionByZero);
    }
    // wrapping_rem: i64::MIN % -1 overflows, but its remainder is 0.
    Ok(numbers
        .iter()
        .copied()
        .filter(|n| n.wrapping_rem(divisor) == 0)
        .collect())
}
