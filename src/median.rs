use tracing::debug;

use crate::{error::InvalidInput, sort::sort};

/// Calculates the median of a list of numbers.
///
/// The list is sorted in place, so callers that need the original order must keep a
/// copy. Empty lists and lists containing NaN or infinities are rejected before any
/// element is moved.
pub fn median(numbers: &mut [f64]) -> Result<f64, InvalidInput> {
    if numbers.is_empty() {
        return Err(InvalidInput::EmptySequence);
    }

    if let Some(value) = numbers.iter().find(|value| !value.is_finite()) {
        return Err(InvalidInput::NonFinite {
            value: value.to_string(),
        });
    }

    sort(numbers);

    let mid = numbers.len() / 2;
    let median = if numbers.len() % 2 == 0 {
        midpoint(numbers[mid - 1], numbers[mid])
    } else {
        numbers[mid]
    };

    debug!(len = numbers.len(), median, "computed median");
    Ok(median)
}

/// Average of two finite numbers that stays finite when their sum would overflow.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}
