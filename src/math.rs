// Integer arithmetic helpers

use crate::error::{Error, Result};
use tracing::trace;

/// Largest n whose factorial fits in a `u128`
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Compute n! for n >= 0.
///
/// Recursion depth is bounded by n, and n is bounded by [`MAX_FACTORIAL_INPUT`].
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::invalid_argument(
            "factorial() not defined for negative values",
        ));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(Error::Overflow(format!("{}!", n)));
    }
    trace!(n, "factorial");
    if n <= 1 {
        return Ok(1);
    }

    let rest = factorial(n - 1)?;
    rest.checked_mul(n as u128)
        .ok_or_else(|| Error::Overflow(format!("{}!", n)))
}
