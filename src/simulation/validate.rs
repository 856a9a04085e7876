//! Parameter checks for simulation runs.
//!
//! Only conditions that would make a run divide by zero or operate on
//! non-finite inputs are rejected. Negative component values pass through.

use crate::error::{CapsimError, Result};

/// Require `value` to be finite.
pub(crate) fn require_finite(param: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CapsimError::invalid_parameter(
            param,
            format!("must be finite (got {value})"),
        ));
    }
    Ok(())
}

/// Require `value` to be finite and non-zero.
pub(crate) fn require_nonzero(param: &str, value: f64) -> Result<()> {
    require_finite(param, value)?;
    if value == 0.0 {
        return Err(CapsimError::invalid_parameter(param, "must be non-zero"));
    }
    Ok(())
}

/// Require every time sample to be finite.
pub(crate) fn require_finite_times(time_sequence: &[f64]) -> Result<()> {
    if let Some((i, t)) = time_sequence.iter().enumerate().find(|(_, t)| !t.is_finite()) {
        return Err(CapsimError::invalid_parameter(
            "time_sequence",
            format!("sample {i} is not finite (got {t})"),
        ));
    }
    Ok(())
}

/// Whether the samples never decrease.
pub(crate) fn is_ascending(time_sequence: &[f64]) -> bool {
    time_sequence.windows(2).all(|w| w[0] <= w[1])
}
