//! Error types for the capacitor simulator.
//!
//! The physics kernel never fails: it evaluates closed-form expressions and
//! lets `f64` carry infinities and NaNs. The simulation driver is where runs
//! are assembled, so that is where degenerate parameters (a zero time
//! constant, a zero charging resistance, non-finite inputs) are rejected with
//! [`CapsimError::InvalidParameter`].

use thiserror::Error;

/// Result type alias using [`CapsimError`].
pub type Result<T> = std::result::Result<T, CapsimError>;

/// Unified error type for all capsim operations.
#[derive(Error, Debug)]
pub enum CapsimError {
    // ============ Simulation Errors ============
    /// A parameter would make the run divide by zero or is not finite
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // ============ CLI Errors ============
    /// Malformed command-line value
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// Error writing results
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl CapsimError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CapsimError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = CapsimError::invalid_parameter("resistance", "must be non-zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'resistance': must be non-zero"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CapsimError = io.into();
        assert!(matches!(err, CapsimError::Output { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
