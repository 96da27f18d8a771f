//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use papillon_client::ClientError;

/// Structured exit codes for papillon-cli.
///
/// These codes enable scripts to distinguish between different failure
/// modes and take appropriate action (retry, fix input, fail fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry later; the master was unreachable.
    ConnectionError = 3,

    /// Resource not found - datacenter, floor, rack, or host.
    ///
    /// Scripts should verify the identifier chain.
    NotFound = 4,

    /// Validation error - unknown resource, bad interval, unusable response.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Connection errors (exit code 3)
            ClientError::Transport { .. } => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            // Not found (exit code 4)
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            // Validation errors (exit code 5)
            ClientError::UnknownResource(_) => ExitCode::ValidationError,
            ClientError::InvalidInterval(_) => ExitCode::ValidationError,
            ClientError::MalformedResponse { .. } => ExitCode::ValidationError,

            // Http - check if it's a connection/timeout error
            ClientError::Http(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Default: general error
            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a ClientError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}
