//! Process exit codes
//!
//! Scripts depend on these values; changing one is a breaking change.

use tms_core::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Missing or empty argument, bad endpoint URL, bad config file
    UsageError = 2,
    /// Transport failure; usually worth retrying
    NetworkError = 3,
    /// Token rejected (401) or permission missing (403)
    AuthError = 4,
    /// HTTP 404 or an unknown server profile
    NotFound = 5,
    /// HTTP 409, e.g. a file checked out by someone else
    Conflict = 6,
    /// Ctrl+C
    Interrupted = 130,
}

impl ExitCode {
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Exit code for a library error
    pub fn from_error(error: &Error) -> Self {
        match error.exit_code() {
            2 => Self::UsageError,
            3 => Self::NetworkError,
            4 => Self::AuthError,
            5 => Self::NotFound,
            6 => Self::Conflict,
            _ => Self::GeneralError,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(error: &Error) -> Self {
        Self::from_error(error)
    }
}
