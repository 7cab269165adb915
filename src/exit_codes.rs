//! Process exit codes of the `climate-subset` binary.
//!
//! A run that writes its report returns normally and exits with `0`. The two
//! failure codes let CI tell an unconvertible report apart from a broken setup.

/// A tool report did not match its schema or held invalid values
pub const CONVERSION_FAILED: i32 = 1;

/// Configuration error, file access error, invalid JSON, or nothing to convert
pub const TOOL_ERROR: i32 = 2;

pub mod exit {
    use super::{CONVERSION_FAILED, TOOL_ERROR};

    pub fn conversion_failed() -> ! {
        std::process::exit(CONVERSION_FAILED);
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
