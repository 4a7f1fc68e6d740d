/// Exit codes for techicon
///
/// These exit codes let scripts distinguish "nothing matched" from a broken
/// invocation.
/// Success - Every name or identifier was found
pub const SUCCESS: i32 = 0;

/// Not found - At least one name did not resolve or identifier is unknown
pub const NOT_FOUND: i32 = 1;

/// Tool error - Configuration error, catalog error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{NOT_FOUND, TOOL_ERROR};

    /// Exit with not found code (1)
    pub fn not_found() -> ! {
        std::process::exit(NOT_FOUND);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
