//! Debug mode from the environment.

use std::env;
use std::ffi::OsStr;

/// Environment variable that switches debug mode on when set to any non-empty value.
pub const DEBUG_ENV: &str = "DEBUG";

/// Whether `DEBUG` is set to a non-empty value.
pub fn debug_from_env() -> bool {
    debug_from_var(DEBUG_ENV)
}

/// Whether the named variable is set to a non-empty value.
pub fn debug_from_var(name: impl AsRef<OsStr>) -> bool {
    env::var_os(name).is_some_and(|val| !val.is_empty())
}
