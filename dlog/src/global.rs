//! The process-wide default logger and the functions that forward to it.
//!
//! The default logger writes to standard error. Its debug mode starts from the
//! `DEBUG` environment variable, which is read once when the process starts.
//! Applications that build their own [`Logger`] and pass it around do not need
//! anything in this module.

use dlog_core::{Flags, Logger, Operand, SharedWriter};
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::LazyLock;

static DEFAULT: LazyLock<Logger> = LazyLock::new(Logger::from_env);

/// Read `DEBUG` before `main` runs.
#[ctor::ctor]
fn init_default() {
    LazyLock::force(&DEFAULT);
}

/// The process-wide default logger.
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

/// Turn debug output of the default logger on or off.
pub fn set_debug(enabled: bool) {
    DEFAULT.set_debug(enabled);
}

/// Whether the default logger currently writes debug output.
pub fn is_debug() -> bool {
    DEFAULT.is_debug()
}

/// Debug output on the default logger: the values written back to back,
/// with a space between two adjacent non-string values.
#[track_caller]
pub fn debug(values: &[Operand<'_>]) {
    DEFAULT.debug(values);
}

/// Debug output on the default logger: the values separated by spaces.
#[track_caller]
pub fn debugln(values: &[Operand<'_>]) {
    DEFAULT.debugln(values);
}

/// Debug output on the default logger from `format_args!`.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT.debugf(args);
}

/// Write the values back to back on the default logger.
#[track_caller]
pub fn print(values: &[Operand<'_>]) {
    DEFAULT.print(values);
}

/// Write the values separated by spaces on the default logger.
#[track_caller]
pub fn println(values: &[Operand<'_>]) {
    DEFAULT.println(values);
}

/// Write `format_args!` output on the default logger.
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    DEFAULT.printf(args);
}

/// [`print`] followed by exiting the process with status 1.
#[track_caller]
pub fn fatal(values: &[Operand<'_>]) -> ! {
    DEFAULT.fatal(values)
}

/// [`println`] followed by exiting the process with status 1.
#[track_caller]
pub fn fatalln(values: &[Operand<'_>]) -> ! {
    DEFAULT.fatalln(values)
}

/// [`printf`] followed by exiting the process with status 1.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.fatalf(args)
}

/// [`print`] followed by a panic carrying the same text.
#[track_caller]
pub fn panic(values: &[Operand<'_>]) -> ! {
    DEFAULT.panic(values)
}

/// [`println`] followed by a panic carrying the same text.
#[track_caller]
pub fn panicln(values: &[Operand<'_>]) -> ! {
    DEFAULT.panicln(values)
}

/// [`printf`] followed by a panic carrying the same text.
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.panicf(args)
}

/// Write one line on the default logger, attributed to the caller.
///
/// Unlike the other writing functions this reports write failures.
#[track_caller]
pub fn output(msg: &str) -> io::Result<()> {
    DEFAULT.output_at(Location::caller(), msg)
}

/// Set the destination of the default logger.
pub fn set_output(out: SharedWriter) {
    DEFAULT.set_output(out);
}

/// The destination of the default logger.
pub fn writer() -> SharedWriter {
    DEFAULT.writer()
}

/// The header flags of the default logger.
pub fn flags() -> Flags {
    DEFAULT.flags()
}

/// Set the header flags of the default logger.
pub fn set_flags(flags: Flags) {
    DEFAULT.set_flags(flags);
}

/// The prefix of the default logger.
pub fn prefix() -> String {
    DEFAULT.prefix()
}

/// Set the prefix of the default logger.
pub fn set_prefix(prefix: impl Into<String>) {
    DEFAULT.set_prefix(prefix);
}
