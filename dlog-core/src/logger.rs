//! The debug-aware logger.

use crate::env;
use crate::flags::Flags;
use crate::operand::{sprint, sprintln, Operand};
use crate::writer::{shared, LineWriter, SharedWriter};
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

/// A line logger with an extra, switchable debug level.
///
/// Regular output (`print*`, `fatal*`, `panic*`) is always written. Debug
/// output (`debug*`) is written only while debug mode is on, which is toggled
/// with [`Logger::set_debug`]. Turning debug mode on also adds
/// [`Flags::SHORT_FILE`] so debug lines point at the code that emitted them.
///
/// All writing methods are `#[track_caller]`: the `file:line` in a header is
/// the caller's, never this type's.
pub struct Logger {
    line: OnceLock<LineWriter>,
    debug: AtomicBool,
    toggle: Mutex<()>,
}

impl Logger {
    /// Create a logger writing to `out` with the given prefix, flags and
    /// initial debug state.
    pub fn new(out: SharedWriter, prefix: impl Into<String>, flags: Flags, debug: bool) -> Self {
        Self::with_line_writer(LineWriter::new(out, prefix, flags), debug)
    }

    pub fn with_line_writer(line: LineWriter, debug: bool) -> Self {
        Self {
            line: OnceLock::from(line),
            debug: AtomicBool::new(debug),
            toggle: Mutex::new(()),
        }
    }

    /// Standard error, no prefix, debug mode from the `DEBUG` environment variable.
    ///
    /// Flags are [`Flags::STD`], plus [`Flags::SHORT_FILE`] when debug mode is on.
    pub fn from_env() -> Self {
        let debug = env::debug_from_env();
        let mut flags = Flags::STD;
        if debug {
            flags |= Flags::SHORT_FILE;
        }
        Self::new(shared(io::stderr()), "", flags, debug)
    }

    /// The underlying line writer, substituting the stderr default on first use.
    pub fn line_writer(&self) -> &LineWriter {
        self.line.get_or_init(LineWriter::default)
    }

    /// Turn debug output on or off.
    ///
    /// The debug state and [`Flags::SHORT_FILE`] change together under the
    /// logger's lock, so concurrent toggles never leave them out of step.
    pub fn set_debug(&self, enabled: bool) {
        let line = self.line_writer();
        let _guard = self.toggle.lock().unwrap_or_else(PoisonError::into_inner);
        // Readers of `debug` take no lock: SHORT_FILE is set before debug
        // turns on and cleared only after it turns off.
        if enabled {
            line.update_flags(|flags| flags | Flags::SHORT_FILE);
            self.debug.store(true, Ordering::Release);
        } else {
            self.debug.store(false, Ordering::Release);
            line.update_flags(|flags| flags.difference(Flags::SHORT_FILE));
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Acquire)
    }

    /// Debug output: the values written back to back, with a space between
    /// two adjacent non-string values.
    #[track_caller]
    pub fn debug(&self, values: &[Operand<'_>]) {
        if self.is_debug() {
            self.emit(Location::caller(), &sprint(values));
        }
    }

    /// Debug output: the values separated by spaces, ending in a newline.
    #[track_caller]
    pub fn debugln(&self, values: &[Operand<'_>]) {
        if self.is_debug() {
            self.emit(Location::caller(), &sprintln(values));
        }
    }

    /// Debug output from `format_args!`.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.is_debug() {
            self.emit(Location::caller(), &fmt::format(args));
        }
    }

    #[track_caller]
    pub fn print(&self, values: &[Operand<'_>]) {
        self.emit(Location::caller(), &sprint(values));
    }

    #[track_caller]
    pub fn println(&self, values: &[Operand<'_>]) {
        self.emit(Location::caller(), &sprintln(values));
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Location::caller(), &fmt::format(args));
    }

    /// Write the values, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, values: &[Operand<'_>]) -> ! {
        self.emit(Location::caller(), &sprint(values));
        std::process::exit(1)
    }

    #[track_caller]
    pub fn fatalln(&self, values: &[Operand<'_>]) -> ! {
        self.emit(Location::caller(), &sprintln(values));
        std::process::exit(1)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Location::caller(), &fmt::format(args));
        std::process::exit(1)
    }

    /// Write the values, then panic with the same text as the payload.
    ///
    /// The payload is a `String`, so it can be recovered with
    /// [`std::panic::catch_unwind`] and `downcast_ref::<String>()`.
    #[track_caller]
    pub fn panic(&self, values: &[Operand<'_>]) -> ! {
        self.raise(Location::caller(), sprint(values))
    }

    #[track_caller]
    pub fn panicln(&self, values: &[Operand<'_>]) -> ! {
        self.raise(Location::caller(), sprintln(values))
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.raise(Location::caller(), fmt::format(args))
    }

    /// Write `msg` as one line attributed to the caller, reporting write failures.
    #[track_caller]
    pub fn output(&self, msg: &str) -> io::Result<()> {
        self.line_writer().output_at(Location::caller(), msg)
    }

    /// Write `msg` as one line attributed to `caller`, reporting write failures.
    pub fn output_at(&self, caller: &Location<'_>, msg: &str) -> io::Result<()> {
        self.line_writer().output_at(caller, msg)
    }

    pub fn flags(&self) -> Flags {
        self.line_writer().flags()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.line_writer().set_flags(flags);
    }

    pub fn prefix(&self) -> String {
        self.line_writer().prefix()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.line_writer().set_prefix(prefix);
    }

    pub fn writer(&self) -> SharedWriter {
        self.line_writer().writer()
    }

    pub fn set_output(&self, out: SharedWriter) {
        self.line_writer().set_output(out);
    }

    // Convenience output never reports write failures.
    fn emit(&self, caller: &Location<'_>, msg: &str) {
        let _ = self.line_writer().output_at(caller, msg);
    }

    #[track_caller]
    fn raise(&self, caller: &Location<'_>, msg: String) -> ! {
        self.emit(caller, &msg);
        std::panic::panic_any(msg)
    }
}

/// A quiet logger whose line writer is created on first use.
impl Default for Logger {
    fn default() -> Self {
        Self {
            line: OnceLock::new(),
            debug: AtomicBool::new(false),
            toggle: Mutex::new(()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Logger");
        s.field("debug", &self.is_debug());
        if let Some(line) = self.line.get() {
            s.field("prefix", &line.prefix()).field("flags", &line.flags());
        }
        s.finish_non_exhaustive()
    }
}
