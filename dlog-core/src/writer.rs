//! The underlying line logger.
//!
//! A [`LineWriter`] owns a destination, a prefix and a set of [`Flags`], and
//! writes each message as one line with a header built from those flags.

use crate::flags::Flags;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A byte sink shared between the logger and whoever created it.
///
/// The creator keeps its own handle and stays responsible for closing or
/// flushing the underlying stream.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Wrap any writer so it can be handed to a logger.
pub fn shared<W: Write + Send + 'static>(writer: W) -> SharedWriter {
    Arc::new(Mutex::new(writer))
}

struct Inner {
    prefix: String,
    flags: Flags,
    out: SharedWriter,
}

/// Line-oriented logger writing formatted lines to a [`SharedWriter`].
///
/// Every line is rendered and written with a single `write_all` while the
/// writer's lock is held, so concurrent callers never interleave within a line.
pub struct LineWriter {
    inner: Mutex<Inner>,
}

impl LineWriter {
    pub fn new(out: SharedWriter, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            inner: Mutex::new(Inner {
                prefix: prefix.into(),
                flags,
                out,
            }),
        }
    }

    /// Standard error, no prefix, [`Flags::STD`].
    pub fn stderr() -> Self {
        Self::new(shared(io::stderr()), "", Flags::STD)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    /// Replace the flags with `f(current)` in one step.
    pub fn update_flags(&self, f: impl FnOnce(Flags) -> Flags) -> Flags {
        let mut inner = self.lock();
        inner.flags = f(inner.flags);
        inner.flags
    }

    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    /// The current destination.
    pub fn writer(&self) -> SharedWriter {
        Arc::clone(&self.lock().out)
    }

    pub fn set_output(&self, out: SharedWriter) {
        self.lock().out = out;
    }

    /// Write `msg` as one line, attributing it to the code that called this
    /// method (or the nearest caller outside a chain of `#[track_caller]` functions).
    #[track_caller]
    pub fn output(&self, msg: &str) -> io::Result<()> {
        self.output_at(Location::caller(), msg)
    }

    /// Write `msg` as one line, attributing it to `caller`.
    ///
    /// A newline is appended unless `msg` already ends with one.
    pub fn output_at(&self, caller: &Location<'_>, msg: &str) -> io::Result<()> {
        let inner = self.lock();
        let mut line = String::with_capacity(inner.prefix.len() + msg.len() + 48);
        format_header(&mut line, &inner.prefix, inner.flags, caller);
        line.push_str(msg);
        if !msg.ends_with('\n') {
            line.push('\n');
        }
        let mut out = inner.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(line.as_bytes())
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

fn format_header(buf: &mut String, prefix: &str, flags: Flags, caller: &Location<'_>) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }
    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        if flags.contains(Flags::UTC) {
            format_time(buf, flags, Utc::now());
        } else {
            format_time(buf, flags, Local::now());
        }
    }
    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(caller.file())
        } else {
            caller.file()
        };
        let _ = write!(buf, "{}:{}: ", file, caller.line());
    }
    if flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }
}

fn format_time<Tz: TimeZone>(buf: &mut String, flags: Flags, now: DateTime<Tz>)
where
    Tz::Offset: std::fmt::Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        let _ = write!(buf, "{}", now.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", now.format("%.6f"));
        }
        buf.push(' ');
    }
}

/// Final element of a source path, splitting on either separator.
fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
