//! Formatting flags for log lines.
//!
//! The bit values match the conventional line-logger layout, so masks built by
//! callers elsewhere (e.g. `3` for date and time) carry the same meaning here.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitmask controlling the header written in front of each log line.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u32);

impl Flags {
    /// Local date, `2009/01/23`.
    pub const DATE: Flags = Flags(1 << 0);
    /// Local time, `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution, `01:23:23.123123`. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line number, `a/b/c.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element and line number, `c.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the beginning of the line to just before the message.
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// Initial values for the default logger: date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL: u32 = (1 << 7) - 1;

    const NAMES: [(&'static str, Flags); 7] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("utc", Flags::UTC),
        ("msgprefix", Flags::MSG_PREFIX),
    ];

    /// No header at all: the line is just prefix and message.
    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Build flags from raw bits, dropping any bit with no meaning.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL)
    }

    /// The raw bitmask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Flags) -> Self {
        Flags(self.0 | other.0)
    }

    /// `self` with every bit of `other` cleared.
    pub const fn difference(self, other: Flags) -> Self {
        Flags(self.0 & !other.0)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Flags(empty)");
        }
        write!(f, "Flags({self})")
    }
}

/// Comma-separated flag names, e.g. `date,time,shortfile`.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Parses a comma-separated list of flag names.
///
/// Names are case-insensitive and surrounding whitespace is ignored. The
/// aliases `std` (date and time) and `none` (no flags) are accepted, and an
/// empty string yields [`Flags::empty`].
impl FromStr for Flags {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let part = part.to_ascii_lowercase();
            flags |= match part.as_str() {
                "std" => Flags::STD,
                "none" => Flags::empty(),
                name => Self::NAMES
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, flag)| *flag)
                    .ok_or_else(|| format!("unknown log flag: {name:?}"))?,
            };
        }
        Ok(flags)
    }
}
