//! Values passed to the unformatted `debug`/`print`/`fatal`/`panic` variants.
//!
//! Joining operands depends on whether they are strings: two adjacent
//! non-string operands are separated by a space, anything next to a string is
//! written as is. [`operands!`](crate::operands) builds the list and tells
//! strings (`&str`, `String`, anything `AsRef<str>`) from other `Display`
//! values at compile time.

use std::fmt::{self, Display, Write as _};

/// One value to be written.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    Str(&'a str),
    Value(&'a dyn Display),
}

impl Operand<'_> {
    pub fn is_str(&self) -> bool {
        matches!(self, Operand::Str(_))
    }
}

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Str(s) => f.write_str(s),
            Operand::Value(v) => v.fmt(f),
        }
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Operand::Value(v) => f.debug_tuple("Value").field(&format_args!("{v}")).finish(),
        }
    }
}

/// Operands written back to back, with a space between two adjacent non-strings.
pub fn sprint(values: &[Operand<'_>]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 && !value.is_str() && !values[i - 1].is_str() {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out
}

/// Operands separated by single spaces, with a trailing newline.
pub fn sprintln(values: &[Operand<'_>]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out.push('\n');
    out
}

#[doc(hidden)]
pub struct Wrap<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait StrOperand<'a> {
    fn operand(&self) -> Operand<'a>;
}

impl<'a, T: AsRef<str> + ?Sized> StrOperand<'a> for Wrap<'a, T> {
    fn operand(&self) -> Operand<'a> {
        Operand::Str(<T as AsRef<str>>::as_ref(self.0))
    }
}

#[doc(hidden)]
pub trait DisplayOperand<'a> {
    fn operand(&self) -> Operand<'a>;
}

// One reference deeper than `StrOperand`, so method lookup prefers strings.
impl<'a, 'b, T: Display + 'a> DisplayOperand<'a> for &'b Wrap<'a, T> {
    fn operand(&self) -> Operand<'a> {
        Operand::Value(self.0)
    }
}

/// Build an array of [`Operand`]s from expressions.
///
/// ```
/// use dlog_core::{operands, sprint};
///
/// let name = String::from("disk");
/// assert_eq!(sprint(&operands![1, 2, name, 3.5]), "1 2disk3.5");
/// ```
#[macro_export]
macro_rules! operands {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::operand::{DisplayOperand as _, StrOperand as _};
        [$((&$crate::operand::Wrap(&$arg)).operand()),*]
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operands;

    #[test]
    fn test_strings_are_detected() {
        let owned = String::from("b");
        let borrowed: &String = &owned;
        let ops = operands!["a", owned, borrowed, 'c', 1];
        let kinds: Vec<bool> = ops.iter().map(Operand::is_str).collect();
        assert_eq!(kinds, [true, true, true, false, false]);
    }

    #[test]
    fn test_sprint_spaces_only_between_non_strings() {
        assert_eq!(sprint(&operands![1, 2, "x", 3.5]), "1 2x3.5");
        assert_eq!(sprint(&operands!["a ", "b"]), "a b");
        assert_eq!(sprint(&operands!["n=", 1, 2]), "n=1 2");
        assert_eq!(sprint(&operands![true, 'c']), "true c");
        assert_eq!(sprint(&operands![]), "");
    }

    #[test]
    fn test_sprintln_spaces_everything() {
        assert_eq!(sprintln(&operands!["a", 1, 'c']), "a 1 c\n");
        assert_eq!(sprintln(&operands![]), "\n");
    }

    #[test]
    fn test_expressions_as_operands() {
        let n = 4;
        assert_eq!(sprint(&operands![n + 1, n * 2, format!("={n}")]), "5 8=4");
    }

    #[test]
    fn test_hand_built_operands() {
        let n = 7;
        let ops = [Operand::Value(&n), Operand::Value(&n), Operand::Str("!")];
        assert_eq!(sprint(&ops), "7 7!");
        assert_eq!(format!("{:?}", ops[2]), "Str(\"!\")");
    }
}
