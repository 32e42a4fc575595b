//! Formatting macros.
//!
//! Each macro writes through the default logger, or through an explicit one
//! when the arguments start with `logger =>`. The caller's `file:line` is used
//! for the header.
//!
//! - `debug!`, `log_print!`, `fatal!`, `log_panic!` write their arguments back to back,
//!   with a space between two adjacent non-string arguments.
//! - `debugln!`, `log_println!`, `fatalln!`, `log_panicln!` separate them with spaces.
//! - `debugf!`, `log_printf!`, `fatalf!`, `log_panicf!` take a format string.

/// Debug output, written only while debug mode is on.
///
/// ```
/// let n = 3;
/// dlog::debug!("workers=", n);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::debug(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::debug(&$crate::operands![$($arg),*])
    };
}

/// Debug output with space-separated arguments, written only while debug mode is on.
#[macro_export]
macro_rules! debugln {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::debugln(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::debugln(&$crate::operands![$($arg),*])
    };
}

/// Formatted debug output, written only while debug mode is on.
///
/// ```
/// use std::sync::Arc;
/// use dlog::{shared, Flags, Logger};
///
/// let logger = Arc::new(Logger::new(shared(Vec::new()), "svc: ", Flags::STD, true));
/// dlog::debugf!(logger => "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {
        $crate::Logger::debugf(&$logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Regular output, arguments back to back.
#[macro_export]
macro_rules! log_print {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::print(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::print(&$crate::operands![$($arg),*])
    };
}

/// Regular output, arguments separated by spaces.
#[macro_export]
macro_rules! log_println {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::println(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::println(&$crate::operands![$($arg),*])
    };
}

/// Regular formatted output.
#[macro_export]
macro_rules! log_printf {
    ($logger:expr => $($arg:tt)+) => {
        $crate::Logger::printf(&$logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::printf(::std::format_args!($($arg)+))
    };
}

/// Write the arguments, then exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::fatal(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::fatal(&$crate::operands![$($arg),*])
    };
}

/// Write the space-separated arguments, then exit the process with status 1.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::fatalln(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::fatalln(&$crate::operands![$($arg),*])
    };
}

/// Write the formatted message, then exit the process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr => $($arg:tt)+) => {
        $crate::Logger::fatalf(&$logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}

/// Write the arguments, then panic with the same text.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::panic(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::panic(&$crate::operands![$($arg),*])
    };
}

/// Write the space-separated arguments, then panic with the same text.
#[macro_export]
macro_rules! log_panicln {
    ($logger:expr => $($arg:expr),* $(,)?) => {
        $crate::Logger::panicln(&$logger, &$crate::operands![$($arg),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::panicln(&$crate::operands![$($arg),*])
    };
}

/// Write the formatted message, then panic with the same text.
#[macro_export]
macro_rules! log_panicf {
    ($logger:expr => $($arg:tt)+) => {
        $crate::Logger::panicf(&$logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::panicf(::std::format_args!($($arg)+))
    };
}
