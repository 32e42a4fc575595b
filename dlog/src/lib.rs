#![warn(missing_docs)]

//! # dlog
//!
//! A line logger with one extra level: debug output that is written only while
//! debug mode is on.
//!
//! The process-wide default logger writes to standard error and turns debug mode
//! on when the `DEBUG` environment variable is set to any non-empty value. The
//! free functions and macros of this crate write through it:
//!
//! ```
//! dlog::log_println!("starting", "up");
//! dlog::debugf!("only shown with DEBUG set: {}", 42);
//!
//! dlog::set_debug(true);
//! dlog::debugln!("now shown");
//! dlog::set_debug(false);
//! ```
//!
//! Independent loggers can be created with [`Logger::new`] and handed down a call
//! chain directly or through a [`Context`]:
//!
//! ```
//! use std::sync::Arc;
//! use dlog::{attach_to_context, from_context, shared, Context, Flags, Logger};
//!
//! let logger = Arc::new(Logger::new(shared(Vec::new()), "svc: ", Flags::STD, true));
//! let ctx = attach_to_context(&Context::background(), logger);
//!
//! fn handle(ctx: &Context) {
//!     dlog::debugln!(from_context(ctx) => "handling request");
//! }
//! handle(&ctx);
//! ```

mod context;
mod global;
mod macros;

pub use context::{attach_to_context, from_context};
pub use dlog_core::{
    debug_from_env, operands, shared, sprint, sprintln, CarriesLogger, Context, Flags, LineWriter,
    Logger, Operand, SharedWriter, DEBUG_ENV,
};
pub use global::{
    debug, debugf, debugln, default_logger, fatal, fatalf, fatalln, flags, is_debug, output,
    panic, panicf, panicln, prefix, print, printf, println, set_debug, set_flags, set_output,
    set_prefix, writer,
};
