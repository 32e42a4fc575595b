//! Passing a logger through a call chain without threading it through every signature.

use crate::global::default_logger;
use dlog_core::{CarriesLogger, Context, Logger};
use std::sync::Arc;

/// A context derived from `ctx` that carries `logger`.
///
/// `ctx` itself is left unchanged; attaching again derives yet another context.
#[must_use]
pub fn attach_to_context(ctx: &Context, logger: Arc<Logger>) -> Context {
    ctx.with_logger(logger)
}

/// The logger carried by `ctx`, or the process-wide default when it carries none.
pub fn from_context<C: CarriesLogger + ?Sized>(ctx: &C) -> &Logger {
    match ctx.attached_logger() {
        Some(logger) => logger,
        None => default_logger(),
    }
}
