//! Carrying a logger through a call chain.

use crate::logger::Logger;
use std::fmt;
use std::sync::Arc;

/// Anything that may carry a [`Logger`] for the code it is passed to.
///
/// [`Context`] implements this; request or session types of an application
/// can implement it too, so they can be handed to the same lookup function.
pub trait CarriesLogger {
    fn attached_logger(&self) -> Option<&Logger>;
}

/// A request-scoped value carrier.
///
/// Contexts are immutable: [`Context::with_logger`] returns a derived context
/// and leaves `self` as it was. Clones are cheap and share the attached logger.
#[derive(Clone, Default)]
pub struct Context {
    logger: Option<Arc<Logger>>,
}

impl Context {
    /// An empty context with nothing attached.
    pub fn background() -> Self {
        Self::default()
    }

    /// A derived context carrying `logger`, replacing any logger `self` carries.
    #[must_use]
    pub fn with_logger(&self, logger: Arc<Logger>) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    pub fn logger(&self) -> Option<&Arc<Logger>> {
        self.logger.as_ref()
    }
}

impl CarriesLogger for Context {
    fn attached_logger(&self) -> Option<&Logger> {
        self.logger.as_deref()
    }
}

impl<T: CarriesLogger + ?Sized> CarriesLogger for &T {
    fn attached_logger(&self) -> Option<&Logger> {
        (**self).attached_logger()
    }
}

impl<T: CarriesLogger + ?Sized> CarriesLogger for Arc<T> {
    fn attached_logger(&self) -> Option<&Logger> {
        (**self).attached_logger()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("logger", &self.logger)
            .finish()
    }
}
