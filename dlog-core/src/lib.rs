//! dlog-core: line logger with a switchable debug level
pub mod context;
pub mod env;
pub mod flags;
pub mod logger;
pub mod operand;
pub mod writer;

pub use context::{CarriesLogger, Context};
pub use env::{debug_from_env, DEBUG_ENV};
pub use flags::Flags;
pub use logger::Logger;
pub use operand::{sprint, sprintln, Operand};
pub use writer::{shared, LineWriter, SharedWriter};
