//! An AWS Lambda function that logs every invocation event together with its context
//! and the versions of the runtime libraries, then responds with a fixed success message.
use std::env::var;
use std::str::FromStr;
use tracing::{warn, Level};

mod context;
mod error;
mod handler;
mod response;
pub mod versions;

pub use context::{InvocationContext, FIELD_NAMES};
pub use error::HandlerError;
pub use handler::{function_handler, handle, replay};
pub use response::{Response, SUCCESS_MESSAGE};

/// Overrides the default INFO level, e.g. `debug` to also log the raw runtime context.
pub const TRACING_LEVEL_ENV_VAR: &str = "INVOCATION_LOGGER_TRACING_LEVEL";

/// A standard routine for initializing a tracing provider for use in `main`.
/// * tracing_level: pass None if not known in advance and should be taken from an env var
///
/// Must be called once per process. Lambda reuses the process between invocations, so `main` is the place for it.
pub fn init_tracing(tracing_level: Option<Level>) {
    let (tracing_level, invalid_level) = match tracing_level {
        Some(v) => (v, None),
        None => parse_tracing_level(var(TRACING_LEVEL_ENV_VAR).ok()),
    };

    // CloudWatch adds its own timestamps and does not render color codes
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    if let Some(v) = invalid_level {
        warn!("Invalid tracing level in {TRACING_LEVEL_ENV_VAR}: {v}. Use trace, debug, info, warn or error. Defaulting to INFO.");
    }
}

/// Returns the level to use and the rejected value, if any.
fn parse_tracing_level(value: Option<String>) -> (Level, Option<String>) {
    match value {
        None => (Level::INFO, None),
        Some(v) => match Level::from_str(v.trim()) {
            Ok(level) => (level, None),
            Err(_) => (Level::INFO, Some(v)),
        },
    }
}
