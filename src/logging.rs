//! Severity mapping and structured log emission for errors.
//!
//! Configure levels via `RUST_LOG` as usual for `env_logger`, e.g.
//! `RUST_LOG=info` in production or `RUST_LOG=myservice=debug` per module.

use std::sync::Once;

use log::Level;

use crate::kind::ErrorKind;
use crate::types::Error;

static INIT_LOGGER: Once = Once::new();

/// Initialize `env_logger` once for the process. Safe to call from
/// multiple places; only the first call takes effect.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();
    });
}

/// Initialize logging for test environments, tolerating repeated calls
/// across test binaries.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

impl ErrorKind {
    /// The log level an error of this kind is emitted at.
    ///
    /// Kinds describing routine client input log at `Info`, denied access
    /// at `Warn`, and unclassified errors at `Error` since they usually
    /// indicate a server-side fault.
    #[must_use]
    pub fn severity(self) -> Level {
        match self {
            ErrorKind::Unspecified => Level::Error,
            ErrorKind::Forbidden | ErrorKind::Unauthorized => Level::Warn,
            ErrorKind::NotFound
            | ErrorKind::InvalidParameter
            | ErrorKind::MissingParameter
            | ErrorKind::Validation
            | ErrorKind::Public
            | ErrorKind::BadRequest => Level::Info,
        }
    }
}

impl Error {
    /// Emit one log line for this error at its kind's severity: the
    /// composed display string, the kind, and any context entries.
    pub fn log(&self) {
        let level = self.kind().severity();
        match self.context() {
            Some(context) => {
                let entries = context
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                log::log!(level, "{self} (kind: {}, {entries})", self.kind());
            }
            None => log::log!(level, "{self} (kind: {})", self.kind()),
        }
    }
}
