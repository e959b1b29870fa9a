//! Extension traits mapping `Result` and `Option` error arms through the
//! wrap and context operations.

use crate::kind::ErrorKind;
use crate::types::{Error, Result};

/// Wrapping and context attachment on the `Err` arm of a `Result`.
pub trait ResultExt<T> {
    /// Wrap the error with a message, as [`Error::wrap`].
    fn wrap_err(self, message: impl Into<String>) -> Result<T>;

    /// Wrap the error with a lazily built message, evaluated only on the
    /// `Err` arm.
    fn wrap_err_with<F, S>(self, message: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;

    /// Wrap the error with a message and force its kind, as
    /// [`ErrorKind::wrap`].
    fn wrap_kind(self, kind: ErrorKind, message: impl Into<String>) -> Result<T>;

    /// Attach a context entry to the error, as [`Error::attach_context`].
    fn err_context(self, key: impl Into<String>, value: impl Into<String>) -> Result<T>;

    /// Mark the error as not resolvable by retries.
    fn fail_fast(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| Error::wrap(err, message))
    }

    fn wrap_err_with<F, S>(self, message: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|err| Error::wrap(err, message()))
    }

    fn wrap_kind(self, kind: ErrorKind, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| kind.wrap(err, message))
    }

    fn err_context(self, key: impl Into<String>, value: impl Into<String>) -> Result<T> {
        self.map_err(|err| Error::attach_context(err, key, value))
    }

    fn fail_fast(self) -> Result<T> {
        self.map_err(|err| Error::attach_context(err, "failfast", "true"))
    }
}

/// Turning an absent `Option` into a classified error.
pub trait OptionExt<T> {
    /// Replace `None` with a leaf error of the given kind.
    fn ok_or_kind(self, kind: ErrorKind, message: impl Into<String>) -> Result<T>;

    /// Replace `None` with a leaf error whose message is built lazily.
    fn ok_or_kind_with<F, S>(self, kind: ErrorKind, message: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_kind(self, kind: ErrorKind, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| kind.new(message))
    }

    fn ok_or_kind_with<F, S>(self, kind: ErrorKind, message: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.ok_or_else(|| kind.new(message()))
    }
}
