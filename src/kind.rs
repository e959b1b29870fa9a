//! The closed set of error classifications.

use serde::{Deserialize, Serialize};

use crate::types::Error;

/// Classification attached to every [`Error`].
///
/// The set is closed and exhaustive: callers are expected to match on it,
/// typically to map an error to a response code at a service boundary.
/// Nothing in this crate branches on the kind; it is advisory metadata that
/// survives wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No classification assigned.
    #[default]
    #[error("unspecified")]
    Unspecified,

    /// A requested entity does not exist.
    #[error("not found")]
    NotFound,

    /// A supplied parameter is invalid.
    #[error("invalid parameter")]
    InvalidParameter,

    /// A required parameter is missing.
    #[error("missing parameter")]
    MissingParameter,

    /// Input failed validation.
    #[error("validation failed")]
    Validation,

    /// The caller is not allowed to perform the operation.
    #[error("forbidden")]
    Forbidden,

    /// Safe to surface to end users verbatim.
    #[error("public")]
    Public,

    /// The request was malformed.
    #[error("bad request")]
    BadRequest,

    /// The caller is not authenticated.
    #[error("unauthorized")]
    Unauthorized,
}

impl ErrorKind {
    /// Create a leaf error of this kind.
    #[must_use]
    pub fn new(self, message: impl Into<String>) -> Error {
        Error::new(self, message)
    }

    /// Create a leaf error of this kind whose message is also recorded as
    /// the `detail` context entry.
    ///
    /// The display composition drops a `detail` already contained in the
    /// message chain, so the text is never shown twice.
    #[must_use]
    pub fn new_with_detail(self, message: impl Into<String>) -> Error {
        let message = message.into();
        Error::new(self, message.clone()).with_detail(message)
    }

    /// Create a leaf error of this kind carrying both a `key` and a
    /// `detail` context entry, the detail being the message itself.
    #[must_use]
    pub fn new_with_key_and_detail(
        self,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        let message = message.into();
        Error::new(self, message.clone()).with_key_and_detail(key, message)
    }

    /// Wrap `err` with a message, forcing the result's kind to `self`.
    ///
    /// This is the only way to change the classification of a chain:
    /// [`Error::wrap`] always carries the wrapped node's kind forward.
    #[must_use]
    pub fn wrap<E>(self, err: E, message: impl Into<String>) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::wrap_impl(err, message.into(), Some(self))
    }
}
