//! Context attachment and accessors.
//!
//! Context is a string-keyed metadata map that survives wrapping. A few
//! keys are fixed by convention and have dedicated helpers: `key` and
//! `detail` (which also participate in display composition), `pointer`,
//! and `failfast`. Everything here is advisory; callers branch on it, this
//! crate does not.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constructors::into_cause;
use crate::kind::ErrorKind;
use crate::types::{Cause, Error, ErrorInner, TraceLink};

impl Error {
    /// Return a new error with `key` set to `value` in the context map,
    /// overwriting any prior value for `key`. Kind and both cause chains
    /// are shared with `self` unchanged.
    #[must_use]
    pub fn with_context(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut context = self.inner.context.clone().unwrap_or_default();
        context.insert(key.into(), value.into());
        Self {
            inner: Arc::new(ErrorInner {
                kind: self.inner.kind,
                original: self.inner.original.clone(),
                formatted: self.inner.formatted.clone(),
                context: Some(context),
            }),
        }
    }

    /// Attach a context entry to any error.
    ///
    /// A model error gains the entry via [`Error::with_context`]. A foreign
    /// error becomes an [`ErrorKind::Unspecified`] node wrapping it on both
    /// chains, with no new display message, carrying the single entry.
    #[must_use]
    pub fn attach_context<E>(err: E, key: impl Into<String>, value: impl Into<String>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match into_cause(err) {
            Cause::Node(node) => node.with_context(key, value),
            cause => {
                let mut context = BTreeMap::new();
                context.insert(key.into(), value.into());
                Self {
                    inner: Arc::new(ErrorInner {
                        kind: ErrorKind::Unspecified,
                        original: Some(cause.clone()),
                        formatted: TraceLink::Cause(cause),
                        context: Some(context),
                    }),
                }
            }
        }
    }

    /// Set the `detail` context entry.
    #[must_use]
    pub fn with_detail(&self, detail: impl Into<String>) -> Self {
        self.with_context("detail", detail)
    }

    /// Set the `key` context entry.
    #[must_use]
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        self.with_context("key", key)
    }

    /// Set the `pointer` context entry.
    #[must_use]
    pub fn with_pointer(&self, pointer: impl Into<String>) -> Self {
        self.with_context("pointer", pointer)
    }

    /// Set the `key` then the `detail` context entries.
    #[must_use]
    pub fn with_key_and_detail(
        &self,
        key: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        self.with_key(key).with_detail(detail)
    }

    /// Mark this error as not resolvable by retries.
    #[must_use]
    pub fn fail_fast(&self) -> Self {
        self.with_context("failfast", "true")
    }

    /// The context map, absent when no entry was ever attached.
    #[must_use]
    pub fn context(&self) -> Option<&BTreeMap<String, String>> {
        self.inner.context.as_ref()
    }

    /// The context value for `key`, if present.
    #[must_use]
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.inner.context.as_ref()?.get(key).map(String::as_str)
    }

    /// The `detail` context entry, if present.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.context_value("detail")
    }

    /// The `key` context entry, if present.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.context_value("key")
    }

    /// The `pointer` context entry, if present.
    #[must_use]
    pub fn pointer(&self) -> Option<&str> {
        self.context_value("pointer")
    }

    /// Whether this error is marked fail-fast. Absence or any value other
    /// than `"true"` means false.
    #[must_use]
    pub fn is_fail_fast(&self) -> bool {
        self.context_value("failfast") == Some("true")
    }
}

/// The context map of `err`, or `None` when `err` is not a model error or
/// carries no context.
#[must_use]
pub fn context_of<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a BTreeMap<String, String>> {
    err.downcast_ref::<Error>().and_then(Error::context)
}

/// The context value of `err` for `key`, or `None` when `err` is not a
/// model error or has no entry for `key`.
#[must_use]
pub fn context_value_of<'a>(
    err: &'a (dyn std::error::Error + 'static),
    key: &str,
) -> Option<&'a str> {
    err.downcast_ref::<Error>().and_then(|e| e.context_value(key))
}

/// The kind of `err`, or [`ErrorKind::Unspecified`] when `err` is not a
/// model error.
#[must_use]
pub fn kind_of(err: &(dyn std::error::Error + 'static)) -> ErrorKind {
    err.downcast_ref::<Error>()
        .map_or(ErrorKind::Unspecified, Error::kind)
}

/// Whether `err` is marked fail-fast; false for non-model errors.
#[must_use]
pub fn fail_fast_of(err: &(dyn std::error::Error + 'static)) -> bool {
    err.downcast_ref::<Error>().is_some_and(Error::is_fail_fast)
}
