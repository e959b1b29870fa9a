//! Error constructors: leaves, wrapping, and cause composition.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::kind::ErrorKind;
use crate::shared::SharedError;
use crate::types::{Cause, Error, ErrorInner, TraceLink, TraceNode};

impl Error {
    /// Create a leaf error with the given kind and message.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                original: None,
                formatted: TraceNode::record(message.into(), None),
                context: None,
            }),
        }
    }

    /// Create an unclassified leaf error.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unspecified, message)
    }

    /// Wrap `err` with a message, prepending it to the display chain.
    ///
    /// When `err` is itself a model error its kind and context carry
    /// forward unchanged; use [`ErrorKind::wrap`] to re-classify. A foreign
    /// `err` yields an [`ErrorKind::Unspecified`] node with no context.
    ///
    /// Wrapping never mutates `err`; the result is a new node whose
    /// identity chain points at `err`.
    #[must_use]
    pub fn wrap<E>(err: E, message: impl Into<String>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::wrap_impl(err, message.into(), None)
    }

    pub(crate) fn wrap_impl<E>(err: E, message: String, kind: Option<ErrorKind>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let cause = into_cause(err);
        let (carried_kind, context, prior_formatted) = match &cause {
            Cause::Node(node) => (
                node.inner.kind,
                node.inner.context.clone(),
                node.inner.formatted.clone(),
            ),
            Cause::Shared(_) => (
                ErrorKind::Unspecified,
                None,
                TraceLink::Cause(cause.clone()),
            ),
        };
        Self {
            inner: Arc::new(ErrorInner {
                kind: kind.unwrap_or(carried_kind),
                original: Some(cause),
                formatted: TraceNode::record(message, Some(prior_formatted)),
                context,
            }),
        }
    }

    /// The classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// The backtrace captured by the most recent construction or wrap
    /// operation, absent for nodes built by
    /// [`attach_context`](Error::attach_context) on a foreign error.
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> Option<&backtrace::Backtrace> {
        match &self.inner.formatted {
            TraceLink::Trace(node) => Some(&node.backtrace),
            TraceLink::Cause(_) => None,
        }
    }

    /// Attach `cause` below `self`. Equivalent to
    /// [`with_cause`]`(self, cause)`; see that function for the merge and
    /// classification rules.
    #[must_use]
    pub fn caused_by<C>(self, cause: C) -> Self
    where
        C: std::error::Error + Send + Sync + 'static,
    {
        with_cause(self, cause)
    }
}

/// Attach `cause` below `err`, typically to put an internal error under a
/// domain sentinel while keeping both matchable.
///
/// The result's identity chain points at `err`; its display chain prepends
/// `err`'s full display output to `cause`'s, so the composed message reads
/// `err: cause`. Context maps merge with `err`'s entries winning on key
/// collisions, and the kind is `err`'s unless `err` is unclassified, in
/// which case `cause`'s kind is taken.
#[must_use]
pub fn with_cause<E, C>(err: E, cause: C) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
    C: std::error::Error + Send + Sync + 'static,
{
    let err = into_cause(err);
    let cause = into_cause(cause);

    let mut merged = BTreeMap::new();
    let mut kind = ErrorKind::Unspecified;

    if let Cause::Node(node) = &cause {
        if let Some(context) = &node.inner.context {
            merged.extend(context.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        kind = node.inner.kind;
    }

    if let Cause::Node(node) = &err {
        if let Some(context) = &node.inner.context {
            merged.extend(context.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if node.inner.kind != ErrorKind::Unspecified {
            kind = node.inner.kind;
        }
    }

    let message = err.as_dyn().to_string();

    Error {
        inner: Arc::new(ErrorInner {
            kind,
            original: Some(err),
            formatted: TraceNode::record(message, Some(TraceLink::Cause(cause))),
            context: if merged.is_empty() { None } else { Some(merged) },
        }),
    }
}

/// Turn an owned error value into a chain link.
///
/// Model errors and shared handles are recognized at runtime so their
/// identity survives the generic entry points; anything else moves behind
/// a fresh shared allocation.
pub(crate) fn into_cause<E>(err: E) -> Cause
where
    E: std::error::Error + Send + Sync + 'static,
{
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
    let boxed = match boxed.downcast::<Error>() {
        Ok(node) => return Cause::Node(*node),
        Err(other) => other,
    };
    match boxed.downcast::<SharedError>() {
        Ok(shared) => Cause::Shared(shared.inner.clone()),
        Err(foreign) => Cause::Shared(Arc::from(foreign)),
    }
}
