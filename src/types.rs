//! Core error types and the two cause chains behind them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::kind::ErrorKind;

/// Structured error value carrying a classification, string context, and
/// chained causes.
///
/// `Error` is a cheap-to-clone handle onto an immutable node: wrapping and
/// context attachment never mutate an existing error, they build a new node
/// that shares the prior links. Two clones refer to the same node, which is
/// what identity matching via [`Error::is`] compares.
///
/// Every node keeps two independent chains to its causes:
///
/// - the *identity* chain ([`source`](std::error::Error::source)), used by
///   [`Error::is`] / [`Error::is_ref`] to test whether a given error value
///   is anywhere below this one;
/// - the *display* chain, used by the `Display` implementation to compose
///   the `outer: inner: root` message and by [`Error::root_cause`] to dig
///   out the deepest cause.
///
/// The chains wrap at different boundaries (a wrap message extends the
/// display chain without repeating the inner error's key/detail prefixes),
/// so they cannot be collapsed into one.
#[derive(Clone)]
pub struct Error {
    pub(crate) inner: Arc<ErrorInner>,
}

/// Owned state of one node.
pub(crate) struct ErrorInner {
    /// Classification, fixed at construction.
    pub(crate) kind: ErrorKind,
    /// Identity chain: the immediately wrapped cause. `None` for leaves.
    pub(crate) original: Option<Cause>,
    /// Display/trace chain, always present.
    pub(crate) formatted: TraceLink,
    /// String metadata that survives wrapping. Absent or non-empty.
    pub(crate) context: Option<BTreeMap<String, String>>,
}

/// A link to a wrapped error value.
#[derive(Clone)]
pub(crate) enum Cause {
    /// Another node of this model.
    Node(Error),
    /// A foreign error, retained behind a shared allocation so the wrapped
    /// value keeps a stable address for identity matching.
    Shared(Arc<dyn std::error::Error + Send + Sync>),
}

impl Cause {
    pub(crate) fn as_dyn(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Cause::Node(node) => node,
            Cause::Shared(err) => &**err,
        }
    }
}

/// One link of the display/trace chain.
#[derive(Clone)]
pub(crate) enum TraceLink {
    /// A message recorded by a constructor or wrap operation.
    Trace(Arc<TraceNode>),
    /// Terminal link: an error value whose own display output ends the
    /// composed message.
    Cause(Cause),
}

/// A recorded message plus the backtrace captured when it was recorded.
pub(crate) struct TraceNode {
    pub(crate) message: String,
    pub(crate) next: Option<TraceLink>,
    #[cfg(feature = "full-backtrace")]
    pub(crate) backtrace: backtrace::Backtrace,
}

impl TraceNode {
    /// Record a message, capturing the backtrace at the call site.
    pub(crate) fn record(message: String, next: Option<TraceLink>) -> TraceLink {
        TraceLink::Trace(Arc::new(TraceNode {
            message,
            next,
            #[cfg(feature = "full-backtrace")]
            backtrace: backtrace::Backtrace::new(),
        }))
    }
}

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
