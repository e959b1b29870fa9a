//! Display, Debug, and `std::error::Error` implementations.

use std::fmt;

use crate::types::{Error, TraceLink, TraceNode};

/// Message composition.
///
/// The display string is built from the `key` and `detail` context entries
/// plus the fully composed display chain, in that order, joined with
/// `": "`. An entry already contained in the chain text is dropped, so
/// constructors that record their message as the detail never show it
/// twice. Empty entries are dropped.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.inner.formatted.to_string();

        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(key) = self.key() {
            if !base.contains(key) {
                parts.push(key);
            }
        }
        if let Some(detail) = self.detail() {
            if !base.contains(detail) {
                parts.push(detail);
            }
        }
        parts.push(&base);
        parts.retain(|part| !part.is_empty());

        f.write_str(&parts.join(": "))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        write!(f, "\nkind: {}", self.inner.kind)?;
        if let Some(context) = &self.inner.context {
            for (key, value) in context {
                write!(f, "\n{key}: {value}")?;
            }
        }
        #[cfg(feature = "full-backtrace")]
        if let TraceLink::Trace(node) = &self.inner.formatted {
            write!(f, "\n\nbacktrace:\n{:?}", node.backtrace)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    /// Single-step unwrap: the immediately wrapped cause on the identity
    /// chain, `None` for leaves. Generic chain walkers traverse the
    /// identity chain through this.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.original.as_ref().map(|cause| cause.as_dyn())
    }
}

/// Each trace message prefixes whatever lies below it; a terminal cause
/// contributes its own display output, key/detail prefixes included.
impl fmt::Display for TraceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLink::Trace(node) => {
                f.write_str(&node.message)?;
                if let Some(next) = &node.next {
                    write!(f, ": {next}")?;
                }
                Ok(())
            }
            TraceLink::Cause(cause) => write!(f, "{}", cause.as_dyn()),
        }
    }
}

// A bare trace node is what root-cause extraction returns when a chain
// bottoms out at a constructed leaf; it displays its own message only.
impl fmt::Display for TraceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for TraceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TraceNode {}
