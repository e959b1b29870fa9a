//! Identity matching, chain iteration, and deep-cause extraction.
//!
//! Matching is by identity, not message equality: a model node matches
//! when the probe's node is the same allocation, a foreign error when the
//! probe points at the same value. The walk covers both chains of every
//! node it encounters, since a value may survive only on the identity
//! chain (wrap stores the node, the display chain keeps only its trace
//! links) or only on the display chain (cause composition stores the cause
//! there).

use std::sync::Arc;

use crate::shared::SharedError;
use crate::types::{Cause, Error, TraceLink};

impl Error {
    /// Whether `other`'s node appears anywhere in this error's match set:
    /// this node itself, every link of its identity chain, and every link
    /// of the display chain of each model node encountered.
    #[must_use]
    pub fn is(&self, other: &Error) -> bool {
        node_matches(self, &Probe::Node(other))
    }

    /// Like [`Error::is`], probing with an error reference instead of a
    /// node.
    ///
    /// A probe that is itself a model error or a [`SharedError`] handle
    /// falls back to node or allocation identity; any other probe matches
    /// a reachable foreign value by address. Retain foreign causes with
    /// [`SharedError`] so the probe and the stored cause share an address.
    #[must_use]
    pub fn is_ref(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        if let Some(node) = target.downcast_ref::<Error>() {
            return self.is(node);
        }
        if let Some(shared) = target.downcast_ref::<SharedError>() {
            return node_matches(self, &Probe::Addr(data_ptr(shared.get())));
        }
        node_matches(self, &Probe::Addr(data_ptr(target)))
    }

    /// Iterate over this error and the identity chain below it, outermost
    /// first.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The deepest cause under the display chain: trace links are walked
    /// to their terminus, model nodes found there are recursed into, and a
    /// foreign terminus is returned as-is without following its own
    /// source chain.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        let mut link = &self.inner.formatted;
        loop {
            match link {
                TraceLink::Trace(node) => match &node.next {
                    Some(next) => link = next,
                    None => return &**node,
                },
                TraceLink::Cause(Cause::Node(node)) => return node.root_cause(),
                TraceLink::Cause(Cause::Shared(err)) => return as_dyn(err),
            }
        }
    }
}

/// Deep-cause extraction over any error: [`Error::root_cause`] for model
/// errors, the error itself otherwise.
#[must_use]
pub fn root_cause_of<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> &'a (dyn std::error::Error + 'static) {
    match err.downcast_ref::<Error>() {
        Some(node) => node.root_cause(),
        None => err,
    }
}

/// Iterator over an error and its identity chain, returned by
/// [`Error::chain`].
pub struct Chain<'a> {
    next: Option<&'a (dyn std::error::Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn std::error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// What a match walk is looking for.
enum Probe<'p> {
    /// A model node, matched by shared allocation.
    Node(&'p Error),
    /// A foreign value, matched by data pointer.
    Addr(*const ()),
}

fn node_matches(node: &Error, probe: &Probe<'_>) -> bool {
    if let Probe::Node(other) = probe {
        if Arc::ptr_eq(&node.inner, &other.inner) {
            return true;
        }
    }
    if trace_matches(&node.inner.formatted, probe) {
        return true;
    }
    match &node.inner.original {
        Some(cause) => cause_matches(cause, probe),
        None => false,
    }
}

fn trace_matches(link: &TraceLink, probe: &Probe<'_>) -> bool {
    match link {
        TraceLink::Trace(node) => node
            .next
            .as_ref()
            .is_some_and(|next| trace_matches(next, probe)),
        TraceLink::Cause(cause) => cause_matches(cause, probe),
    }
}

fn cause_matches(cause: &Cause, probe: &Probe<'_>) -> bool {
    match cause {
        Cause::Node(node) => node_matches(node, probe),
        Cause::Shared(err) => foreign_matches(as_dyn(err), probe),
    }
}

/// Walk a foreign error's source chain. Model nodes and shared handles
/// found along the way re-enter the model walk; plain values are compared
/// by address.
fn foreign_matches(mut current: &(dyn std::error::Error + 'static), probe: &Probe<'_>) -> bool {
    loop {
        if let Some(node) = current.downcast_ref::<Error>() {
            return node_matches(node, probe);
        }
        if let Some(shared) = current.downcast_ref::<SharedError>() {
            current = shared.get();
            continue;
        }
        if let Probe::Addr(addr) = probe {
            if std::ptr::eq(data_ptr(current), *addr) {
                return true;
            }
        }
        match current.source() {
            Some(next) => current = next,
            None => return false,
        }
    }
}

fn as_dyn(err: &Arc<dyn std::error::Error + Send + Sync>) -> &(dyn std::error::Error + 'static) {
    &**err
}

fn data_ptr(err: &(dyn std::error::Error + 'static)) -> *const () {
    (err as *const dyn std::error::Error).cast::<()>()
}
