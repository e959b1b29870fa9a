//! Shared handles giving foreign errors a retained, matchable identity.

use std::fmt;
use std::sync::Arc;

/// A cloneable handle around a foreign error.
///
/// Identity matching compares the wrapped value's address, so a cause must
/// be *retained* to be matched later. Model errors retain by cloning (two
/// [`Error`](crate::Error) clones share one node); a foreign error is moved
/// when wrapped, so its address would be lost. Put it behind a
/// `SharedError` first: clones of the handle share the same allocation, and
/// wrapping a clone leaves the other clone matchable via
/// [`Error::is_ref`](crate::Error::is_ref).
///
/// ```
/// use errkind::{Error, SharedError};
///
/// let io = SharedError::new(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
/// let wrapped = Error::wrap(io.clone(), "flush failed");
/// assert!(wrapped.is_ref(io.get()));
/// ```
#[derive(Clone)]
pub struct SharedError {
    pub(crate) inner: Arc<dyn std::error::Error + Send + Sync>,
}

impl SharedError {
    /// Move `err` behind a shared allocation.
    pub fn new<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(err),
        }
    }

    /// Borrow the underlying error, e.g. as a probe for
    /// [`Error::is_ref`](crate::Error::is_ref) or for downcasting.
    #[must_use]
    pub fn get(&self) -> &(dyn std::error::Error + 'static) {
        &*self.inner
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl std::error::Error for SharedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl From<anyhow::Error> for SharedError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            inner: Arc::from(Box::<dyn std::error::Error + Send + Sync>::from(err)),
        }
    }
}
