//! Structured error wrapping with classification kinds, string context,
//! and dual cause chains.
//!
//! An [`Error`] carries three things across any number of wrapping layers:
//! - a [`kind`](Error::kind) from a closed set ([`ErrorKind`]), typically
//!   mapped to a response code at a service boundary;
//! - a string key/value [`context`](Error::context) map, merged when
//!   errors are composed;
//! - a message chain composed into `outer: inner: root` display output
//!   that never repeats a `key` or `detail` already present in the chain.
//!
//! Identity matching ([`Error::is`] / [`Error::is_ref`]) walks both the
//! identity chain and the display chain, so a sentinel stays matchable
//! whether it was wrapped directly or attached as a cause under another
//! error:
//!
//! ```
//! use errkind::{with_cause, Error, ErrorKind};
//!
//! let sentinel = ErrorKind::NotFound.new_with_detail("profile missing");
//! let inner = Error::msg("row not in table").with_context("table", "profiles");
//! let err = Error::wrap(with_cause(sentinel.clone(), inner), "loading profile");
//!
//! assert!(err.is(&sentinel));
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert_eq!(err.context_value("table"), Some("profiles"));
//! ```

pub mod chain;
pub mod constructors;
pub mod context;
pub mod display;
pub mod extensions;
pub mod kind;
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod shared;
pub mod types;

pub use chain::{root_cause_of, Chain};
pub use constructors::with_cause;
pub use context::{context_of, context_value_of, fail_fast_of, kind_of};
pub use extensions::{OptionExt, ResultExt};
pub use kind::ErrorKind;
pub use shared::SharedError;
pub use types::{Error, Result};
