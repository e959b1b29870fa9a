//! Macros for error creation and early returns.

/// Create an [`Error`](crate::Error) from a format string, recording the
/// call site as the `at` context entry.
///
/// With a leading kind variant the result is classified; otherwise it is
/// [`ErrorKind::Unspecified`](crate::ErrorKind::Unspecified).
///
/// ```
/// use errkind::err;
///
/// let plain = err!("parse failed on line {}", 7);
/// let typed = err!(NotFound, "no user {}", "u-42");
/// ```
#[macro_export]
macro_rules! err {
    ($kind:ident, $($arg:tt)+) => {
        $crate::ErrorKind::$kind
            .new(format!($($arg)+))
            .with_context("at", format!("{}:{}", file!(), line!()))
    };
    ($($arg:tt)+) => {
        $crate::Error::msg(format!($($arg)+))
            .with_context("at", format!("{}:{}", file!(), line!()))
    };
}

/// Return early with an error built by [`err!`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an error built by [`err!`] unless the condition
/// holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
