//! Helper macros shared by the decoders.

/// Returns early with `Err($error)` when `$predicate` does not hold.
///
/// Works like `assert!`, except the failure becomes a value the caller can
/// propagate instead of a panic.
///
/// ```ignore
/// ensure!(tokens.len() == 3, ParseError::malformed_request_line(line));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
