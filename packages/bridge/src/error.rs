//! Error type for the checked structured-path entry points.

use std::str::Utf8Error;

use bytetext_pointer::ParseError;

/// Errors from parsing a structured pointer path out of a byte buffer.
///
/// The two failure stages are kept distinct: the buffer may not be text at
/// all, or it may be text that is not a valid pointer. Parser errors are
/// carried through untouched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The buffer is not valid UTF-8.
    #[error("buffer is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// The buffer is text, but not a valid pointer.
    #[error("pointer syntax: {0}")]
    Pointer(#[from] ParseError),
}
