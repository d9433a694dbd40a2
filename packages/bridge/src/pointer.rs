//! Parsing structured pointer paths straight from byte buffers.
//!
//! The adapter does exactly two things: obtain a character view of the
//! buffer, then hand that view to the parser. Syntax rules, token escaping,
//! and error kinds all belong to [`bytetext_pointer`]; nothing is added or
//! filtered here.
//!
//! Entry points come in checked and unchecked flavors. The checked pair
//! validates the buffer's encoding first and reports failures through
//! [`Error`]; the unchecked pair takes the encoding as a safety contract
//! and exposes the parser's own [`ParseError`] directly.

use bytetext_pointer::{ParseError, Pointer};

use crate::view;
use crate::Error;

/// Parse a pointer path from a byte buffer.
///
/// Validates that the buffer is UTF-8, then parses. The buffer is borrowed
/// only for the duration of the call; the returned [`Pointer`] owns its
/// tokens.
///
/// # Example
///
/// ```rust
/// use bytetext::pointer;
///
/// let ptr = pointer::try_parse(b"/a/0")?;
/// assert_eq!(ptr.tokens, vec!["a", "0"]);
/// # Ok::<(), bytetext::Error>(())
/// ```
pub fn try_parse(buf: &[u8]) -> Result<Pointer, Error> {
    let text = view::utf8(buf)?;
    Ok(Pointer::try_parse(text)?)
}

/// Parse a pointer path from a byte buffer, panicking on failure.
///
/// # Panics
///
/// Panics if the buffer is not UTF-8 or not a valid pointer, carrying the
/// failure's rendering. Use [`try_parse`] for fallible parsing.
pub fn parse(buf: &[u8]) -> Pointer {
    match try_parse(buf) {
        Ok(pointer) => pointer,
        Err(e) => panic!("invalid pointer bytes: {}", e),
    }
}

/// Parse a pointer path from a byte buffer known to be UTF-8.
///
/// Skips encoding validation; the error type is the parser's own
/// [`ParseError`], exactly as the parser returned it.
///
/// # Safety
///
/// `buf` must be valid UTF-8.
pub unsafe fn try_parse_unchecked(buf: &[u8]) -> Result<Pointer, ParseError> {
    // SAFETY: forwarded to the caller.
    let text = unsafe { view::utf8_unchecked(buf) };
    Pointer::try_parse(text)
}

/// Parse a pointer path from a byte buffer known to be UTF-8, panicking on
/// failure.
///
/// # Safety
///
/// `buf` must be valid UTF-8.
///
/// # Panics
///
/// Panics if the text is not a valid pointer, carrying the parser error's
/// rendering.
pub unsafe fn parse_unchecked(buf: &[u8]) -> Pointer {
    // SAFETY: forwarded to the caller.
    match unsafe { try_parse_unchecked(buf) } {
        Ok(pointer) => pointer,
        Err(e) => panic!("invalid pointer bytes: {}", e),
    }
}
