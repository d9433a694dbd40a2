//! Character views over byte buffers.
//!
//! A view is the source buffer's memory seen through the character lens:
//! no copy, no allocation, no ownership. Each view borrows the buffer it
//! was made from and cannot outlive it.

use std::str::Utf8Error;

use crate::cast;

/// View a byte buffer as UTF-8 text, validating the encoding first.
///
/// Zero-copy: on success the returned view covers exactly the buffer's
/// bytes, at the buffer's own address.
///
/// # Example
///
/// ```rust
/// let buf: &[u8] = b"stream";
/// let text = bytetext::view::utf8(buf)?;
/// assert_eq!(text, "stream");
/// assert_eq!(text.as_ptr(), buf.as_ptr());
/// # Ok::<(), std::str::Utf8Error>(())
/// ```
pub fn utf8(buf: &[u8]) -> Result<&str, Utf8Error> {
    std::str::from_utf8(buf)
}

/// View a byte buffer as UTF-8 text without validating.
///
/// Construction never fails and costs nothing. A buffer of garbage yields
/// a view over garbage, and every later use of that view is undefined
/// behavior, so prefer [`utf8`] anywhere the bytes are not already known
/// to be text.
///
/// # Safety
///
/// `buf` must be valid UTF-8.
pub const unsafe fn utf8_unchecked(buf: &[u8]) -> &str {
    // SAFETY: forwarded to the caller.
    unsafe { cast::utf8(buf) }
}
