//! bytetext: Zero-Copy Bridging Between Byte Buffers and Character Views
//!
//! Two text-handling worlds coexist in one process:
//! - byte-oriented producers hand out buffers of unsigned byte elements
//!   (`&[u8]`, typically backed by `bytes::Bytes`);
//! - character-oriented consumers expect `&str` views and parsed
//!   structured-path values.
//!
//! This crate is the seam between them:
//! - [`cast`]: the one audited reinterpretation boundary
//! - [`view`]: byte buffer to `&str` character view, zero-copy
//! - `pointer`: byte buffer to parsed `Pointer` path (feature `structured`)
//!
//! Nothing here owns, copies, or transcodes buffer contents. A view is the
//! caller's memory seen through a different lens, and it borrows the buffer
//! it was made from.
//!
//! # Example
//!
//! ```rust
//! use bytetext::view;
//!
//! let buf: &[u8] = b"/users/0/name";
//!
//! let text = view::utf8(buf)?;
//! assert_eq!(text, "/users/0/name");
//! assert_eq!(text.as_ptr(), buf.as_ptr());
//! # Ok::<(), std::str::Utf8Error>(())
//! ```
//!
//! Parsing structured pointer paths out of buffers lives in the `pointer`
//! module; see its docs for the checked and unchecked entry points.
//!
//! # Feature flags
//!
//! - `structured` (default): compiles the structured-path adapter and links
//!   the parser crate. Disable for the view/cast surface alone.

pub mod cast;
pub mod view;

pub use bytetext_units::TextUnit;

// Structured path support
#[cfg(feature = "structured")]
mod error;

#[cfg(feature = "structured")]
pub mod pointer;

#[cfg(feature = "structured")]
pub use error::Error;

// Re-export parser types for convenience
#[cfg(feature = "structured")]
pub use bytetext_pointer::{ParseError, Pointer};
