//! Bytetext Pointer: Slash-Delimited Structured Paths
//!
//! A pointer addresses a location inside hierarchical structured data as a
//! sequence of tokens, written as a slash-delimited string per
//! [RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901) (JSON Pointer):
//!
//! - the empty string is the root pointer (no tokens);
//! - every other pointer starts with `/`, and each `/` begins a token;
//! - `~0` escapes `~` and `~1` escapes `/` inside a token;
//! - empty tokens are legal and address empty-string keys.
//!
//! This crate only parses, prints, and compares pointers. Resolving a
//! pointer against a document belongs to whatever library owns the document.
//!
//! # Example
//!
//! ```rust
//! use bytetext_pointer::{ParseError, Pointer};
//!
//! let ptr = Pointer::try_parse("/users/0/name").unwrap();
//! assert_eq!(ptr.tokens, vec!["users", "0", "name"]);
//!
//! // Escapes decode to the literal characters.
//! let ptr = Pointer::try_parse("/a~1b/m~0n").unwrap();
//! assert_eq!(ptr.tokens, vec!["a/b", "m~n"]);
//!
//! // A non-empty pointer must begin with '/'.
//! assert_eq!(
//!     Pointer::try_parse("users"),
//!     Err(ParseError::InvalidFirstCharacter)
//! );
//! ```

mod error;
mod pointer;

pub use error::ParseError;
pub use pointer::Pointer;
