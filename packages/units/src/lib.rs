//! Bytetext Units: The Shared Text-Unit Identity
//!
//! This is the leaf of the bytetext stack. It declares, exactly once, which
//! primitive types count as text units - the element kinds a buffer of text
//! can be addressed through. Everything at this level is compile-time only:
//! a sealed marker trait with four implementations and no behavior.
//!
//! Use this crate for:
//! - Bounding generic code that reads memory through a different unit lens
//! - Sharing one unit-kind vocabulary between independent crates in a build
//!
//! Two components that each declare a private look-alike trait over the same
//! primitive types end up with two incompatible type identities - the classic
//! way a shared identity forks inside one process. Depending on this crate
//! instead gives every component the same declaration; Cargo unifies the
//! crate across all dependency paths, so reaching it through several routes
//! at once is the normal, conflict-free case.
//!
//! # Example
//!
//! ```rust
//! use bytetext_units::TextUnit;
//!
//! fn width_of<U: TextUnit>() -> u32 {
//!     U::UNIT_BITS
//! }
//!
//! assert_eq!(width_of::<u8>(), 8);
//! assert_eq!(width_of::<char>(), 32);
//! ```

mod unit;

pub use unit::TextUnit;
