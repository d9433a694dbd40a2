//! The `TextUnit` marker trait and its four implementations.

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A primitive type usable as the element of a text buffer.
///
/// Implemented for exactly the four standard unit kinds:
///
/// | Type   | Width | Role                                     |
/// |--------|-------|------------------------------------------|
/// | `u8`   | 8     | UTF-8 code unit / raw byte               |
/// | `u16`  | 16    | UTF-16 code unit (wide-string interop)   |
/// | `u32`  | 32    | UTF-32 code unit                         |
/// | `char` | 32    | Unicode scalar, the native character     |
///
/// The trait is sealed and carries no methods. It exists to be the one
/// declaration of unit identity in a build: crates that need behavior over
/// the unit kinds define their own extension traits with a blanket impl over
/// `TextUnit`, and those definitions resolve against this shared identity
/// instead of against each other.
///
/// Note that `char` is the only unit kind with a validity invariant (it must
/// hold a Unicode scalar value). The trait makes no layout or validity
/// promises beyond what the language defines for each type; code that
/// reinterprets one unit kind as another carries those obligations itself.
pub trait TextUnit: sealed::Sealed + Copy + Send + Sync + 'static {
    /// Width of the unit in bits.
    const UNIT_BITS: u32;
}

impl TextUnit for u8 {
    const UNIT_BITS: u32 = 8;
}

impl TextUnit for u16 {
    const UNIT_BITS: u32 = 16;
}

impl TextUnit for u32 {
    const UNIT_BITS: u32 = 32;
}

impl TextUnit for char {
    const UNIT_BITS: u32 = 32;
}
