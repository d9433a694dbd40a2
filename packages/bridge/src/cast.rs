//! The reinterpretation boundary.
//!
//! Every place this workspace views memory through a different element-type
//! lens lives here. Nothing in this module transforms, validates, copies, or
//! bounds-checks anything; each function states the layout facts it enforces
//! and the value obligations it leaves with the caller.

use std::mem::{align_of, size_of};

use bytetext_units::TextUnit;

/// Reinterpret a slice of one text unit kind as another.
///
/// Both unit kinds must have identical size and alignment. This is checked
/// at compile time, so a width-mismatched instantiation fails to build:
///
/// ```compile_fail
/// let bytes: &[u8] = &[0x41, 0x42];
/// let wide: &[u16] = unsafe { bytetext::cast::slice(bytes) };
/// ```
///
/// The element count is preserved verbatim; `src.len() == dst.len()` always.
///
/// # Safety
///
/// Every `Src` bit pattern in the slice must be a valid `Dst` value. The
/// width gate makes the layouts interchangeable, not the values: `u32` to
/// [`char`] requires every element to be a Unicode scalar value, while
/// [`char`] to `u32` holds for any input.
pub const unsafe fn slice<Src, Dst>(src: &[Src]) -> &[Dst]
where
    Src: TextUnit,
    Dst: TextUnit,
{
    const {
        assert!(size_of::<Src>() == size_of::<Dst>());
        assert!(align_of::<Src>() == align_of::<Dst>());
    }

    // SAFETY: same element size and alignment (checked above), same length,
    // and the caller guarantees every bit pattern is a valid `Dst`.
    unsafe { std::slice::from_raw_parts(src.as_ptr().cast::<Dst>(), src.len()) }
}

/// Reinterpret a byte slice as a `str` view over the same memory.
///
/// The byte-to-character lens. Unlike [`slice`], the target type carries an
/// encoding invariant on top of its layout, which is why this is a separate
/// entry point rather than an instantiation of the generic one.
///
/// # Safety
///
/// `bytes` must be valid UTF-8.
pub const unsafe fn utf8(bytes: &[u8]) -> &str {
    // SAFETY: caller guarantees valid UTF-8; layout of `str` is exactly the
    // layout of `[u8]`.
    unsafe { std::str::from_utf8_unchecked(bytes) }
}
