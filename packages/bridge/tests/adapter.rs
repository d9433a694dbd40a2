#![cfg(feature = "structured")]

//! End-to-end flow over `bytes`-backed buffers: the byte-oriented world
//! produces the data, the adapters view and parse it without copying.

use bytes::Bytes;

use bytetext::{pointer, view, Error, ParseError, Pointer};

#[test]
fn test_parse_pointer_from_shared_buffer() {
    let buf = Bytes::from_static(b"/users/0/name");

    let ptr = pointer::try_parse(&buf[..]).unwrap();
    assert_eq!(ptr.tokens, vec!["users", "0", "name"]);

    // The buffer is untouched and still fully usable afterwards.
    assert_eq!(&buf[..], b"/users/0/name");
}

#[test]
fn test_parse_from_buffer_slice() {
    // A pointer embedded in a larger transport buffer; slicing shares the
    // allocation, and parsing borrows the slice.
    let transport = Bytes::from_static(b"HEADER/a/0TRAILER");
    let body = transport.slice(6..10);

    let ptr = pointer::try_parse(&body[..]).unwrap();
    assert_eq!(ptr.tokens, vec!["a", "0"]);
}

#[test]
fn test_view_is_zero_copy_over_shared_buffer() {
    let buf = Bytes::from_static(b"the quick brown fox");

    let text = view::utf8(&buf[..]).unwrap();
    assert_eq!(text.len(), buf.len());
    assert_eq!(text.as_ptr(), buf.as_ptr());

    // A second clone of the handle still views the same memory.
    let other = buf.clone();
    let text_again = view::utf8(&other[..]).unwrap();
    assert_eq!(text_again.as_ptr(), text.as_ptr());
}

#[test]
fn test_pointer_vectors_from_bytes() {
    let cases: &[(&[u8], &[&str])] = &[
        (b"", &[]),
        (b"/", &[""]),
        (b"/a/0", &["a", "0"]),
        (b"/a/", &["a", ""]),
        (b"/a~1b/m~0n", &["a/b", "m~n"]),
        (b"/~01", &["~1"]),
        ("/名前".as_bytes(), &["名前"]),
    ];

    for &(input, expected) in cases {
        let buf = Bytes::copy_from_slice(input);
        let ptr = pointer::try_parse(&buf[..]).unwrap();
        assert_eq!(ptr.tokens, expected, "input: {:?}", input);
    }
}

#[test]
fn test_error_vectors_from_bytes() {
    let cases: &[(&[u8], ParseError)] = &[
        (b"x", ParseError::InvalidFirstCharacter),
        (b"a/b", ParseError::InvalidFirstCharacter),
        (b"/~", ParseError::InvalidEscapeSequence),
        (b"/~2", ParseError::InvalidEscapeSequence),
    ];

    for &(input, expected) in cases {
        let buf = Bytes::copy_from_slice(input);

        // These buffers are ASCII, so the unchecked contract holds.
        let err = unsafe { pointer::try_parse_unchecked(&buf[..]) }.unwrap_err();
        assert_eq!(err, expected, "input: {:?}", input);

        // The checked form wraps the same parser error.
        let wrapped = pointer::try_parse(&buf[..]).unwrap_err();
        assert_eq!(wrapped, Error::Pointer(expected), "input: {:?}", input);
    }
}

#[test]
fn test_checked_adapter_rejects_non_text_buffer() {
    let buf = Bytes::from_static(&[0x2f, 0x80, 0x80]);
    let err = pointer::try_parse(&buf[..]).unwrap_err();
    assert!(matches!(err, Error::Encoding(_)));
}

#[test]
fn test_parsed_pointer_outlives_the_buffer() {
    let ptr = {
        let buf = Bytes::copy_from_slice(b"/sessions/42");
        pointer::parse(&buf[..])
    };
    // The pointer owns its tokens; dropping the buffer does not affect it.
    assert_eq!(ptr.tokens, vec!["sessions", "42"]);
}

#[test]
fn test_display_round_trips_through_bytes() {
    let buf = Bytes::from_static(b"/a~1b/m~0n/0");
    let ptr = pointer::try_parse(&buf[..]).unwrap();

    let printed = ptr.to_string();
    assert_eq!(printed.as_bytes(), &buf[..]);

    let reparsed = pointer::try_parse(printed.as_bytes()).unwrap();
    assert_eq!(reparsed, ptr);
}

#[test]
fn test_prefix_checks_across_buffers() {
    let base = pointer::parse(&Bytes::from_static(b"/users")[..]);
    let full = pointer::parse(&Bytes::from_static(b"/users/0/name")[..]);

    assert!(base.is_prefix_of(&full));
    assert!(!full.is_prefix_of(&base));
    assert!(Pointer::root().is_prefix_of(&base));
}
