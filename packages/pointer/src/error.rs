//! Parse errors for structured pointers.

/// Ways a pointer string can fail to parse.
///
/// The taxonomy is deliberately small: a pointer is either missing its
/// leading separator or contains a bad escape. Everything else is a valid
/// pointer, including empty tokens, which address empty-string keys.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A non-empty pointer string did not begin with `/`.
    #[error("non-empty pointer must begin with '/'")]
    InvalidFirstCharacter,

    /// A `~` was not followed by `0` or `1`.
    #[error("invalid escape sequence: '~' must be followed by '0' or '1'")]
    InvalidEscapeSequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_works() {
        assert!(ParseError::InvalidFirstCharacter
            .to_string()
            .contains("begin with '/'"));
        assert!(ParseError::InvalidEscapeSequence
            .to_string()
            .contains("escape"));
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            ParseError::InvalidFirstCharacter,
            ParseError::InvalidFirstCharacter
        );
        assert_ne!(
            ParseError::InvalidFirstCharacter,
            ParseError::InvalidEscapeSequence
        );
    }
}
