//! The `Pointer` type and its parser.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseError;

/// A parsed pointer: a sequence of unescaped tokens addressing a location
/// in hierarchical structured data.
///
/// Tokens are arbitrary strings. Any token sequence is a valid pointer -
/// separators and escape characters inside a token are re-escaped when the
/// pointer is printed, so parsing and printing round-trip.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pointer {
    /// The unescaped tokens, in order. Empty for the root pointer.
    pub tokens: Vec<String>,
}

impl Pointer {
    /// The root pointer, addressing the whole document.
    ///
    /// Prints as the empty string.
    pub fn root() -> Self {
        Pointer { tokens: Vec::new() }
    }

    /// Parse a pointer string into its unescaped tokens.
    ///
    /// # Pointer Syntax
    ///
    /// - `""` is the root pointer
    /// - Every other pointer begins with `/`; each `/` starts a token
    /// - `~0` decodes to `~`, `~1` decodes to `/`
    /// - Empty tokens are preserved (`"/"` is one empty token)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytetext_pointer::Pointer;
    ///
    /// let ptr = Pointer::try_parse("/a/0").unwrap();
    /// assert_eq!(ptr.tokens, vec!["a", "0"]);
    ///
    /// // "~01" is an escaped '~' followed by a literal '1', never a '/'.
    /// let ptr = Pointer::try_parse("/~01").unwrap();
    /// assert_eq!(ptr.tokens, vec!["~1"]);
    /// ```
    pub fn try_parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Ok(Pointer::root());
        }

        if !s.starts_with('/') {
            return Err(ParseError::InvalidFirstCharacter);
        }

        let mut tokens = Vec::new();
        for raw in s[1..].split('/') {
            tokens.push(unescape(raw)?);
        }
        Ok(Pointer { tokens })
    }

    /// Parse a pointer string, panicking on malformed input.
    ///
    /// # Panics
    ///
    /// Panics with the parse error's message if the string is not a valid
    /// pointer. Use [`try_parse`](Self::try_parse) for fallible parsing.
    pub fn parse(s: &str) -> Self {
        match Self::try_parse(s) {
            Ok(pointer) => pointer,
            Err(e) => panic!("invalid pointer {:?}: {}", s, e),
        }
    }

    /// Create a pointer from already-unescaped tokens.
    ///
    /// Never fails: tokens are arbitrary strings, and printing re-escapes
    /// any separator or escape characters they contain.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Pointer { tokens }
    }

    /// Consume the pointer, returning its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Check if this pointer is empty (the root pointer).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Iterate over tokens.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.tokens.iter()
    }

    /// Test whether every token of `self` is a leading token of `other`.
    ///
    /// The root pointer is a prefix of every pointer, and every pointer is
    /// a prefix of itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytetext_pointer::Pointer;
    ///
    /// let base = Pointer::parse("/a");
    /// assert!(base.is_prefix_of(&Pointer::parse("/a/b")));
    /// assert!(!base.is_prefix_of(&Pointer::parse("/b/a")));
    /// ```
    pub fn is_prefix_of(&self, other: &Pointer) -> bool {
        self.tokens.len() <= other.tokens.len()
            && self.tokens == other.tokens[..self.tokens.len()]
    }
}

/// Decode one raw token, resolving `~0`/`~1` escapes.
fn unescape(raw: &str) -> Result<String, ParseError> {
    if !raw.contains('~') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(ParseError::InvalidEscapeSequence),
        }
    }
    Ok(out)
}

impl fmt::Display for Pointer {
    /// Prints the canonical pointer string, re-escaping `~` as `~0` and
    /// `/` as `~1` inside each token. The root pointer prints as `""`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_char('/')?;
            for c in token.chars() {
                match c {
                    '~' => f.write_str("~0")?,
                    '/' => f.write_str("~1")?,
                    c => f.write_char(c)?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::try_parse(s)
    }
}

impl std::ops::Index<usize> for Pointer {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.tokens[i]
    }
}

impl Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}", self))
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Pointer, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;

        Pointer::try_parse(&s).map_err(D::Error::custom)
    }
}

/// Macro for creating pointers from literals.
///
/// # Example
///
/// ```rust
/// use bytetext_pointer::{pointer, Pointer};
///
/// let p = pointer!("/users/0");
/// assert_eq!(p.len(), 2);
/// ```
///
/// # Panics
///
/// Panics on a malformed literal, like [`Pointer::parse`].
#[macro_export]
macro_rules! pointer {
    ($s:expr) => {
        $crate::Pointer::parse($s)
    };
}
