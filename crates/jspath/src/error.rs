use alloc::string::String;

use thiserror::Error;

/// Failure to read a path from its JS-style text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `[` was opened but its contents are neither an index nor a quoted
    /// key. Reported by both the strict and the partial parser.
    #[error("could not parse portion in square brackets at offset {offset}: {reason}")]
    Bracket {
        /// Byte offset of the opening `[`.
        offset: usize,
        /// What was wrong with the bracket contents.
        #[source]
        reason: BracketError,
    },
    /// The input starts with a valid path but has unrecognized content from
    /// `offset` on. Only the strict parser reports this.
    #[error("could not parse entire string: unrecognized input at offset {offset}")]
    Incomplete {
        /// Byte offset of the first unconsumed character.
        offset: usize,
    },
}

/// Why the contents of a `[...]` component were rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BracketError {
    /// The input ended before the closing `]`.
    #[error("unterminated bracket")]
    Unterminated,
    /// A character that cannot appear at this point of a bracket.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// An index that is not a decimal `i64`.
    #[error("invalid index {0:?}")]
    InvalidIndex(String),
    /// A backslash followed by something other than a JSON escape.
    #[error("invalid escape character {0:?}")]
    InvalidEscape(char),
    /// A `\u` escape with a non-hexadecimal digit.
    #[error("invalid unicode escape sequence at character {0:?}")]
    InvalidUnicodeEscapeChar(char),
    /// A `\u` escape naming a surrogate rather than a scalar value.
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscapeSequence(u32),
    /// A raw U+0000..U+001F character inside a quoted key.
    #[error("unescaped control character {0:?}")]
    ControlCharacter(char),
}

/// An index or range that does not fit inside the path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("range {start}..{end} out of bounds for path of length {len}")]
pub struct RangeError {
    /// Requested start, inclusive.
    pub start: usize,
    /// Requested end, exclusive.
    pub end: usize,
    /// Length of the path that was indexed.
    pub len: usize,
}

/// Failure to read a path from its canonical JSON form.
#[cfg(feature = "serde")]
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Well-formed JSON that is not an array of strings and integers.
    #[error("unexpected value: {0}")]
    Shape(serde_json::Error),
    /// Malformed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(serde_json::Error),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Self::Shape(err),
            _ => Self::Syntax(err),
        }
    }
}
