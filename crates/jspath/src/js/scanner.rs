//! Scanner: splits JS-style path text into components, left to right.
//!
//! Four token shapes exist, tried at the current offset:
//!
//! 1. a bare identifier (`[A-Za-z0-9_]+`), only at offset 0;
//! 2. `.` followed by an identifier;
//! 3. `[` index `]`;
//! 4. `[` quoted key `]`.
//!
//! The scanner distinguishes two ways of not producing a component:
//!
//! - *stop*: nothing that starts a token is at the current offset (a stray
//!   `.`, a `]`, whitespace, an identifier after a bracket, ...). The caller
//!   keeps what it has and reports the offset.
//! - *error*: a `[` was seen, which commits to a bracketed component, but the
//!   contents are neither an index nor a quoted key.

use alloc::string::ToString;

use super::escape::{char_at, unquote};
use crate::{BracketError, Index, ParseError, PathComponent};

/// `true` for the ASCII word characters allowed in dot notation.
#[inline]
pub(crate) fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `true` if `key` can be written in dot notation.
pub(crate) fn is_identifier(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(is_word)
}

pub(crate) struct Scanner<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the first unconsumed character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Scans the component at the current offset.
    ///
    /// Returns `Ok(None)` and leaves the offset unchanged when no token starts
    /// here, including at the end of input.
    pub fn next_component(&mut self) -> Result<Option<PathComponent>, ParseError> {
        let bytes = self.src.as_bytes();
        match bytes.get(self.pos) {
            None => Ok(None),
            Some(b'.') => {
                let start = self.pos + 1;
                let end = self.word_end(start);
                if end == start {
                    return Ok(None);
                }
                self.pos = end;
                Ok(Some(PathComponent::Key(self.src[start..end].into())))
            }
            Some(b'[') => {
                let open = self.pos;
                let (component, end) = self
                    .bracket(open)
                    .map_err(|reason| ParseError::Bracket {
                        offset: open,
                        reason,
                    })?;
                self.pos = end;
                Ok(Some(component))
            }
            Some(&b) if self.pos == 0 && is_word(b) => {
                let end = self.word_end(0);
                self.pos = end;
                Ok(Some(PathComponent::Key(self.src[..end].into())))
            }
            Some(_) => Ok(None),
        }
    }

    fn word_end(&self, from: usize) -> usize {
        let bytes = self.src.as_bytes();
        let mut end = from;
        while end < bytes.len() && is_word(bytes[end]) {
            end += 1;
        }
        end
    }

    /// Scans `[...]` starting at `open`; returns the component and the offset
    /// just past the `]`.
    fn bracket(&self, open: usize) -> Result<(PathComponent, usize), BracketError> {
        let bytes = self.src.as_bytes();
        let inner = open + 1;
        let (component, close) = match bytes.get(inner) {
            None => return Err(BracketError::Unterminated),
            Some(b'"') => {
                let (key, close) = unquote(self.src, inner)?;
                (PathComponent::Key(key.into()), close)
            }
            Some(b'-' | b'0'..=b'9') => {
                let digits = if bytes[inner] == b'-' { inner + 1 } else { inner };
                let close = self.digits_end(digits);
                (PathComponent::Index(parse_index(&self.src[inner..close])?), close)
            }
            Some(_) => return Err(BracketError::UnexpectedChar(char_at(self.src, inner))),
        };

        match bytes.get(close) {
            Some(b']') => Ok((component, close + 1)),
            Some(_) => Err(BracketError::UnexpectedChar(char_at(self.src, close))),
            None => Err(BracketError::Unterminated),
        }
    }

    fn digits_end(&self, from: usize) -> usize {
        let bytes = self.src.as_bytes();
        let mut end = from;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        end
    }
}

/// Parses an optionally negative run of decimal digits.
fn parse_index(text: &str) -> Result<Index, BracketError> {
    text.parse()
        .map_err(|_| BracketError::InvalidIndex(text.to_string()))
}
