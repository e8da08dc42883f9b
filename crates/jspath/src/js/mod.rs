//! JS-style text form of a path: `outputs[0].name`, `a["hello world"][10]`.
//!
//! Keys made only of ASCII letters, digits and `_` use dot notation (without
//! the dot when they come first). Every other key is quoted inside brackets,
//! and indices are written as bracketed decimals. Parsing also accepts other
//! spellings of the same components (`["foo"]`, `[007]`, `["\u0041"]`), which
//! render back in the form above.

mod escape;
mod scanner;

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

pub(crate) use escape::write_quoted;
use scanner::{Scanner, is_identifier};

use crate::{ParseError, Path, PathComponent};

/// Displays a [`Path`] in JS-style notation. Created by [`Path::js`].
#[derive(Clone, Copy)]
pub struct Js<'a>(&'a Path);

impl fmt::Display for Js<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            match component {
                PathComponent::Key(k) if is_identifier(k) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(k)?;
                }
                PathComponent::Key(k) => {
                    f.write_str("[")?;
                    write_quoted(f, k)?;
                    f.write_str("]")?;
                }
                PathComponent::Index(n) => write!(f, "[{n}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Js<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Path {
    /// Returns a `Display` adapter that writes the path in JS-style notation.
    #[must_use]
    pub fn js(&self) -> Js<'_> {
        Js(self)
    }

    /// Renders the path in JS-style notation, e.g. `foo[0].bar`.
    ///
    /// The result parses back to an identical path with [`Path::from_js`].
    /// The empty path renders as the empty string.
    #[must_use]
    pub fn to_js(&self) -> String {
        self.js().to_string()
    }

    /// Parses a JS-style path, requiring the whole input to be consumed.
    ///
    /// ```rust
    /// use jspath::{Path, path};
    ///
    /// assert_eq!(Path::from_js("foo[0].bar"), Ok(path!["foo", 0, "bar"]));
    /// assert!(Path::from_js("foo.").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Bracket`] for a malformed `[...]` component and
    /// [`ParseError::Incomplete`] if unrecognized input follows the path.
    pub fn from_js(s: &str) -> Result<Path, ParseError> {
        let (path, consumed) = Self::from_js_partial(s)?;
        if consumed != s.len() {
            return Err(ParseError::Incomplete { offset: consumed });
        }
        Ok(path)
    }

    /// Parses the longest JS-style path at the start of `s`.
    ///
    /// Returns the path and the byte offset of the first character that is
    /// not part of it. Unrecognized trailing input is not an error:
    ///
    /// ```rust
    /// use jspath::{Path, path};
    ///
    /// let (p, consumed) = Path::from_js_partial("foo[0].bar asdf").unwrap();
    /// assert_eq!(p, path!["foo", 0, "bar"]);
    /// assert_eq!(consumed, 10);
    /// ```
    ///
    /// A path never starts with `.`, so such input yields an empty path and
    /// an offset of 0.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Bracket`] when a `[` is followed by something
    /// other than a well-formed index or quoted key, since the bracket
    /// commits to a component.
    pub fn from_js_partial(s: &str) -> Result<(Path, usize), ParseError> {
        let mut path = Path::new();
        if s.starts_with('.') {
            trace!("path may not start with a dot");
            return Ok((path, 0));
        }

        let mut scanner = Scanner::new(s);
        loop {
            match scanner.next_component() {
                Ok(Some(component)) => path.push(component),
                Ok(None) => break,
                Err(err) => {
                    debug!(%err, "rejected bracketed component");
                    return Err(err);
                }
            }
        }

        let consumed = scanner.offset();
        if consumed < s.len() {
            trace!(offset = consumed, "stopped at unrecognized input");
        }
        Ok((path, consumed))
    }
}

/// Strict JS-style parsing, same as [`Path::from_js`].
impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_js(s)
    }
}
