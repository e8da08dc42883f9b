//! Quoting and unquoting of bracketed keys.
//!
//! Keys are quoted exactly like JSON string literals: `"` and `\` get a
//! backslash, U+0000..U+001F use the short escapes `\b \t \n \f \r` or
//! `\u00xx` (lowercase hex), and every other character is written as is.
//! This is the same spelling the canonical JSON encoding produces.
//!
//! [`unquote`] accepts every JSON escape, including ones [`write_quoted`]
//! never writes (`\/`, `\u0041`, uppercase hex).

use alloc::string::String;
use core::fmt;

use bstr::ByteSlice;

use crate::BracketError;

/// Bytes that end a run of literal characters inside a quoted key.
const SPECIAL: &[u8] = b"\"\\\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0a\x0b\x0c\x0d\x0e\x0f\x10\x11\x12\x13\x14\x15\x16\x17\x18\x19\x1a\x1b\x1c\x1d\x1e\x1f";

const HEX: &[u8; 16] = b"0123456789abcdef";

fn short_escape(b: u8) -> Option<&'static str> {
    Some(match b {
        b'"' => "\\\"",
        b'\\' => "\\\\",
        0x08 => "\\b",
        0x0c => "\\f",
        b'\n' => "\\n",
        b'\r' => "\\r",
        b'\t' => "\\t",
        _ => return None,
    })
}

/// Writes `s` as a double-quoted, escaped literal.
pub(crate) fn write_quoted<W: fmt::Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let bytes = s.as_bytes();
    let mut start = 0;
    while let Some(n) = bytes[start..].find_byteset(SPECIAL) {
        let at = start + n;
        // Every special byte is ASCII, so `at` is a char boundary.
        out.write_str(&s[start..at])?;
        let b = bytes[at];
        match short_escape(b) {
            Some(esc) => out.write_str(esc)?,
            None => {
                out.write_str("\\u00")?;
                out.write_char(char::from(HEX[usize::from(b >> 4)]))?;
                out.write_char(char::from(HEX[usize::from(b & 0xf)]))?;
            }
        }
        start = at + 1;
    }
    out.write_str(&s[start..])?;
    out.write_char('"')
}

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'f' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

/// Decodes the four hex digits of a `\u` escape starting at `src[at..]`.
fn unicode_escape(src: &str, at: usize) -> Result<char, BracketError> {
    let mut acc = 0u32;
    for i in at..at + 4 {
        let Some(&b) = src.as_bytes().get(i) else {
            return Err(BracketError::Unterminated);
        };
        let d = hex_val(b).ok_or_else(|| BracketError::InvalidUnicodeEscapeChar(char_at(src, i)))?;
        acc = (acc << 4) | d;
    }
    char::from_u32(acc).ok_or(BracketError::InvalidUnicodeEscapeSequence(acc))
}

/// Returns the char starting at byte `at`, which must be a char boundary.
pub(crate) fn char_at(src: &str, at: usize) -> char {
    src[at..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Reads the quoted literal whose opening `"` is at byte `open` of `src`.
///
/// Returns the unescaped text and the offset just past the closing `"`.
pub(crate) fn unquote(src: &str, open: usize) -> Result<(String, usize), BracketError> {
    let bytes = src.as_bytes();
    let mut out = String::new();
    let mut pos = open + 1;

    let close = loop {
        let n = bytes[pos..]
            .find_byteset(SPECIAL)
            .ok_or(BracketError::Unterminated)?;
        out.push_str(&src[pos..pos + n]);
        pos += n;

        match bytes[pos] {
            b'"' => break pos + 1,
            b'\\' => {
                let Some(&esc) = bytes.get(pos + 1) else {
                    return Err(BracketError::Unterminated);
                };
                let ch = match esc {
                    b'"' => '"',
                    b'\\' => '\\',
                    b'/' => '/',
                    b'b' => '\u{8}',
                    b'f' => '\u{c}',
                    b'n' => '\n',
                    b'r' => '\r',
                    b't' => '\t',
                    b'u' => unicode_escape(src, pos + 2)?,
                    _ => return Err(BracketError::InvalidEscape(char_at(src, pos + 1))),
                };
                out.push(ch);
                pos += if esc == b'u' { 6 } else { 2 };
            }
            b => return Err(BracketError::ControlCharacter(char::from(b))),
        }
    };
    Ok((out, close))
}
