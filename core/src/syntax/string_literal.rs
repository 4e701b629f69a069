//! String literal escaping and unescaping.
//!
//! This module converts between:
//! - Runtime strings (e.g., "hello\n" with an actual newline character)
//! - Source string literals (e.g., "hello\n" with a backslash-n sequence)
use core::fmt;
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur when unescaping string literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    /// Non-hex character inside a `\x`, `\u` or `\U` escape
    #[error("invalid hex digit in '{seq}' at position {pos}")]
    InvalidHexDigit { pos: usize, seq: String },
    /// Escape ended before all of its digits were read
    #[error("incomplete escape at position {pos}: expected {expected} digits, got {got}")]
    IncompleteEscape {
        pos: usize,
        expected: usize,
        got: usize,
    },
    /// Digits name a value that is not a Unicode scalar
    #[error("invalid Unicode scalar value U+{value:X} at position {pos}")]
    InvalidUnicodeScalar { pos: usize, value: u32 },
}

/// Escape a runtime string into a double-quoted source literal.
///
/// - `"` → `\"`
/// - `\` → `\\`
/// - `\n`, `\r`, `\t`, `\0` → their two-character escapes
/// - Other control characters → `\uNNNN`
pub fn escape_string(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Drop the first and last character of a literal (its quote delimiters).
///
/// Literals shorter than two characters yield the empty string.
pub fn strip_delimiters(literal: &str) -> &str {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Decode a quoted string literal as written in source into its runtime text.
pub fn decode_literal(literal: &str) -> Result<Cow<'_, str>, UnescapeError> {
    unescape_string(strip_delimiters(literal))
}

/// Unescape the body of a string literal (without surrounding quotes).
///
/// Supports:
/// - Common escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\'`, `\a`, `\b`, `\f`, `\v`
/// - Octal escapes of one to three digits: `\0`, `\12`, `\101`
/// - Hex and Unicode escapes: `\xHH`, `\uHHHH`, `\UHHHHHHHH`
/// - Line continuation: `\` followed by newline (both removed)
///
/// Any other escape is kept verbatim, backslash included. Input without a
/// backslash is returned as-is without allocating.
pub fn unescape_string(input: &str) -> Result<Cow<'_, str>, UnescapeError> {
    if !input.contains('\\') {
        return Ok(Cow::Borrowed(input));
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some((_, 'n')) => output.push('\n'),
            Some((_, 'r')) => output.push('\r'),
            Some((_, 't')) => output.push('\t'),
            Some((_, 'a')) => output.push('\x07'),
            Some((_, 'b')) => output.push('\x08'),
            Some((_, 'f')) => output.push('\x0c'),
            Some((_, 'v')) => output.push('\x0b'),
            Some((_, '\\')) => output.push('\\'),
            Some((_, '"')) => output.push('"'),
            Some((_, '\'')) => output.push('\''),
            Some((_, '\n')) => {}
            Some((_, first @ '0'..='7')) => {
                let mut value = first.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|(_, c)| c.to_digit(8)) {
                        Some(digit) => {
                            value = (value << 3) | digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                output.push(scalar(pos, value)?);
            }
            Some((_, kind @ ('x' | 'u' | 'U'))) => {
                let expected = match kind {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let value = read_hex(&mut chars, pos, kind, expected)?;
                output.push(scalar(pos, value)?);
            }
            Some((_, other)) => {
                output.push('\\');
                output.push(other);
            }
            None => output.push('\\'),
        }
    }

    Ok(Cow::Owned(output))
}

fn read_hex(
    chars: &mut core::iter::Peekable<core::str::CharIndices<'_>>,
    pos: usize,
    kind: char,
    expected: usize,
) -> Result<u32, UnescapeError> {
    let mut value = 0u32;
    for got in 0..expected {
        match chars.next() {
            Some((_, ch)) => match ch.to_digit(16) {
                Some(digit) => value = (value << 4) | digit,
                None => {
                    return Err(UnescapeError::InvalidHexDigit {
                        pos,
                        seq: format!("\\{}{}", kind, ch),
                    });
                }
            },
            None => {
                return Err(UnescapeError::IncompleteEscape { pos, expected, got });
            }
        }
    }
    Ok(value)
}

fn scalar(pos: usize, value: u32) -> Result<char, UnescapeError> {
    char::from_u32(value).ok_or(UnescapeError::InvalidUnicodeScalar { pos, value })
}
