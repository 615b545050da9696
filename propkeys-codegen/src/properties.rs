//! Reader for the `key=value` property-file format.
//!
//! Implements enough of the classic properties syntax to enumerate the
//! keys declared in a file: `#`/`!` comment lines, `=`/`:`/whitespace
//! key terminators, backslash escapes including `\uXXXX`, and backslash
//! line continuation. Values are scanned past but never kept.

use std::collections::BTreeSet;
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::CharIndices;

use crate::error::{Error, Result};

/// Read a property file and return its keys, deduplicated and sorted.
///
/// The file bytes are decoded as UTF-8 when valid and as ISO-8859-1
/// otherwise; both encodings are sanctioned by the format. A read
/// failure or a malformed escape sequence aborts the whole run.
pub fn read_keys(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| Error::read(path, source))?;
    let content = decode(bytes);
    parse_keys(&content)
        .map_err(|issue| Error::parse(path, &content, (issue.offset, issue.len), issue.message))
}

/// Valid UTF-8 is taken as-is; anything else falls back to a Latin-1
/// decode, which is total.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// A malformed escape sequence, located by byte offset into the
/// decoded content.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParseIssue {
    pub(crate) message: String,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl ParseIssue {
    fn new(message: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            len,
        }
    }
}

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Parse the keys declared in property-file content.
///
/// Returns the keys deduplicated and in ascending lexicographic order.
pub(crate) fn parse_keys(content: &str) -> std::result::Result<Vec<String>, ParseIssue> {
    let mut keys = BTreeSet::new();
    let mut chars = content.char_indices().peekable();

    // Each iteration starts at the first non-blank character of a line,
    // so the comment check only ever fires at a line start. parse_key
    // consumes through the end of its whole logical line.
    while let Some(&(_, c)) = chars.peek() {
        match c {
            ' ' | '\t' | '\x0c' | '\n' | '\r' => {
                chars.next();
            }
            '#' | '!' => skip_natural_line(&mut chars),
            _ => {
                keys.insert(parse_key(&mut chars)?);
            }
        }
    }
    Ok(keys.into_iter().collect())
}

/// Consume one key and the remainder of its logical line.
///
/// The key ends at the first unescaped `=`, `:`, space, tab, or form
/// feed, or at the end of the logical line.
fn parse_key(chars: &mut Chars<'_>) -> std::result::Result<String, ParseIssue> {
    let mut key = String::new();
    while let Some((pos, c)) = chars.next() {
        match c {
            '\n' => return Ok(key),
            '\r' => {
                eat_lf(chars);
                return Ok(key);
            }
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                skip_logical_remainder(chars);
                return Ok(key);
            }
            '\\' => match chars.next() {
                // A trailing backslash at end of input is dropped.
                None => return Ok(key),
                Some((_, '\n')) => skip_continuation_whitespace(chars),
                Some((_, '\r')) => {
                    eat_lf(chars);
                    skip_continuation_whitespace(chars);
                }
                Some((_, 't')) => key.push('\t'),
                Some((_, 'n')) => key.push('\n'),
                Some((_, 'r')) => key.push('\r'),
                Some((_, 'f')) => key.push('\x0c'),
                Some((_, 'u')) => key.push(unicode_escape(chars, pos)?),
                Some((_, other)) => key.push(other),
            },
            other => key.push(other),
        }
    }
    Ok(key)
}

/// Decode a `\uXXXX` escape whose `\u` has already been consumed,
/// combining UTF-16 surrogate pairs spelled as two adjacent escapes.
fn unicode_escape(chars: &mut Chars<'_>, start: usize) -> std::result::Result<char, ParseIssue> {
    let mut len = 2;
    let hi = hex4(chars, start, &mut len)?;
    if (0xDC00..=0xDFFF).contains(&hi) {
        return Err(ParseIssue::new("unpaired UTF-16 low surrogate", start, len));
    }
    if (0xD800..=0xDBFF).contains(&hi) {
        if !(eat(chars, '\\', &mut len) && eat(chars, 'u', &mut len)) {
            return Err(ParseIssue::new(
                "unpaired UTF-16 high surrogate",
                start,
                len,
            ));
        }
        let lo = hex4(chars, start, &mut len)?;
        if !(0xDC00..=0xDFFF).contains(&lo) {
            return Err(ParseIssue::new(
                "expected a UTF-16 low surrogate after a high surrogate",
                start,
                len,
            ));
        }
        let value = 0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00);
        return char::from_u32(value)
            .ok_or_else(|| ParseIssue::new("invalid UTF-16 surrogate pair", start, len));
    }
    char::from_u32(hi).ok_or_else(|| ParseIssue::new("malformed \\uXXXX escape", start, len))
}

/// Consume exactly four hex digits.
fn hex4(
    chars: &mut Chars<'_>,
    start: usize,
    len: &mut usize,
) -> std::result::Result<u32, ParseIssue> {
    let mut value = 0;
    for _ in 0..4 {
        match chars.peek() {
            Some(&(_, c)) if c.is_ascii_hexdigit() => {
                chars.next();
                *len += 1;
                value = value * 16 + c.to_digit(16).unwrap_or(0);
            }
            _ => {
                return Err(ParseIssue::new("malformed \\uXXXX escape", start, *len));
            }
        }
    }
    Ok(value)
}

/// Consume the expected character, reporting whether it was present.
fn eat(chars: &mut Chars<'_>, expected: char, len: &mut usize) -> bool {
    match chars.peek() {
        Some(&(_, c)) if c == expected => {
            chars.next();
            *len += c.len_utf8();
            true
        }
        _ => false,
    }
}

/// Consume the rest of a logical line, honoring `\` continuation.
fn skip_logical_remainder(chars: &mut Chars<'_>) {
    while let Some((_, c)) = chars.next() {
        match c {
            '\n' => return,
            '\r' => {
                eat_lf(chars);
                return;
            }
            '\\' => match chars.next() {
                None => return,
                Some((_, '\n')) => skip_continuation_whitespace(chars),
                Some((_, '\r')) => {
                    eat_lf(chars);
                    skip_continuation_whitespace(chars);
                }
                Some(_) => {}
            },
            _ => {}
        }
    }
}

/// Consume the rest of a natural line. Comment lines use this directly
/// since they are never continued.
fn skip_natural_line(chars: &mut Chars<'_>) {
    while let Some((_, c)) = chars.next() {
        match c {
            '\n' => return,
            '\r' => {
                eat_lf(chars);
                return;
            }
            _ => {}
        }
    }
}

/// Consume the `\n` half of a `\r\n` pair, if present.
fn eat_lf(chars: &mut Chars<'_>) {
    if let Some(&(_, '\n')) = chars.peek() {
        chars.next();
    }
}

/// Consume leading blanks of a continuation line.
fn skip_continuation_whitespace(chars: &mut Chars<'_>) {
    while let Some(&(_, ' ' | '\t' | '\x0c')) = chars.peek() {
        chars.next();
    }
}
