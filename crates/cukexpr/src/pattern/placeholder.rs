//! Placeholder parsing utilities used by the lexer.

use crate::errors::{ExpressionError, syntax_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceholderSpec {
    pub name: String,
    pub hint: Option<String>,
    pub start: usize,
    pub end: usize,
}

const fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Read an identifier starting at `index`, returning it and the next index.
fn take_identifier(bytes: &[u8], mut index: usize) -> (String, usize) {
    let mut ident = String::new();
    while let Some(&b) = bytes.get(index) {
        if !is_identifier_byte(b) {
            break;
        }
        ident.push(char::from(b));
        index += 1;
    }
    (ident, index)
}

/// Parse `{name}` or `{name:type}` beginning at the `{` found at `start`.
///
/// Identifiers are ASCII, so byte-wise scanning stays on char boundaries: the
/// returned `end` always follows the closing `}`.
pub(crate) fn parse_placeholder(
    bytes: &[u8],
    start: usize,
) -> Result<PlaceholderSpec, ExpressionError> {
    let (name, mut index) = take_identifier(bytes, start + 1);
    if name.is_empty() {
        return Err(match bytes.get(index) {
            None => syntax_error("missing closing '}' for placeholder", start, None),
            Some(b'}') => syntax_error("empty placeholder name in expression", start, None),
            Some(_) => syntax_error("invalid placeholder in expression", start, None),
        });
    }

    let mut hint = None;
    if bytes.get(index) == Some(&b':') {
        let (raw, next) = take_identifier(bytes, index + 1);
        if raw.is_empty() {
            return Err(syntax_error(
                "invalid type hint in expression",
                start,
                Some(name),
            ));
        }
        hint = Some(raw);
        index = next;
    }

    match bytes.get(index) {
        Some(b'}') => {}
        None => {
            return Err(syntax_error(
                "missing closing '}' for placeholder",
                start,
                Some(name),
            ));
        }
        Some(_) => {
            return Err(syntax_error(
                "invalid placeholder in expression",
                start,
                Some(name),
            ));
        }
    }
    index += 1;

    Ok(PlaceholderSpec {
        name,
        hint,
        start,
        end: index,
    })
}
