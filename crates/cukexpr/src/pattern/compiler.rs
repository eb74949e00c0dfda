//! Convert lexed tokens into anchored regular-expression sources.

use crate::errors::{ExpressionError, syntax_error};
use crate::registry::TransformRegistry;
use crate::transform::ANY_PATTERN;

use super::lexer::{Token, lex_expression};

/// A `{name}` or `{name:type}` placeholder and the capture group it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSlot {
    /// Identifier written inside the braces.
    pub name: String,
    /// Explicit type hint following `:`, if any.
    pub type_name: Option<String>,
    /// Zero-based declaration order; capture group `position + 1` holds it.
    pub position: usize,
    /// Whether the placeholder sits inside an optional group.
    pub optional: bool,
}

/// Regex source produced from an expression, with its placeholder metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionSource {
    /// Anchored regular-expression source.
    pub regex: String,
    /// Placeholders in declaration order.
    pub slots: Vec<PlaceholderSlot>,
}

/// Build an anchored regular expression from Cucumber Expression text.
///
/// Literal text is escaped, `(text)` becomes `(?:text)?`, and each
/// placeholder becomes a capture group whose content is the hinted
/// transform's fragment or `.+?` when no hint is given.
///
/// # Errors
/// - [`ExpressionError::Malformed`] for stray or unbalanced braces and
///   parentheses, empty or nested optional groups, and invalid placeholders.
/// - [`ExpressionError::UnknownType`] when a hint names no registered
///   transform.
///
/// # Examples
/// ```
/// use cukexpr::{TransformRegistry, build_regex_from_expression};
///
/// let registry = TransformRegistry::new();
/// let source = build_regex_from_expression("I have {n:int} cuke(s)", &registry)
///     .unwrap_or_else(|e| panic!("expression should compile: {e}"));
/// assert_eq!(source.regex, r"^I have (-?[0-9]+) cuke(?:s)?$");
/// assert_eq!(source.slots.len(), 1);
/// ```
pub fn build_regex_from_expression(
    expression: &str,
    registry: &TransformRegistry,
) -> Result<ExpressionSource, ExpressionError> {
    let tokens = lex_expression(expression)?;
    let mut regex = String::with_capacity(expression.len().saturating_mul(2) + 2);
    let mut slots = Vec::new();
    regex.push('^');
    // (index of the opening parenthesis, regex length after `(?:`)
    let mut open_group: Option<(usize, usize)> = None;

    for token in tokens {
        match token {
            Token::Literal(text) => regex.push_str(&regex::escape(&text)),
            Token::Placeholder { start, name, hint } => {
                let fragment = match hint.as_deref() {
                    Some(type_name) => registry
                        .resolve_by_type(type_name)
                        .map_err(|_| ExpressionError::UnknownType {
                            type_name: type_name.to_string(),
                            placeholder: Some(name.clone()),
                            position: start,
                        })?
                        .regex_fragment(),
                    None => ANY_PATTERN.to_string(),
                };
                regex.push('(');
                regex.push_str(&fragment);
                regex.push(')');
                slots.push(PlaceholderSlot {
                    name,
                    type_name: hint,
                    position: slots.len(),
                    optional: open_group.is_some(),
                });
            }
            Token::OptionalStart { index } => {
                if open_group.is_some() {
                    return Err(syntax_error(
                        "nested optional groups are not supported",
                        index,
                        None,
                    ));
                }
                regex.push_str("(?:");
                open_group = Some((index, regex.len()));
            }
            Token::OptionalEnd { index } => {
                let Some((_, body_start)) = open_group.take() else {
                    return Err(syntax_error(
                        "unmatched closing parenthesis ')' in expression",
                        index,
                        None,
                    ));
                };
                if regex.len() == body_start {
                    return Err(syntax_error("empty optional group in expression", index, None));
                }
                regex.push_str(")?");
            }
        }
    }

    if let Some((index, _)) = open_group {
        return Err(syntax_error(
            "missing closing ')' for optional group",
            index,
            None,
        ));
    }

    regex.push('$');
    Ok(ExpressionSource { regex, slots })
}
