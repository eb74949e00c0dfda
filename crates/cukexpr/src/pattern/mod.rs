//! Cucumber Expression lexing and compilation helpers.

mod compiler;
mod lexer;
mod placeholder;
#[cfg(test)]
pub(crate) mod test_support;

use crate::config::build_regex;
use crate::errors::ExpressionError;
use crate::registry::TransformRegistry;
use regex::Regex;

pub use compiler::{ExpressionSource, PlaceholderSlot, build_regex_from_expression};

/// Build and compile a regular expression from Cucumber Expression text.
///
/// # Errors
/// Returns [`ExpressionError`] when the expression is malformed, names an
/// unknown type, or the generated regex source cannot be compiled.
pub fn compile_expression(
    expression: &str,
    registry: &TransformRegistry,
) -> Result<(Regex, Vec<PlaceholderSlot>), ExpressionError> {
    let ExpressionSource { regex, slots } = build_regex_from_expression(expression, registry)?;
    log::debug!("compiled expression {expression:?} into {regex:?}");
    let compiled = build_regex(&regex)?;
    Ok((compiled, slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Display;

    fn expect_ok<T, E: Display>(result: Result<T, E>, context: &str) -> T {
        match result {
            Ok(value) => value,
            Err(err) => panic!("{context}: {err}"),
        }
    }

    fn expect_err<T, E: Display>(result: Result<T, E>, context: &str) -> E {
        match result {
            Ok(_) => panic!("{context}: expected error"),
            Err(err) => err,
        }
    }

    #[test]
    fn compiles_literal_expressions() {
        let registry = TransformRegistry::new();
        let (regex, slots) = expect_ok(
            compile_expression("Given a step", &registry),
            "expression should compile",
        );
        assert_eq!(regex.as_str(), "^Given a step$");
        assert!(slots.is_empty());
    }

    #[test]
    fn compiled_regex_is_anchored() {
        let registry = TransformRegistry::new();
        let (regex, _) = expect_ok(
            compile_expression("Given {value}", &registry),
            "expression should compile",
        );
        assert_eq!(regex.as_str(), "^Given (.+?)$");
        assert!(regex.is_match("Given x"));
        assert!(!regex.is_match("And Given x"));
    }

    #[test]
    fn errors_on_unbalanced_braces() {
        let registry = TransformRegistry::new();
        let err = expect_err(
            compile_expression("broken {", &registry),
            "expression should fail",
        );
        assert!(err.to_string().contains("missing closing '}'"));
    }

    #[test]
    fn surfaces_regex_compilation_errors() {
        let registry = TransformRegistry::new();
        let heavy = format!("prefix {}", "{value:float}".repeat(20_000));
        let err = expect_err(
            compile_expression(&heavy, &registry),
            "expression should be too large",
        );
        assert!(matches!(
            err,
            ExpressionError::InvalidPattern(regex::Error::CompiledTooBig(_))
        ));
    }
}
