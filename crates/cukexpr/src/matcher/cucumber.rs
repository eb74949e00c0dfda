//! Matching text against compiled Cucumber Expressions.

use crate::argument::Argument;
use crate::capture::extract_captures;
use crate::errors::ExpressionError;
use crate::pattern::{PlaceholderSlot, compile_expression};
use crate::registry::TransformRegistry;
use crate::transform::Transform;
use regex::Regex;
use std::sync::Arc;

use super::Matcher;

/// Matcher built from Cucumber Expression text.
///
/// Compilation and transform resolution happen once, in [`new`](Self::new);
/// the matcher is immutable afterwards and can be shared across threads.
#[derive(Debug, Clone)]
pub struct CucumberExpressionMatcher {
    expression: String,
    regex: Regex,
    slots: Vec<PlaceholderSlot>,
    transforms: Vec<Arc<Transform>>,
    registry: Arc<TransformRegistry>,
}

impl CucumberExpressionMatcher {
    /// Compile `expression` against `registry`.
    ///
    /// Typed placeholders resolve by exact type name; untyped ones resolve by
    /// argument name and fall back to the identity transform.
    ///
    /// # Errors
    /// Returns [`ExpressionError::Malformed`], [`ExpressionError::UnknownType`]
    /// or [`ExpressionError::InvalidPattern`] as described on
    /// [`build_regex_from_expression`](crate::build_regex_from_expression).
    pub fn new(
        expression: impl Into<String>,
        registry: Arc<TransformRegistry>,
    ) -> Result<Self, ExpressionError> {
        let expression = expression.into();
        let (regex, slots) = compile_expression(&expression, &registry)?;
        let transforms = slots
            .iter()
            .map(|slot| resolve_slot(&registry, slot))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            expression,
            regex,
            slots,
            transforms,
            registry,
        })
    }

    /// Placeholder metadata in declaration order.
    #[must_use]
    pub fn slots(&self) -> &[PlaceholderSlot] {
        &self.slots
    }

    /// The compiled, fully anchored regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Registry the matcher was compiled against.
    #[must_use]
    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }
}

fn resolve_slot(
    registry: &TransformRegistry,
    slot: &PlaceholderSlot,
) -> Result<Arc<Transform>, ExpressionError> {
    match slot.type_name.as_deref() {
        Some(type_name) => registry.resolve_by_type(type_name),
        None => Ok(registry.resolve_by_argument_name(&slot.name)),
    }
}

impl Matcher for CucumberExpressionMatcher {
    fn source(&self) -> &str {
        &self.expression
    }

    fn match_text(&self, text: &str) -> Option<Vec<Argument>> {
        let captures = extract_captures(&self.regex, text)?;
        Some(
            self.slots
                .iter()
                .zip(&self.transforms)
                .zip(captures)
                .map(|((slot, transform), raw)| {
                    Argument::new(slot.name.clone(), slot.position, raw, Arc::clone(transform))
                })
                .collect(),
        )
    }
}
