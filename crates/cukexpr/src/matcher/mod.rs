//! Matchers turning step text into typed arguments.
//!
//! Two variants share the [`Matcher`] capability: Cucumber Expressions,
//! compiled and fully anchored, and raw regular expressions, used as
//! written. [`StepMatcher`] is the tagged union callers store when both
//! styles coexist; choosing the variant is the caller's job.

mod cucumber;
mod groups;
mod regular;

use crate::argument::Argument;
use crate::errors::ExpressionError;
use crate::registry::TransformRegistry;
use std::sync::Arc;

pub use cucumber::CucumberExpressionMatcher;
pub use regular::RegularExpressionMatcher;

/// Something that can match step text and produce arguments.
pub trait Matcher {
    /// The expression or pattern text the matcher was built from.
    fn source(&self) -> &str;

    /// Match `text`, returning one argument per placeholder or capture group.
    ///
    /// `None` means the text does not match; it is not an error.
    fn match_text(&self, text: &str) -> Option<Vec<Argument>>;
}

/// Either matcher variant behind one type.
///
/// # Examples
/// ```
/// use cukexpr::{Matcher, StepMatcher, TransformRegistry, Value};
/// use std::sync::Arc;
///
/// let registry = Arc::new(TransformRegistry::new());
/// let matchers = [
///     StepMatcher::expression("I have {n:int} cukes", Arc::clone(&registry)),
///     StepMatcher::regular(r"^I have (\d+) cukes$", Arc::clone(&registry)),
/// ];
/// for matcher in matchers {
///     let matcher = matcher.unwrap_or_else(|e| panic!("valid matcher: {e}"));
///     let args = matcher
///         .match_text("I have 42 cukes")
///         .unwrap_or_else(|| panic!("{} should match", matcher.source()));
///     let value = args.first().and_then(|arg| arg.value().ok().flatten().cloned());
///     assert_eq!(value, Some(Value::Int(42)));
/// }
/// ```
#[derive(Debug, Clone)]
pub enum StepMatcher {
    /// A compiled Cucumber Expression.
    Expression(CucumberExpressionMatcher),
    /// A raw regular expression.
    Regular(RegularExpressionMatcher),
}

impl StepMatcher {
    /// Build the Cucumber Expression variant.
    ///
    /// # Errors
    /// See [`CucumberExpressionMatcher::new`].
    pub fn expression(
        expression: &str,
        registry: Arc<TransformRegistry>,
    ) -> Result<Self, ExpressionError> {
        CucumberExpressionMatcher::new(expression, registry).map(Self::Expression)
    }

    /// Build the raw regular-expression variant.
    ///
    /// # Errors
    /// See [`RegularExpressionMatcher::new`].
    pub fn regular(
        pattern: &str,
        registry: Arc<TransformRegistry>,
    ) -> Result<Self, ExpressionError> {
        RegularExpressionMatcher::new(pattern, registry).map(Self::Regular)
    }
}

impl Matcher for StepMatcher {
    fn source(&self) -> &str {
        match self {
            Self::Expression(matcher) => matcher.source(),
            Self::Regular(matcher) => matcher.source(),
        }
    }

    fn match_text(&self, text: &str) -> Option<Vec<Argument>> {
        match self {
            Self::Expression(matcher) => matcher.match_text(text),
            Self::Regular(matcher) => matcher.match_text(text),
        }
    }
}

impl From<CucumberExpressionMatcher> for StepMatcher {
    fn from(matcher: CucumberExpressionMatcher) -> Self {
        Self::Expression(matcher)
    }
}

impl From<RegularExpressionMatcher> for StepMatcher {
    fn from(matcher: RegularExpressionMatcher) -> Self {
        Self::Regular(matcher)
    }
}
