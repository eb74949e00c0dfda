//! Error types shared by the expression compiler, registry and matchers.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Boxed error returned by transform conversion functions.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Additional context for syntax errors in Cucumber Expression text.
///
/// # Examples
/// ```
/// use cukexpr::SyntaxErrorInfo;
/// let info = SyntaxErrorInfo::new("invalid placeholder", 3, Some("value".into()));
/// assert_eq!(info.placeholder.as_deref(), Some("value"));
/// assert_eq!(info.position, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Human-readable reason for the failure.
    pub message: &'static str,
    /// Zero-based byte offset in the expression where parsing failed.
    pub position: usize,
    /// Name of the placeholder, when known.
    pub placeholder: Option<String>,
}

impl SyntaxErrorInfo {
    /// Create a new error description for a syntax failure.
    ///
    /// # Examples
    /// ```
    /// use cukexpr::SyntaxErrorInfo;
    /// let info = SyntaxErrorInfo::new("invalid", 1, None);
    /// assert_eq!(info.message, "invalid");
    /// ```
    #[must_use]
    pub fn new(message: &'static str, position: usize, placeholder: Option<String>) -> Self {
        Self {
            message,
            position,
            placeholder,
        }
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.placeholder {
            Some(name) => write!(
                f,
                "{} for placeholder `{}` at byte {} (zero-based)",
                self.message, name, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

/// Errors surfaced while compiling expressions, building matchers or
/// defining transforms.
///
/// # Examples
/// ```
/// use cukexpr::{ExpressionError, SyntaxErrorInfo};
/// let info = SyntaxErrorInfo::new("invalid", 2, Some("count".into()));
/// let err = ExpressionError::Malformed(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExpressionError {
    /// Unbalanced or unescaped metacharacters, or an invalid placeholder.
    #[error("{0}")]
    Malformed(SyntaxErrorInfo),
    /// A `{name:type}` hint names a type absent from the registry.
    #[error(
        "unknown parameter type `{type_name}`{}",
        describe_site(.placeholder.as_deref(), .position)
    )]
    UnknownType {
        /// The unresolved type name.
        type_name: String,
        /// Placeholder carrying the hint, when resolved during compilation.
        placeholder: Option<String>,
        /// Zero-based byte offset of the placeholder.
        position: usize,
    },
    /// The raw or generated pattern is not valid regex syntax.
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
    /// A transform definition cannot be used for matching.
    #[error("invalid transform `{transform}`: {reason}")]
    InvalidTransform {
        /// First name of the offending transform, or `<unnamed>`.
        transform: String,
        /// Why the definition was rejected.
        reason: String,
    },
}

/// Failure raised by a transform's conversion function for one argument.
///
/// The source is shared so cached results can be handed out repeatedly.
#[derive(Debug, Clone, Error)]
#[error(
    "cannot convert argument `{argument}` (position {position}) with transform `{transform}`: {source}"
)]
pub struct ConversionError {
    /// Name of the argument whose raw value failed to convert.
    pub argument: String,
    /// Zero-based ordinal of the argument in the match result.
    pub position: usize,
    /// Name of the transform that was applied.
    pub transform: String,
    /// Error reported by the conversion function.
    pub source: Arc<dyn StdError + Send + Sync + 'static>,
}

fn describe_site(placeholder: Option<&str>, position: &usize) -> String {
    placeholder.map_or_else(String::new, |name| {
        format!(" for placeholder `{name}` at byte {position} (zero-based)")
    })
}

pub(crate) fn syntax_error(
    message: &'static str,
    position: usize,
    placeholder: Option<String>,
) -> ExpressionError {
    ExpressionError::Malformed(SyntaxErrorInfo::new(message, position, placeholder))
}

pub(crate) fn invalid_transform(transform: &str, reason: impl Into<String>) -> ExpressionError {
    ExpressionError::InvalidTransform {
        transform: transform.to_string(),
        reason: reason.into(),
    }
}
