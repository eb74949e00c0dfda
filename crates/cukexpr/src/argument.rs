//! Per-match arguments pairing captured text with its transform.

use crate::errors::ConversionError;
use crate::transform::Transform;
use crate::value::Value;
use std::sync::{Arc, OnceLock};

/// One captured argument produced by a successful match.
///
/// The transformed value is computed on first access and cached, so repeated
/// calls to [`value`](Self::value) never run the conversion twice. A capture
/// that did not participate in the match (a placeholder inside an absent
/// optional group) has no raw text and converts to `None` without invoking
/// the transform.
///
/// # Examples
/// ```
/// use cukexpr::{CucumberExpressionMatcher, Matcher, TransformRegistry, Value};
/// use std::sync::Arc;
///
/// let registry = Arc::new(TransformRegistry::new());
/// let matcher = CucumberExpressionMatcher::new("I have {n:int} cukes", registry)
///     .unwrap_or_else(|e| panic!("valid expression: {e}"));
/// let args = matcher
///     .match_text("I have 42 cukes")
///     .unwrap_or_else(|| panic!("text should match"));
/// let [arg] = args.as_slice() else { panic!("one argument expected") };
/// assert_eq!(arg.name(), "n");
/// assert_eq!(arg.type_name(), "int");
/// assert_eq!(arg.raw(), Some("42"));
/// assert_eq!(arg.value().ok().flatten(), Some(&Value::Int(42)));
/// ```
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    position: usize,
    raw: Option<String>,
    transform: Arc<Transform>,
    value: OnceLock<Result<Option<Value>, ConversionError>>,
}

impl Argument {
    pub(crate) fn new(
        name: impl Into<String>,
        position: usize,
        raw: Option<String>,
        transform: Arc<Transform>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            raw,
            transform,
            value: OnceLock::new(),
        }
    }

    /// Placeholder or group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position among the match's arguments.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Captured substring, absent when the capture did not participate.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Primary name of the bound transform.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.transform.name()
    }

    /// The bound transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Transformed value, converting on first access.
    ///
    /// # Errors
    /// Returns [`ConversionError`] when the transform rejects the raw text.
    /// The failure is cached like a success.
    pub fn value(&self) -> Result<Option<&Value>, ConversionError> {
        match self.value.get_or_init(|| self.convert()) {
            Ok(value) => Ok(value.as_ref()),
            Err(err) => Err(err.clone()),
        }
    }

    /// Consume the argument and return its transformed value.
    ///
    /// # Errors
    /// Returns [`ConversionError`] when the transform rejects the raw text.
    pub fn into_value(mut self) -> Result<Option<Value>, ConversionError> {
        self.value.take().unwrap_or_else(|| self.convert())
    }

    fn convert(&self) -> Result<Option<Value>, ConversionError> {
        let Some(raw) = self.raw.as_deref() else {
            return Ok(None);
        };
        self.transform
            .convert(raw)
            .map(Some)
            .map_err(|source| ConversionError {
                argument: self.name.clone(),
                position: self.position,
                transform: self.transform.name().to_string(),
                source: Arc::from(source),
            })
    }
}
