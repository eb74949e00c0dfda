//! Cucumber Expressions and raw-regex step matching with typed transforms.
//!
//! A [`TransformRegistry`] names the conversions available to steps. A
//! [`CucumberExpressionMatcher`] compiles expressions such as
//! `I have {n:int} cuke(s)` into anchored regexes; a
//! [`RegularExpressionMatcher`] wraps a caller-authored regex and infers
//! each capture's transform. Both yield ordered [`Argument`]s on a match
//! and `None` otherwise.
//!
//! ```
//! use cukexpr::{CucumberExpressionMatcher, Matcher, TransformRegistry, Value};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TransformRegistry::new());
//! let matcher = CucumberExpressionMatcher::new("I have {n} cuke(s) in my belly", registry)
//!     .unwrap_or_else(|e| panic!("valid expression: {e}"));
//! let args = matcher
//!     .match_text("I have 1 cuke in my belly")
//!     .unwrap_or_else(|| panic!("text should match"));
//! let value = args.first().and_then(|arg| arg.value().ok().flatten().cloned());
//! assert_eq!(value, Some(Value::from("1")));
//! assert!(matcher.match_text("I have 1 cucumber").is_none());
//! ```

mod argument;
mod capture;
pub mod config;
mod errors;
mod matcher;
mod pattern;
mod registry;
mod transform;
mod value;

pub use argument::Argument;
pub use capture::extract_captures;
pub use errors::{BoxError, ConversionError, ExpressionError, SyntaxErrorInfo};
pub use matcher::{CucumberExpressionMatcher, Matcher, RegularExpressionMatcher, StepMatcher};
pub use pattern::{
    ExpressionSource, PlaceholderSlot, build_regex_from_expression, compile_expression,
};
pub use registry::TransformRegistry;
pub use transform::{
    ANY_PATTERN, FLOAT, FLOAT_PATTERN, INT, INT_PATTERN, STRING, Transform, float_transform,
    int_transform, string_transform,
};
pub use value::Value;
