//! Named string-to-value conversions and the built-in numeric transforms.

use crate::config::build_regex;
use crate::errors::{BoxError, ExpressionError, invalid_transform};
use crate::value::Value;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Recognizing pattern of the built-in `int` transform.
///
/// Digits are ASCII only: `\d` would also accept other scripts' digits,
/// which `i64::from_str` rejects.
pub const INT_PATTERN: &str = r"-?[0-9]+";

/// Recognizing pattern of the built-in `float` transform.
pub const FLOAT_PATTERN: &str = r"-?[0-9]*\.[0-9]+";

/// Fragment used when a placeholder has no recognizing pattern.
pub const ANY_PATTERN: &str = r".+?";

/// Name of the built-in integer transform.
pub const INT: &str = "int";
/// Name of the built-in float transform.
pub const FLOAT: &str = "float";
/// Name of the built-in identity transform.
pub const STRING: &str = "string";

type ConvertFn = dyn Fn(&str) -> Result<Value, BoxError> + Send + Sync;

static INT_RECOGNIZER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(INT_PATTERN)).unwrap_or_else(|_| unreachable!())
});
static FLOAT_RECOGNIZER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(FLOAT_PATTERN)).unwrap_or_else(|_| unreachable!())
});

fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// A named conversion from captured text to a [`Value`].
///
/// Recognizers are compiled once, fully anchored, when the transform is
/// built. A transform without recognizers is conversion-only: it is never
/// inferred from a sample and matches any text when used as a type hint.
///
/// # Examples
/// ```
/// use cukexpr::{Transform, Value};
///
/// let upper = Transform::new(["shout"], [r"[A-Z]+"], |raw: &str| {
///     Ok(Value::from(raw.to_lowercase()))
/// })
/// .unwrap_or_else(|e| panic!("valid transform: {e}"));
/// assert!(upper.recognizes("HELLO"));
/// assert!(!upper.recognizes("hello"));
/// ```
#[derive(Clone)]
pub struct Transform {
    names: Vec<String>,
    patterns: Vec<String>,
    recognizers: Vec<Regex>,
    convert: Arc<ConvertFn>,
}

impl Transform {
    /// Build a transform from its names, recognizing patterns and conversion.
    ///
    /// # Errors
    /// - [`ExpressionError::InvalidTransform`] when `names` is empty or a
    ///   pattern contains capture groups.
    /// - [`ExpressionError::InvalidPattern`] when a pattern is not valid regex
    ///   on its own, including unbalanced parentheses.
    ///
    /// Repeated names are kept once, in first-seen order.
    pub fn new<N, P, F>(names: N, patterns: P, convert: F) -> Result<Self, ExpressionError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names.into_iter().map(Into::into) {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        let names = unique;
        let Some(primary) = names.first() else {
            return Err(invalid_transform("<unnamed>", "at least one name is required"));
        };
        if names.iter().any(String::is_empty) {
            return Err(invalid_transform(primary, "names must not be empty"));
        }
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut recognizers = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            // Checked bare so a pattern cannot close the anchoring group early.
            if build_regex(pattern)?.captures_len() > 1 {
                return Err(invalid_transform(
                    primary,
                    format!("recognizing pattern `{pattern}` must not contain capture groups"),
                ));
            }
            recognizers.push(build_regex(&anchored(pattern))?);
        }
        Ok(Self {
            names,
            patterns,
            recognizers,
            convert: Arc::new(convert),
        })
    }

    /// Build a transform that has no recognizing pattern.
    ///
    /// # Errors
    /// Returns [`ExpressionError::InvalidTransform`] when `names` is empty.
    pub fn conversion_only<N, F>(names: N, convert: F) -> Result<Self, ExpressionError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::new(names, std::iter::empty::<String>(), convert)
    }

    /// Primary name, used when reporting the argument's type.
    #[must_use]
    pub fn name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }

    /// All names this transform is registered under.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Recognizing patterns as authored.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `sample` fully matches any recognizing pattern.
    #[must_use]
    pub fn recognizes(&self, sample: &str) -> bool {
        self.recognizers.iter().any(|re| re.is_match(sample))
    }

    /// Whether `source` is, verbatim, one of the recognizing patterns.
    #[must_use]
    pub fn declares_pattern(&self, source: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern == source)
    }

    /// Regex fragment placed inside a placeholder's capture group.
    #[must_use]
    pub fn regex_fragment(&self) -> String {
        match self.patterns.as_slice() {
            [] => ANY_PATTERN.to_string(),
            [single] => single.clone(),
            many => many
                .iter()
                .map(|pattern| format!("(?:{pattern})"))
                .collect::<Vec<_>>()
                .join("|"),
        }
    }

    /// Run the conversion function on `raw`.
    ///
    /// # Errors
    /// Returns whatever the conversion function reports.
    pub fn convert(&self, raw: &str) -> Result<Value, BoxError> {
        (self.convert)(raw)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("names", &self.names)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

fn builtin(
    name: &str,
    recognizer: Option<(&str, &Regex)>,
    convert: fn(&str) -> Result<Value, BoxError>,
) -> Transform {
    let (patterns, recognizers): (Vec<String>, Vec<Regex>) = recognizer
        .map(|(pattern, regex)| (pattern.to_string(), regex.clone()))
        .into_iter()
        .unzip();
    Transform {
        names: vec![name.to_string()],
        patterns,
        recognizers,
        convert: Arc::new(convert),
    }
}

fn parse_int(raw: &str) -> Result<Value, BoxError> {
    Ok(Value::Int(raw.parse::<i64>()?))
}

fn parse_float(raw: &str) -> Result<Value, BoxError> {
    Ok(Value::Float(raw.parse::<f64>()?))
}

fn identity(raw: &str) -> Result<Value, BoxError> {
    Ok(Value::Str(raw.to_string()))
}

/// The built-in `int` transform.
#[must_use]
pub fn int_transform() -> Transform {
    builtin(INT, Some((INT_PATTERN, &*INT_RECOGNIZER)), parse_int)
}

/// The built-in `float` transform.
#[must_use]
pub fn float_transform() -> Transform {
    builtin(FLOAT, Some((FLOAT_PATTERN, &*FLOAT_RECOGNIZER)), parse_float)
}

/// The identity transform, returning captured text unchanged.
#[must_use]
pub fn string_transform() -> Transform {
    builtin(STRING, None, identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", true)]
    #[case("-7", true)]
    #[case("4.2", false)]
    #[case("forty", false)]
    #[case("", false)]
    #[case("٤٢", false)]
    fn int_recognizes_whole_numbers(#[case] sample: &str, #[case] expected: bool) {
        assert_eq!(int_transform().recognizes(sample), expected);
    }

    #[rstest]
    #[case("4.2", true)]
    #[case(".5", true)]
    #[case("-0.25", true)]
    #[case("42", false)]
    #[case("4.", false)]
    #[case("٤.٢", false)]
    fn float_recognizes_decimals(#[case] sample: &str, #[case] expected: bool) {
        assert_eq!(float_transform().recognizes(sample), expected);
    }

    #[test]
    fn identity_never_recognizes() {
        let transform = string_transform();
        assert!(!transform.recognizes("anything"));
        assert_eq!(transform.regex_fragment(), ANY_PATTERN);
    }

    #[test]
    fn int_conversion_reports_overflow() {
        assert!(int_transform().convert("99999999999999999999").is_err());
        assert!(matches!(int_transform().convert("-3"), Ok(Value::Int(-3))));
    }

    #[test]
    fn rejects_empty_name_list() {
        let err = Transform::conversion_only(Vec::<String>::new(), identity)
            .err()
            .unwrap_or_else(|| panic!("empty names should fail"));
        assert!(matches!(err, ExpressionError::InvalidTransform { .. }));
    }

    #[test]
    fn rejects_capturing_recognizer() {
        let err = Transform::new(["pair"], [r"(\d+),(\d+)"], identity)
            .err()
            .unwrap_or_else(|| panic!("capturing pattern should fail"));
        assert!(err.to_string().contains("capture groups"), "{err}");
    }

    #[test]
    fn rejects_invalid_recognizer_syntax() {
        let err = Transform::new(["broken"], [r"[a-"], identity)
            .err()
            .unwrap_or_else(|| panic!("invalid pattern should fail"));
        assert!(matches!(err, ExpressionError::InvalidPattern(_)));
    }

    #[test]
    fn builtin_patterns_compile_anchored() {
        for pattern in [INT_PATTERN, FLOAT_PATTERN] {
            assert!(Regex::new(&anchored(pattern)).is_ok(), "{pattern}");
        }
        assert_eq!(int_transform().patterns(), [INT_PATTERN.to_string()]);
        assert_eq!(float_transform().patterns(), [FLOAT_PATTERN.to_string()]);
    }

    #[test]
    fn rejects_pattern_escaping_its_group() {
        let err = Transform::new(["x"], ["a)|(?:b"], identity)
            .err()
            .unwrap_or_else(|| panic!("unbalanced pattern should fail"));
        assert!(matches!(err, ExpressionError::InvalidPattern(_)), "{err}");
    }

    #[test]
    fn repeated_names_are_kept_once() {
        let transform = Transform::conversion_only(["a", "b", "a"], identity)
            .unwrap_or_else(|e| panic!("valid transform: {e}"));
        assert_eq!(transform.names(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn joins_multiple_patterns_into_alternation() {
        let transform = Transform::new(["colour"], ["red", "blue"], identity)
            .unwrap_or_else(|e| panic!("valid transform: {e}"));
        assert_eq!(transform.regex_fragment(), "(?:red)|(?:blue)");
        assert!(transform.recognizes("blue"));
        assert!(!transform.recognizes("redblue"));
        assert!(transform.declares_pattern("red"));
    }
}
