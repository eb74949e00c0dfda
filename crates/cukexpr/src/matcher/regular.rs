//! Matching text against raw regular expressions.

use crate::argument::Argument;
use crate::capture::extract_captures;
use crate::config::build_regex;
use crate::errors::ExpressionError;
use crate::registry::TransformRegistry;
use crate::transform::Transform;
use regex::Regex;
use std::sync::Arc;

use super::Matcher;
use super::groups::capture_group_sources;

/// Matcher wrapping a caller-authored regular expression.
///
/// No anchors are added. Each capture group becomes one argument whose
/// transform is chosen at match time:
///
/// 1. a named group whose name is registered uses that transform;
/// 2. a group whose source equals a registered recognizing pattern uses
///    that transform;
/// 3. a sample that looks like a built-in `int` or `float` uses it;
/// 4. otherwise [`TransformRegistry::infer_from_sample`] decides.
#[derive(Debug, Clone)]
pub struct RegularExpressionMatcher {
    regex: Regex,
    names: Vec<String>,
    group_sources: Option<Vec<String>>,
    registry: Arc<TransformRegistry>,
}

impl RegularExpressionMatcher {
    /// Compile `pattern` as-is.
    ///
    /// # Errors
    /// Returns [`ExpressionError::InvalidPattern`] when the regex engine
    /// rejects the pattern.
    pub fn new(pattern: &str, registry: Arc<TransformRegistry>) -> Result<Self, ExpressionError> {
        let regex = build_regex(pattern)?;
        let names = regex
            .capture_names()
            .skip(1)
            .enumerate()
            .map(|(idx, name)| name.map_or_else(|| format!("arg{}", idx + 1), str::to_string))
            .collect::<Vec<_>>();
        let group_sources = capture_group_sources(pattern).filter(|sources| {
            let agrees = sources.len() == names.len();
            if !agrees {
                log::debug!(
                    "group scan of {pattern:?} found {} groups, engine reports {}",
                    sources.len(),
                    names.len()
                );
            }
            agrees
        });
        Ok(Self {
            regex,
            names,
            group_sources,
            registry,
        })
    }

    /// The compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Argument names: group names where given, else `arg1`, `arg2`, ...
    #[must_use]
    pub fn argument_names(&self) -> &[String] {
        &self.names
    }

    fn resolve(&self, group: usize, raw: Option<&str>) -> Arc<Transform> {
        let registry = &self.registry;
        let named = self
            .regex
            .capture_names()
            .nth(group + 1)
            .flatten()
            .filter(|name| registry.contains(name))
            .map(|name| registry.resolve_by_argument_name(name));
        if let Some(transform) = named {
            return transform;
        }
        let declared = self
            .group_sources
            .as_ref()
            .and_then(|sources| sources.get(group))
            .and_then(|source| registry.resolve_by_pattern(source));
        if let Some(transform) = declared {
            return transform;
        }
        let Some(sample) = raw else {
            return registry.identity();
        };
        let inferred = registry
            .builtin_numeric(sample)
            .unwrap_or_else(|| registry.infer_from_sample(sample));
        log::trace!(
            "inferred transform `{}` for group {} from sample {sample:?}",
            inferred.name(),
            group + 1
        );
        inferred
    }
}

impl Matcher for RegularExpressionMatcher {
    fn source(&self) -> &str {
        self.regex.as_str()
    }

    fn match_text(&self, text: &str) -> Option<Vec<Argument>> {
        let captures = extract_captures(&self.regex, text)?;
        Some(
            captures
                .into_iter()
                .zip(&self.names)
                .enumerate()
                .map(|(group, (raw, name))| {
                    let transform = self.resolve(group, raw.as_deref());
                    Argument::new(name.clone(), group, raw, transform)
                })
                .collect(),
        )
    }
}
