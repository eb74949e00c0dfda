//! Transform registration and resolution.
//!
//! The registry maps names to [`Transform`]s. Built-in `int`, `float` and
//! `string` transforms are always present; re-registering a name silently
//! replaces the previous binding, so the latest registration wins.

use crate::errors::{BoxError, ExpressionError};
use crate::transform::{Transform, float_transform, int_transform, string_transform};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Named transforms available to matchers.
///
/// Build the registry during an initialization phase, then share it with
/// matchers behind an [`Arc`]. Once shared it is read-only.
///
/// # Examples
/// ```
/// use cukexpr::{TransformRegistry, Value};
///
/// let mut registry = TransformRegistry::new();
/// registry
///     .register_transform(["currency"], [r"[A-Z]{3}"], |raw: &str| {
///         Ok(Value::from(raw.to_lowercase()))
///     })
///     .unwrap_or_else(|e| panic!("valid transform: {e}"));
///
/// assert!(registry.resolve_by_type("currency").is_ok());
/// assert_eq!(registry.resolve_by_argument_name("missing").name(), "string");
/// ```
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    by_name: HashMap<String, Arc<Transform>>,
    custom: Vec<Arc<Transform>>,
    builtins: [Arc<Transform>; 2],
    identity: Arc<Transform>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformRegistry {
    /// Create a registry holding only the built-in transforms.
    #[must_use]
    pub fn new() -> Self {
        let int = Arc::new(int_transform());
        let float = Arc::new(float_transform());
        let identity = Arc::new(string_transform());
        let mut by_name = HashMap::new();
        for transform in [&int, &float, &identity] {
            by_name.insert(transform.name().to_string(), Arc::clone(transform));
        }
        Self {
            by_name,
            custom: Vec::new(),
            builtins: [int, float],
            identity,
        }
    }

    /// Insert `transform` under each of its names, overwriting prior bindings.
    pub fn register(&mut self, transform: Transform) {
        let transform = Arc::new(transform);
        for name in transform.names() {
            let previous = self.by_name.insert(name.clone(), Arc::clone(&transform));
            if let Some(previous) = previous.filter(|p| !Arc::ptr_eq(p, &transform)) {
                log::debug!(
                    "transform name `{name}` rebound from {:?} to {:?}",
                    previous.names(),
                    transform.names()
                );
            }
        }
        self.custom.push(transform);
        // Drop custom transforms whose every name now points elsewhere.
        let by_name = &self.by_name;
        self.custom.retain(|candidate| {
            candidate.names().iter().any(|name| {
                by_name
                    .get(name)
                    .is_some_and(|bound| Arc::ptr_eq(bound, candidate))
            })
        });
    }

    /// Build a transform and register it in one step.
    ///
    /// # Errors
    /// Propagates [`Transform::new`] failures; nothing is registered then.
    pub fn register_transform<N, P, F>(
        &mut self,
        names: N,
        patterns: P,
        convert: F,
    ) -> Result<(), ExpressionError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.register(Transform::new(names, patterns, convert)?);
        Ok(())
    }

    /// Exact lookup for an explicit `{name:type}` hint.
    ///
    /// # Errors
    /// Returns [`ExpressionError::UnknownType`] when nothing is registered
    /// under `type_name`. The error carries no placeholder context; the
    /// compiler fills it in.
    pub fn resolve_by_type(&self, type_name: &str) -> Result<Arc<Transform>, ExpressionError> {
        self.get(type_name)
            .ok_or_else(|| ExpressionError::UnknownType {
                type_name: type_name.to_string(),
                placeholder: None,
                position: 0,
            })
    }

    /// Lookup by bare argument name, falling back to the identity transform.
    #[must_use]
    pub fn resolve_by_argument_name(&self, name: &str) -> Arc<Transform> {
        self.get(name).unwrap_or_else(|| self.identity())
    }

    /// Infer a transform from a captured sample.
    ///
    /// Custom transforms are tried in registration order before the
    /// built-ins; the first whose recognizer matches the whole sample wins.
    #[must_use]
    pub fn infer_from_sample(&self, sample: &str) -> Arc<Transform> {
        self.inference_order()
            .find(|transform| transform.recognizes(sample))
            .cloned()
            .unwrap_or_else(|| self.identity())
    }

    /// Find the transform that declares `source` as a recognizing pattern.
    ///
    /// Uses the same priority as [`infer_from_sample`](Self::infer_from_sample).
    #[must_use]
    pub fn resolve_by_pattern(&self, source: &str) -> Option<Arc<Transform>> {
        self.inference_order()
            .find(|transform| transform.declares_pattern(source))
            .cloned()
    }

    /// Check the sample against the built-in numeric transforms only.
    #[must_use]
    pub fn builtin_numeric(&self, sample: &str) -> Option<Arc<Transform>> {
        self.builtins
            .iter()
            .find(|transform| transform.recognizes(sample))
            .cloned()
    }

    /// The identity transform used when nothing else applies.
    #[must_use]
    pub fn identity(&self) -> Arc<Transform> {
        Arc::clone(&self.identity)
    }

    /// Whether any transform is bound to `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Currently bound names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn get(&self, name: &str) -> Option<Arc<Transform>> {
        self.by_name.get(name).cloned()
    }

    fn inference_order(&self) -> impl Iterator<Item = &Arc<Transform>> {
        self.custom.iter().chain(self.builtins.iter())
    }
}
