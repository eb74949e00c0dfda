//! Process-wide configuration for regex compilation.
//!
//! The module exposes the compiled-regex size limit applied to expression
//! matchers, raw-regex matchers and transform recognizers. The value comes
//! from an in-process override, then the `CUKEXPR_REGEX_SIZE_LIMIT`
//! environment variable, then the `regex` crate default.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Environment variable consulted for the regex size limit.
pub const REGEX_SIZE_LIMIT_ENV: &str = "CUKEXPR_REGEX_SIZE_LIMIT";

/// Size limit used when neither an override nor the environment supplies one.
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

const OVERRIDE_UNSET: usize = 0;

static SIZE_LIMIT_OVERRIDE: AtomicUsize = AtomicUsize::new(OVERRIDE_UNSET);

fn parse_size(value: &str) -> Option<usize> {
    let trimmed = value.trim();
    let (digits, multiplier) = match trimmed.char_indices().last() {
        Some((idx, 'k' | 'K')) => (trimmed.get(..idx)?, 1usize << 10),
        Some((idx, 'm' | 'M')) => (trimmed.get(..idx)?, 1usize << 20),
        Some(_) => (trimmed, 1),
        None => return None,
    };
    let size = digits.trim().parse::<usize>().ok()?.checked_mul(multiplier)?;
    (size > 0).then_some(size)
}

fn env_regex_size_limit() -> Option<usize> {
    std::env::var(REGEX_SIZE_LIMIT_ENV)
        .ok()
        .as_deref()
        .and_then(parse_size)
}

fn override_state() -> Option<usize> {
    match SIZE_LIMIT_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_UNSET => None,
        limit => Some(limit),
    }
}

/// Determine the compiled-regex size limit in bytes.
#[must_use]
pub fn regex_size_limit() -> usize {
    override_state()
        .or_else(env_regex_size_limit)
        .unwrap_or(DEFAULT_REGEX_SIZE_LIMIT)
}

/// Override the regex size limit for the current process.
///
/// A zero limit is ignored. Tests may call
/// [`clear_regex_size_limit_override`] to restore environment driven
/// behaviour after changing the override.
pub fn set_regex_size_limit(limit: usize) {
    if limit == OVERRIDE_UNSET {
        return;
    }
    SIZE_LIMIT_OVERRIDE.store(limit, Ordering::Relaxed);
}

/// Remove any in-process override for the regex size limit.
pub fn clear_regex_size_limit_override() {
    SIZE_LIMIT_OVERRIDE.store(OVERRIDE_UNSET, Ordering::Relaxed);
}

/// Compile `source` with the configured size limit.
pub(crate) fn build_regex(source: &str) -> Result<regex::Regex, regex::Error> {
    regex::RegexBuilder::new(source)
        .size_limit(regex_size_limit())
        .build()
}
