//! Test helpers for asserting expression parser outcomes.
use super::placeholder::{PlaceholderSpec, parse_placeholder};
use crate::errors::ExpressionError;

pub(crate) fn parse_ok(pattern: &str) -> PlaceholderSpec {
    match parse_placeholder(pattern.as_bytes(), 0) {
        Ok(spec) => spec,
        Err(err) => panic!("placeholder should parse: {err}"),
    }
}

pub(crate) fn parse_err(pattern: &str) -> ExpressionError {
    match parse_placeholder(pattern.as_bytes(), 0) {
        Ok(_) => panic!("placeholder parsing should fail"),
        Err(err) => err,
    }
}
