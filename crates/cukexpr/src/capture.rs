//! Regex capture helpers shared by both matcher variants.

use regex::Regex;

/// Extract the capture groups when `text` matches `re`, returning `None` otherwise.
///
/// Capture group 0 (the full match) is ignored so only argument groups
/// contribute to the result. Groups that did not participate yield `None`,
/// keeping positional alignment with the groups declared in the pattern.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use cukexpr::extract_captures;
/// let regex = Regex::new(r"^(\d+)-(\w+)$")
///     .unwrap_or_else(|e| panic!("example regex must compile: {e}"));
/// let values = extract_captures(&regex, "42-answer");
/// assert_eq!(values, Some(vec![Some("42".to_string()), Some("answer".to_string())]));
///
/// let regex = Regex::new(r"^(\d+)$")
///     .unwrap_or_else(|e| panic!("example regex must compile: {e}"));
/// assert!(extract_captures(&regex, "nope").is_none());
/// ```
#[must_use]
pub fn extract_captures(re: &Regex, text: &str) -> Option<Vec<Option<String>>> {
    let caps = re.captures(text)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|capture| capture.map(|m| m.as_str().to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(source: &str) -> Regex {
        Regex::new(source).unwrap_or_else(|e| panic!("test regex must compile: {e}"))
    }

    #[test]
    fn returns_none_when_pattern_does_not_match() {
        assert!(extract_captures(&regex(r"^(\d+)$"), "nope").is_none());
    }

    #[test]
    fn collects_captures_in_order() {
        let re = regex(r"^(\d+)-(\w+)-(\d+)$");
        let input = "12-answer-7";
        let captures = extract_captures(&re, input).unwrap_or_else(|| {
            panic!(
                "expected captures for input {input:?} using pattern {}",
                re.as_str()
            )
        });
        assert_eq!(
            captures,
            vec![
                Some(String::from("12")),
                Some(String::from("answer")),
                Some(String::from("7"))
            ]
        );
    }

    #[test]
    fn keeps_absent_optional_groups() {
        let re = regex(r"^(a)?(b)?$");
        let captures = extract_captures(&re, "a")
            .unwrap_or_else(|| panic!("expected captures for input \"a\""));
        assert_eq!(captures, vec![Some(String::from("a")), None]);
    }

    #[test]
    fn distinguishes_empty_from_absent() {
        let re = regex(r"^x(a*)(b)?$");
        let captures =
            extract_captures(&re, "x").unwrap_or_else(|| panic!("expected captures for \"x\""));
        assert_eq!(captures, vec![Some(String::new()), None]);
    }
}
