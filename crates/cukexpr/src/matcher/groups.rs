//! Recover the source text of each capture group in a raw regex.
//!
//! The scanner understands escapes, character classes (including nested
//! ones), flag and non-capturing groups, and `(?P<name>..)` / `(?<name>..)`
//! named groups. Anything it cannot balance yields `None`, and callers then
//! skip source-based transform resolution.

/// Source text of each capturing group, ordered by group number.
pub(crate) fn capture_group_sources(pattern: &str) -> Option<Vec<String>> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let offset = |i: usize| chars.get(i).map_or(pattern.len(), |&(pos, _)| pos);

    let mut spans: Vec<Option<(usize, usize)>> = Vec::new();
    // Each open group: `Some((group number, content start))` when capturing.
    let mut open: Vec<Option<(usize, usize)>> = Vec::new();
    let mut i = 0;

    while let Some(ch) = at(i) {
        match ch {
            '\\' => i += 2,
            '[' => i = skip_class(&at, i)?,
            '(' => {
                let (capturing, content) = classify_group(&at, i)?;
                if capturing {
                    open.push(Some((spans.len(), offset(content))));
                    spans.push(None);
                } else {
                    open.push(None);
                }
                i = content;
            }
            ')' => {
                if let Some((group, start)) = open.pop()? {
                    let slot = spans.get_mut(group)?;
                    *slot = Some((start, offset(i)));
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    if !open.is_empty() {
        return None;
    }
    spans
        .into_iter()
        .map(|span| {
            let (start, end) = span?;
            pattern.get(start..end).map(str::to_string)
        })
        .collect()
}

/// Decide whether the group opening at `i` captures, and where its content starts.
fn classify_group(at: &impl Fn(usize) -> Option<char>, i: usize) -> Option<(bool, usize)> {
    if at(i + 1) != Some('?') {
        return Some((true, i + 1));
    }
    let name_start = match (at(i + 2), at(i + 3)) {
        (Some('P'), Some('<')) => i + 4,
        (Some('<'), Some(c)) if c != '=' && c != '!' => i + 3,
        _ => return Some((false, i + 2)),
    };
    let mut j = name_start;
    loop {
        match at(j)? {
            '>' => return Some((true, j + 1)),
            _ => j += 1,
        }
    }
}

/// Skip a character class opening at `i`, returning the index after its `]`.
fn skip_class(at: &impl Fn(usize) -> Option<char>, i: usize) -> Option<usize> {
    let mut j = i + 1;
    if at(j) == Some('^') {
        j += 1;
    }
    // A leading `]` is literal.
    if at(j) == Some(']') {
        j += 1;
    }
    let mut depth = 1usize;
    while depth > 0 {
        match at(j)? {
            '\\' => j += 2,
            '[' => {
                depth += 1;
                j += 1;
            }
            ']' => {
                depth -= 1;
                j += 1;
            }
            _ => j += 1,
        }
    }
    Some(j)
}
