//! Expression lexer converting Cucumber Expression text into semantic tokens.

use crate::errors::{ExpressionError, syntax_error};

use super::placeholder::{PlaceholderSpec, parse_placeholder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder {
        start: usize,
        name: String,
        hint: Option<String>,
    },
    OptionalStart {
        index: usize,
    },
    OptionalEnd {
        index: usize,
    },
}

fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..).and_then(|rest| rest.chars().next())
}

pub(crate) fn lex_expression(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let bytes = expression.as_bytes();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    let flush_literal = |literal: &mut String, tokens: &mut Vec<Token>| {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    };

    while let Some(ch) = char_at(expression, pos) {
        match ch {
            '\\' => {
                let Some(escaped) = char_at(expression, pos + 1) else {
                    return Err(syntax_error(
                        "dangling escape at end of expression",
                        pos,
                        None,
                    ));
                };
                literal.push(escaped);
                pos += 1 + escaped.len_utf8();
            }
            '{' => {
                flush_literal(&mut literal, &mut tokens);
                let PlaceholderSpec {
                    start,
                    name,
                    hint,
                    end,
                } = parse_placeholder(bytes, pos)?;
                tokens.push(Token::Placeholder { start, name, hint });
                pos = end;
            }
            '}' => {
                return Err(syntax_error(
                    "unmatched closing brace '}' in expression",
                    pos,
                    None,
                ));
            }
            '(' => {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(Token::OptionalStart { index: pos });
                pos += 1;
            }
            ')' => {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(Token::OptionalEnd { index: pos });
                pos += 1;
            }
            other => {
                literal.push(other);
                pos += other.len_utf8();
            }
        }
    }

    flush_literal(&mut literal, &mut tokens);
    Ok(tokens)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise lexing fallibility")]
mod tests {
    use super::*;

    #[test]
    fn tokenises_literals_and_placeholders() {
        let tokens = lex_expression("Given {value:int}").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("Given ".into()),
                Token::Placeholder {
                    start: 6,
                    name: "value".into(),
                    hint: Some("int".into()),
                },
            ]
        );
    }

    #[test]
    fn tokenises_optional_groups() {
        let tokens = lex_expression("cuke(s)!").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("cuke".into()),
                Token::OptionalStart { index: 4 },
                Token::Literal("s".into()),
                Token::OptionalEnd { index: 6 },
                Token::Literal("!".into()),
            ]
        );
    }

    #[test]
    fn escapes_metacharacters_into_literals() {
        let tokens = lex_expression(r"\{n\} \(x\) a\\b").unwrap();
        assert_eq!(tokens, vec![Token::Literal(r"{n} (x) a\b".into())]);
    }

    #[test]
    fn preserves_unicode_literals() {
        let err = lex_expression("ねこが{数}匹").unwrap_err();
        assert!(err.to_string().contains("invalid placeholder"));

        let tokens = lex_expression("ねこが {n} 匹 \\é").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("ねこが ".into()),
                Token::Placeholder {
                    start: 10,
                    name: "n".into(),
                    hint: None,
                },
                Token::Literal(" 匹 é".into()),
            ]
        );
    }

    #[test]
    fn rejects_stray_closing_brace() {
        let err = lex_expression("broken}").unwrap_err();
        assert!(
            err.to_string()
                .contains("unmatched closing brace '}' in expression")
        );
    }

    #[test]
    fn rejects_dangling_escape() {
        let err = lex_expression("oops\\").unwrap_err();
        assert!(err.to_string().contains("dangling escape"), "{err}");
    }
}
