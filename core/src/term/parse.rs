//! Textual term notation used by goal fixtures
//!
//! `OnLine a L`, `Between a b (mid a c)`: juxtaposition is application,
//! parentheses group. An identifier in head position of an application is a
//! constant; every other identifier is a local variable.

use super::{Expr, MAX_DEPTH};
use thiserror::Error;

/// Errors raised while parsing the fixture notation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty term")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unbalanced parenthesis at offset {offset}")]
    Unbalanced { offset: usize },

    #[error("parentheses nested deeper than {limit} at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Open,
    Close,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '\'')
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '(' {
            tokens.push((offset, Token::Open));
            chars.next();
        } else if c == ')' {
            tokens.push((offset, Token::Close));
            chars.next();
        } else if is_ident_char(c) {
            let mut ident = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !is_ident_char(c) {
                    break;
                }
                ident.push(c);
                chars.next();
            }
            tokens.push((offset, Token::Ident(ident)));
        } else {
            return Err(ParseError::UnexpectedChar { ch: c, offset });
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map(|(o, _)| *o).unwrap_or(self.end)
    }

    /// expr := atom+
    fn expr(&mut self) -> Result<Expr, ParseError> {
        let head_offset = self.offset();
        let mut atoms = Vec::new();
        while let Some(tok) = self.peek() {
            if *tok == Token::Close {
                break;
            }
            atoms.push(self.atom()?);
        }

        let mut atoms = atoms.into_iter();
        let head = match atoms.next() {
            Some(head) => head,
            None if self.peek().is_some() => {
                return Err(ParseError::Unbalanced { offset: head_offset })
            }
            None => return Err(ParseError::Empty),
        };
        let args: Vec<Expr> = atoms.collect();
        if args.is_empty() {
            return Ok(head);
        }

        let head = match head {
            Expr::Var(name) => Expr::Const(name),
            other => other,
        };
        Ok(args.into_iter().fold(head, Expr::app))
    }

    /// atom := ident | '(' expr ')'
    fn atom(&mut self) -> Result<Expr, ParseError> {
        let offset = self.offset();
        match self.tokens.get(self.pos).map(|(_, t)| t.clone()) {
            Some(Token::Ident(name)) => {
                self.pos += 1;
                Ok(Expr::Var(name))
            }
            Some(Token::Open) => {
                if self.depth == MAX_DEPTH {
                    return Err(ParseError::TooDeep {
                        limit: MAX_DEPTH,
                        offset,
                    });
                }
                self.pos += 1;
                self.depth += 1;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.peek() {
                    Some(Token::Close) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    _ => Err(ParseError::Unbalanced { offset }),
                }
            }
            Some(Token::Close) | None => Err(ParseError::Unbalanced { offset }),
        }
    }
}

impl Expr {
    /// Parse the fixture notation into a term
    pub fn parse(input: &str) -> Result<Expr, ParseError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            end: input.len(),
            depth: 0,
        };
        let expr = parser.expr()?;

        if parser.pos < parser.tokens.len() {
            return Err(ParseError::Unbalanced {
                offset: parser.offset(),
            });
        }

        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predicate() {
        let e = Expr::parse("OnLine a L").unwrap();
        assert_eq!(e, Expr::apply("OnLine", [Expr::var("a"), Expr::var("L")]));
    }

    #[test]
    fn test_parse_nested_argument() {
        let e = Expr::parse("Between a (mid a c) c").unwrap();
        let mid = Expr::apply("mid", [Expr::var("a"), Expr::var("c")]);
        assert_eq!(
            e,
            Expr::apply("Between", [Expr::var("a"), mid, Expr::var("c")])
        );
    }

    #[test]
    fn test_parse_bare_identifier_is_variable() {
        assert_eq!(Expr::parse("  x ").unwrap(), Expr::var("x"));
        assert_eq!(Expr::parse("(x)").unwrap(), Expr::var("x"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Expr::parse(""), Err(ParseError::Empty));
        assert_eq!(Expr::parse("   "), Err(ParseError::Empty));
        assert_eq!(
            Expr::parse("OnLine a, L"),
            Err(ParseError::UnexpectedChar { ch: ',', offset: 8 })
        );
        assert!(matches!(
            Expr::parse("OnLine (a L"),
            Err(ParseError::Unbalanced { .. })
        ));
        assert!(matches!(
            Expr::parse("OnLine a L)"),
            Err(ParseError::Unbalanced { .. })
        ));
        assert!(matches!(Expr::parse("()"), Err(ParseError::Unbalanced { .. })));
    }

    #[test]
    fn test_parse_depth_limit() {
        let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(Expr::parse(&nested(MAX_DEPTH)).unwrap(), Expr::var("a"));
        assert_eq!(
            Expr::parse(&nested(MAX_DEPTH + 1)),
            Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                offset: MAX_DEPTH,
            })
        );
        assert!(matches!(
            Expr::parse(&nested(100_000)),
            Err(ParseError::TooDeep { .. })
        ));
    }
}
