//! Type expression parser.
//!
//! # Syntax
//!
//! - `bool`, `str`, `i8`..`i64`, `u8`..`u64`, `isize`, `usize`, `f32`, `f64`
//! - `duration` for the standard duration type
//! - `Option<T>` for a possibly-absent reference
//! - `Vec<T>` and `[T; N]` for lists
//! - `Map<K, V>` for dictionaries
//! - `Name` for a declared type

use std::ops::Range;

use bencode_gen_core::ScalarKind;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r]+")]
enum Token<'src> {
    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semi,

    #[token(",")]
    Comma,

    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'src str),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Token::LAngle => "`<`".to_string(),
            Token::RAngle => "`>`".to_string(),
            Token::LBracket => "`[`".to_string(),
            Token::RBracket => "`]`".to_string(),
            Token::Semi => "`;`".to_string(),
            Token::Comma => "`,`".to_string(),
            Token::Number(n) => format!("`{n}`"),
            Token::Ident(name) => format!("`{name}`"),
        }
    }
}

/// Parsed type expression, before name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr<'src> {
    Scalar(ScalarKind),
    Duration,
    Option(Box<TypeExpr<'src>>),
    Vec(Box<TypeExpr<'src>>),
    Array(Box<TypeExpr<'src>>, usize),
    Map(Box<TypeExpr<'src>>, Box<TypeExpr<'src>>),
    /// Reference to a declared type, with its span for diagnostics.
    Named(&'src str, Range<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Range<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}

/// Parse a complete type expression.
pub fn parse_type_expr(input: &str) -> Result<TypeExpr<'_>, ParseError> {
    let mut parser = Parser::new(input)?;
    let expr = parser.parse_type()?;
    if let Some(token) = parser.peek() {
        return Err(ParseError {
            message: format!("unexpected {} after type", token.describe()),
            span: parser.current_span(),
        });
    }
    Ok(expr)
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
    input: &'src str,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str) -> Result<Self, ParseError> {
        let lexer = Token::lexer(input);
        let mut tokens = Vec::new();

        for (result, span) in lexer.spanned() {
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(_) => {
                    return Err(ParseError {
                        message: format!("unexpected character {:?}", &input[span.clone()]),
                        span,
                    });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            input,
        })
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, s)| s.clone())
            .unwrap_or(self.input.len()..self.input.len())
    }

    fn expect(&mut self, expected: Token<'src>) -> Result<(), ParseError> {
        let span = self.current_span();
        match self.advance() {
            Some(t) if std::mem::discriminant(&t) == std::mem::discriminant(&expected) => Ok(()),
            Some(t) => Err(ParseError {
                message: format!("expected {}, found {}", expected.describe(), t.describe()),
                span,
            }),
            None => Err(ParseError {
                message: format!("expected {}, found end of input", expected.describe()),
                span,
            }),
        }
    }

    fn parse_type(&mut self) -> Result<TypeExpr<'src>, ParseError> {
        let span = self.current_span();
        match self.advance() {
            Some(Token::Ident(name)) => self.parse_named(name, span),
            Some(Token::LBracket) => self.parse_array(),
            Some(t) => Err(ParseError {
                message: format!("expected a type, found {}", t.describe()),
                span,
            }),
            None => Err(ParseError {
                message: "expected a type, found end of input".to_string(),
                span,
            }),
        }
    }

    fn parse_named(
        &mut self,
        name: &'src str,
        span: Range<usize>,
    ) -> Result<TypeExpr<'src>, ParseError> {
        if let Some(kind) = ScalarKind::from_name(name) {
            return Ok(TypeExpr::Scalar(kind));
        }
        match name {
            "duration" => Ok(TypeExpr::Duration),
            "Option" => Ok(TypeExpr::Option(Box::new(self.parse_single_arg()?))),
            "Vec" => Ok(TypeExpr::Vec(Box::new(self.parse_single_arg()?))),
            "Map" => {
                self.expect(Token::LAngle)?;
                let key = self.parse_type()?;
                self.expect(Token::Comma)?;
                let value = self.parse_type()?;
                self.expect(Token::RAngle)?;
                Ok(TypeExpr::Map(Box::new(key), Box::new(value)))
            }
            _ => Ok(TypeExpr::Named(name, span)),
        }
    }

    fn parse_single_arg(&mut self) -> Result<TypeExpr<'src>, ParseError> {
        self.expect(Token::LAngle)?;
        let inner = self.parse_type()?;
        self.expect(Token::RAngle)?;
        Ok(inner)
    }

    fn parse_array(&mut self) -> Result<TypeExpr<'src>, ParseError> {
        let elem = self.parse_type()?;
        self.expect(Token::Semi)?;
        let span = self.current_span();
        let len = match self.advance() {
            Some(Token::Number(digits)) => digits.parse::<usize>().map_err(|_| ParseError {
                message: format!("array length `{digits}` is too large"),
                span: span.clone(),
            })?,
            _ => {
                return Err(ParseError {
                    message: "expected array length".to_string(),
                    span,
                });
            }
        };
        self.expect(Token::RBracket)?;
        Ok(TypeExpr::Array(Box::new(elem), len))
    }
}
