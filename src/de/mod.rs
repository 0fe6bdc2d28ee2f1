/*!
Deserialization of JSON documents into [`Value`]s.

This module contains a recursive descent parser that pulls tokens from a [`Lexer`]
one at a time and builds a value tree bottom-up. The grammar state lives on the
call stack: every nested array or object is a nested call, so deeply nested documents
use stack space proportional to their depth. [`Options::max_depth`] can put a cap on that.

A document is either:

- an object, which ends the document as soon as its closing `}` is read,
- or any other single value, which must be followed only by whitespace.

Parsing stops at the first error. Nothing that was built before the error is returned.
*/

mod value;

use std::{collections::BTreeMap, str};

use crate::{
    error::{Error, ErrorKind},
    lex::{Kind, Lexer, Token},
    read::ByteSource,
};

pub use value::Value;

/**
Options for parsing a document.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    max_depth: Option<usize>,
}

impl Options {
    /**
    Options with no limits.
    */
    pub const fn new() -> Self {
        Options { max_depth: None }
    }

    /**
    Fail documents that nest arrays and objects deeper than `depth`.

    The outermost array or object is at depth 1.
    */
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /**
    The configured maximum depth, if any.
    */
    pub const fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }
}

/**
A parser that builds a single [`Value`] from a stream of tokens.
*/
#[derive(Debug)]
pub struct Parser<S> {
    lexer: Lexer<S>,
    options: Options,
    depth: usize,
}

impl<S: ByteSource> Parser<S> {
    pub fn new(source: S, options: Options) -> Self {
        Parser {
            lexer: Lexer::new(source),
            options,
            depth: 0,
        }
    }

    /**
    Parse a complete document.
    */
    pub fn parse_document(&mut self) -> Result<Value, Error> {
        let token = self.next_token()?;

        if token.kind() == Kind::LeftBrace {
            return self.parse_object();
        }

        let value = self.parse_value(token)?;

        match self.next_token()?.kind() {
            Kind::Eof => Ok(value),
            found => Err(Error::new(ErrorKind::TrailingContent(found))),
        }
    }

    /**
    Take back the underlying byte source.

    After parsing an object document the source is positioned just past its closing `}`.
    */
    pub fn into_inner(self) -> S {
        self.lexer.into_inner()
    }

    #[inline]
    fn next_token(&mut self) -> Result<Token, Error> {
        Ok(self.lexer.next_token()?)
    }

    /**
    Parse a value that begins with `token`.

    The comma before the value, if any, has already been consumed.
    */
    fn parse_value(&mut self, token: Token) -> Result<Value, Error> {
        match token.kind() {
            Kind::Str => parse_string(token.into_literal()),
            Kind::Int => parse_integer(token.literal()),
            Kind::Float => parse_float(token.literal()),
            Kind::LeftBrace => self.parse_object(),
            Kind::LeftBracket => self.parse_array(),
            Kind::Bool => parse_bool(token.literal()),
            Kind::Null => Ok(Value::Null),
            Kind::Invalid => Err(Error::invalid_token(token.into_literal())),
            found @ (Kind::RightBrace
            | Kind::RightBracket
            | Kind::Colon
            | Kind::Comma
            | Kind::Eof) => Err(Error::unexpected("a value", found)),
        }
    }

    /**
    Parse an object after its opening `{` has been consumed.
    */
    fn parse_object(&mut self) -> Result<Value, Error> {
        self.enter()?;

        let mut map = BTreeMap::new();
        let mut seen_pair = false;

        loop {
            let mut token = self.next_token()?;
            if token.kind() == Kind::RightBrace {
                break;
            }

            if seen_pair {
                expect(token, Kind::Comma, "`,` or `}`")?;
                token = self.next_token()?;
            }

            let key = match token.kind() {
                Kind::Str => parse_key(token.into_literal())?,
                Kind::Invalid => return Err(Error::invalid_token(token.into_literal())),
                found => return Err(Error::unexpected("a string key", found)),
            };

            expect(self.next_token()?, Kind::Colon, "`:`")?;

            let first = self.next_token()?;
            let value = self.parse_value(first)?;
            seen_pair = true;

            if map.contains_key(&key) {
                return Err(Error::new(ErrorKind::DuplicateKey(key)));
            }
            map.insert(key, value);
        }

        self.exit();
        Ok(Value::Map(map))
    }

    /**
    Parse an array after its opening `[` has been consumed.
    */
    fn parse_array(&mut self) -> Result<Value, Error> {
        self.enter()?;

        let mut arr = Vec::new();
        let mut seen_elem = false;

        loop {
            let mut token = self.next_token()?;
            if token.kind() == Kind::RightBracket {
                break;
            }

            if seen_elem {
                expect(token, Kind::Comma, "`,` or `]`")?;
                token = self.next_token()?;
            }
            seen_elem = true;

            arr.push(self.parse_value(token)?);
        }

        self.exit();
        Ok(Value::Arr(arr))
    }

    fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;

        match self.options.depth_limit() {
            Some(max) if self.depth > max => Err(Error::new(ErrorKind::DepthLimit(max))),
            _ => Ok(()),
        }
    }

    fn exit(&mut self) {
        test_assert!(self.depth > 0);
        self.depth -= 1;
    }
}

/**
Require a token of a specific kind between the parts of an array or object.

An invalid token is reported with its literal rather than as a mismatched kind.
*/
fn expect(token: Token, kind: Kind, expected: &'static str) -> Result<(), Error> {
    match token.kind() {
        found if found == kind => Ok(()),
        Kind::Invalid => Err(Error::invalid_token(token.into_literal())),
        found => Err(Error::unexpected(expected, found)),
    }
}

fn parse_string(literal: Vec<u8>) -> Result<Value, Error> {
    parse_key(literal).map(Value::Str)
}

fn parse_key(literal: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(literal).map_err(|_| Error::new(ErrorKind::Utf8))
}

fn parse_integer(literal: &[u8]) -> Result<Value, Error> {
    let literal = numeric_literal(literal)?;

    literal.parse::<i64>().map(Value::Int).map_err(|_| {
        Error::new(ErrorKind::Number {
            literal: literal.to_owned(),
            target: "integer",
        })
    })
}

fn parse_float(literal: &[u8]) -> Result<Value, Error> {
    let literal = numeric_literal(literal)?;

    // literals too large for an `f64` parse as infinity rather than failing
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Float(n)),
        _ => Err(Error::new(ErrorKind::Number {
            literal: literal.to_owned(),
            target: "float",
        })),
    }
}

#[allow(unreachable_code)]
fn numeric_literal(literal: &[u8]) -> Result<&str, Error> {
    match str::from_utf8(literal) {
        Ok(literal) => Ok(literal),
        Err(_) => {
            test_unreachable!("numeric literals are ASCII");
            Err(Error::unreachable("numeric literal is not ASCII"))
        }
    }
}

#[allow(unreachable_code)]
fn parse_bool(literal: &[u8]) -> Result<Value, Error> {
    match literal {
        b"true" => Ok(Value::Bool(true)),
        b"false" => Ok(Value::Bool(false)),
        _ => {
            test_unreachable!("boolean tokens are `true` or `false`");
            Err(Error::unreachable("boolean token is neither `true` nor `false`"))
        }
    }
}
