/*!
# `acorn-json`

## 🐿🌰

A small, strict JSON decoder. Bytes are pulled one at a time from a [`ByteSource`],
classified into tokens by a [`Lexer`], and assembled into a [`Value`] tree by a
recursive descent [`Parser`].

```
use acorn_json::Value;

let value = acorn_json::parse_str(r#"{"a":"1","b":1,"c":1.0,"e":[1,-12,null]}"#)?;

assert_eq!(Some("1"), value.get("a").and_then(Value::as_str));
assert_eq!(Some(&Value::Int(1)), value.get("b"));
assert_eq!(Some(&Value::Float(1.0)), value.get("c"));
# Ok::<(), acorn_json::Error>(())
```

## What's supported

- `null`, `true`, `false`.
- Integers that fit in an `i64` and decimals with a fractional part, like `-0.5`.
  Exponents aren't supported, and neither are leading zeros like `01`.
- Strings, taken verbatim. Escape sequences aren't decoded.
- Arrays and objects. An object that repeats a key is an error.

Whitespace between tokens is limited to spaces, tabs, and newlines.

## What a document is

A document that starts with `{` ends at its matching `}`, anything after that isn't
read. Any other document is a single value followed by nothing but whitespace.
*/

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

#[macro_use]
mod macros;

pub mod de;
pub mod error;
pub mod lex;
pub mod read;

use std::io;

pub use de::{Options, Parser, Value};
pub use error::{Error, ErrorKind};
pub use lex::{Kind, Lexer, Token};
pub use read::{ByteSource, ReadSource, SliceSource};

/**
Parse a document from a byte source.
*/
pub fn parse(source: impl ByteSource) -> Result<Value, Error> {
    parse_with(source, Options::new())
}

/**
Parse a document from a byte source with the given options.
*/
pub fn parse_with(source: impl ByteSource, options: Options) -> Result<Value, Error> {
    Parser::new(source, options).parse_document()
}

/**
Parse a document from a reader.

The reader is buffered internally so it doesn't need to be.
*/
pub fn parse_reader(reader: impl io::Read) -> Result<Value, Error> {
    parse(ReadSource::new(reader))
}

/**
Parse a document from a string.
*/
pub fn parse_str(input: &str) -> Result<Value, Error> {
    parse_slice(input.as_bytes())
}

/**
Parse a document from a byte buffer.
*/
pub fn parse_slice(input: &[u8]) -> Result<Value, Error> {
    parse(SliceSource::new(input))
}

#[cfg(test)]
mod tests;
