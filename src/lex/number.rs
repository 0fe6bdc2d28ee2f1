/*!
Scanning and validation of numeric literals.

The accepted grammar is an optional `-`, one or more digits, and optionally a single `.`
followed by one or more digits. Exponents aren't supported. Leading zeros are only
allowed when the zero is the whole integer part, so `0`, `-0`, and `0.5` are fine but
`01` and `-01.5` aren't.
*/

use std::io;

use super::token::{Kind, Token};
use crate::read::ByteSource;

/**
Read a numeric token from the source.

The leading `-` or digit hasn't been consumed yet.
*/
pub(super) fn read_number(source: &mut impl ByteSource) -> io::Result<Token> {
    let (literal, ok) = read_numeric_literal(source)?;

    if !ok || !is_valid_numeric_literal(&literal) {
        return Ok(Token::new(Kind::Invalid, literal));
    }

    let kind = numeric_literal_kind(&literal);

    Ok(Token::new(kind, literal))
}

/**
Accumulate the bytes of a numeric literal.

Returns the literal read and whether scanning succeeded. A failed scan still returns
the bytes it consumed. The byte that ends a literal belongs to the next token
so it's pushed back onto the source.
*/
fn read_numeric_literal(source: &mut impl ByteSource) -> io::Result<(Vec<u8>, bool)> {
    let mut literal = Vec::new();

    match source.read_byte()? {
        Some(b) if b == b'-' || b.is_ascii_digit() => literal.push(b),
        Some(b) => {
            literal.push(b);
            return Ok((literal, false));
        }
        None => return Ok((literal, false)),
    }

    let mut seen_period = false;
    loop {
        match source.read_byte()? {
            // the end of the input also ends the literal
            None => return Ok((literal, true)),
            Some(b'.') if seen_period => {
                literal.push(b'.');
                return Ok((literal, false));
            }
            Some(b'.') => {
                seen_period = true;
                literal.push(b'.');
            }
            Some(b) if b.is_ascii_digit() => literal.push(b),
            Some(_) => {
                source.unread_byte();
                return Ok((literal, true));
            }
        }
    }
}

/**
Check a scanned literal for illegal leading zeros, missing digits, and a trailing `.`.
*/
fn is_valid_numeric_literal(literal: &[u8]) -> bool {
    let digits = match literal {
        [b'-', rest @ ..] => rest,
        _ => literal,
    };

    match digits {
        // a sign without digits, or a decimal point without an integer part
        [] | [b'.', ..] => false,
        [.., b'.'] => false,
        [b'0', next, ..] if *next != b'.' => false,
        _ => true,
    }
}

fn numeric_literal_kind(literal: &[u8]) -> Kind {
    if literal.contains(&b'.') {
        Kind::Float
    } else {
        Kind::Int
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::read::SliceSource;

    fn literal(input: &str) -> (String, bool) {
        let mut source = SliceSource::new(input.as_bytes());
        let (literal, ok) = read_numeric_literal(&mut source).unwrap();

        (String::from_utf8(literal).unwrap(), ok)
    }

    fn token(input: &str) -> Token {
        let mut source = SliceSource::new(input.as_bytes());
        read_number(&mut source).unwrap()
    }

    #[test]
    fn read_literals() {
        for (input, expected, expected_ok) in [
            ("", "", false),
            ("1", "1", true),
            ("1234531231", "1234531231", true),
            ("1.1", "1.1", true),
            ("0.123455", "0.123455", true),
            ("000010.21323", "000010.21323", true),
            (" ", " ", false),
            ("1222.23123.1", "1222.23123.", false),
            ("123abc", "123", true),
            ("-1", "-1", true),
            ("-123.123", "-123.123", true),
            ("-123.123.", "-123.123.", false),
            ("-0.123", "-0.123", true),
        ] {
            assert_eq!(
                (expected.to_owned(), expected_ok),
                literal(input),
                "reading `{}`",
                input
            );
        }
    }

    #[test]
    fn read_tokens() {
        for (input, kind, expected) in [
            ("1", Kind::Int, "1"),
            ("1234531231", Kind::Int, "1234531231"),
            ("1.1", Kind::Float, "1.1"),
            ("0.123455", Kind::Float, "0.123455"),
            ("000010.21323", Kind::Invalid, "000010.21323"),
            ("abc", Kind::Invalid, "a"),
            ("1222.23123.1", Kind::Invalid, "1222.23123."),
            ("123abc", Kind::Int, "123"),
            ("123.", Kind::Invalid, "123."),
            ("-1", Kind::Int, "-1"),
            ("-123.123", Kind::Float, "-123.123"),
            ("-123.123.", Kind::Invalid, "-123.123."),
            ("-0.123", Kind::Float, "-0.123"),
            ("-0", Kind::Int, "-0"),
            ("0", Kind::Int, "0"),
            ("01", Kind::Invalid, "01"),
            ("-01", Kind::Invalid, "-01"),
            ("00.1", Kind::Invalid, "00.1"),
            ("012.3", Kind::Invalid, "012.3"),
            ("-", Kind::Invalid, "-"),
            ("-.5", Kind::Invalid, "-.5"),
        ] {
            assert_eq!(
                Token::new(kind, expected.as_bytes()),
                token(input),
                "reading `{}`",
                input
            );
        }
    }

    #[test]
    fn terminator_is_not_consumed() {
        let mut source = SliceSource::new(b"12,3");

        assert_eq!(Token::new(Kind::Int, &b"12"[..]), read_number(&mut source).unwrap());
        assert_eq!(b",3", source.remaining());
    }

    #[test]
    fn second_period_is_consumed() {
        let mut source = SliceSource::new(b"1.2.3");

        assert_eq!(
            Token::new(Kind::Invalid, &b"1.2."[..]),
            read_number(&mut source).unwrap()
        );
        assert_eq!(b"3", source.remaining());
    }
}
