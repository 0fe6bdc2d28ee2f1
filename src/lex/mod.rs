/*!
Tokenization of a byte source.

The lexer is pull based: each call to [`Lexer::next_token`] skips any whitespace
(spaces, tabs, and newlines) and then reads exactly one token. Malformed input doesn't
fail lexing, it produces a [`Kind::Invalid`] token carrying the bytes that were consumed.
The only errors the lexer returns come from the byte source itself.

# Keyword matching is destructive

When a `t`, `f`, or `n` isn't followed by the rest of `true`, `false`, or `null`,
every byte read while attempting the match stays consumed, including the first
mismatching one. The Invalid token's literal is exactly those bytes, so `nul l`
produces an Invalid token with the literal `nul `.

# Strings aren't unescaped

The bytes between a pair of quotes are taken verbatim. A backslash has no special
meaning, so `"a\"` is a complete string with the literal `a\`.
*/

mod number;
mod token;

use std::io;

use crate::read::ByteSource;

pub use token::{Kind, Token};

use token::Lead;

/**
Reads [`Token`]s from a byte source.
*/
#[derive(Debug)]
pub struct Lexer<S> {
    source: S,
}

impl<S: ByteSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Lexer { source }
    }

    /**
    Take back the underlying byte source.
    */
    pub fn into_inner(self) -> S {
        self.source
    }

    /**
    Read the next token.

    Once the source is exhausted every call returns [`Token::EOF`].
    */
    pub fn next_token(&mut self) -> io::Result<Token> {
        if !self.skip_whitespace()? {
            return Ok(Token::EOF);
        }

        self.read_token_no_whitespace()
    }

    /**
    Consume whitespace.

    Returns whether there are more bytes to read.
    */
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            match self.source.read_byte()? {
                None => return Ok(false),
                Some(b' ' | b'\n' | b'\t') => continue,
                Some(_) => {
                    self.source.unread_byte();
                    return Ok(true);
                }
            }
        }
    }

    fn read_token_no_whitespace(&mut self) -> io::Result<Token> {
        let lead = match self.source.read_byte()? {
            Some(b) => b,
            None => return Ok(Token::EOF),
        };

        match Lead::from_byte(lead) {
            Lead::Structural(token) => Ok(token),
            Lead::Str => self.read_string(),
            Lead::True => self.read_keyword(b"true", Token::TRUE),
            Lead::False => self.read_keyword(b"false", Token::FALSE),
            Lead::Null => self.read_keyword(b"null", Token::NULL),
            Lead::Num => {
                self.source.unread_byte();
                number::read_number(&mut self.source)
            }
            Lead::Invalid => Ok(Token::new(Kind::Invalid, vec![lead])),
        }
    }

    /**
    Match the rest of a keyword whose first byte has already been consumed.
    */
    fn read_keyword(&mut self, keyword: &'static [u8], matched: Token) -> io::Result<Token> {
        test_assert!(!keyword.is_empty());

        for (i, expected) in keyword.iter().enumerate().skip(1) {
            match self.source.read_byte()? {
                Some(b) if b == *expected => continue,
                Some(b) => {
                    let mut literal = keyword[..i].to_vec();
                    literal.push(b);

                    return Ok(Token::new(Kind::Invalid, literal));
                }
                None => return Ok(Token::new(Kind::Invalid, &keyword[..i])),
            }
        }

        Ok(matched)
    }

    /**
    Read the bytes of a string up to its closing quote.

    The opening quote has already been consumed. The closing quote is consumed but
    isn't part of the literal.
    */
    fn read_string(&mut self) -> io::Result<Token> {
        let mut literal = Vec::new();

        loop {
            match self.source.read_byte()? {
                Some(b'"') => return Ok(Token::new(Kind::Str, literal)),
                Some(b) => literal.push(b),
                None => return Ok(Token::new(Kind::Invalid, literal)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::read::SliceSource;

    fn lex(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(SliceSource::new(input.as_bytes()));
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token().unwrap();
            let eof = token == Token::EOF;

            tokens.push(token);

            if eof {
                return tokens;
            }
        }
    }

    fn tok(kind: Kind, literal: &str) -> Token {
        Token::new(kind, literal.as_bytes())
    }

    #[test]
    fn structural_tokens() {
        assert_eq!(
            vec![
                Token::LEFT_BRACE,
                Token::RIGHT_BRACE,
                Token::LEFT_BRACKET,
                Token::RIGHT_BRACKET,
                Token::COMMA,
                Token::COLON,
                Token::EOF,
            ],
            lex("{}[],:")
        );
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(vec![Token::EOF], lex(" \t\n  "));
        assert_eq!(vec![Token::EOF], lex(""));
    }

    #[test]
    fn carriage_return_is_not_whitespace() {
        assert_eq!(vec![tok(Kind::Invalid, "\r"), Token::EOF], lex("\r"));
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new(SliceSource::new(b"1"));

        assert_eq!(tok(Kind::Int, "1"), lexer.next_token().unwrap());
        assert_eq!(Token::EOF, lexer.next_token().unwrap());
        assert_eq!(Token::EOF, lexer.next_token().unwrap());
    }

    #[test]
    fn keywords() {
        assert_eq!(
            vec![Token::NULL, Token::TRUE, Token::FALSE, Token::EOF],
            lex("null true\tfalse")
        );
    }

    #[test]
    fn keywords_are_not_delimited() {
        assert_eq!(vec![Token::TRUE, Token::FALSE, Token::EOF], lex("truefalse"));
    }

    #[test]
    fn keyword_mismatch_consumes_bytes() {
        assert_eq!(
            vec![tok(Kind::Invalid, "nul "), tok(Kind::Invalid, "l"), Token::EOF],
            lex("nul l")
        );
        assert_eq!(vec![tok(Kind::Invalid, "fall"), Token::EOF], lex("fall"));
        assert_eq!(
            vec![tok(Kind::Invalid, "tx"), tok(Kind::Int, "1"), Token::EOF],
            lex("tx1")
        );
    }

    #[test]
    fn keyword_truncated() {
        assert_eq!(vec![tok(Kind::Invalid, "tru"), Token::EOF], lex("tru"));
        assert_eq!(vec![tok(Kind::Invalid, "n"), Token::EOF], lex("n"));
    }

    #[test]
    fn strings() {
        for (input, expected) in [
            (r#""potato""#, tok(Kind::Str, "potato")),
            (r#""123abc123.123abc.""#, tok(Kind::Str, "123abc123.123abc.")),
            (r#""   abc123  abc123   ""#, tok(Kind::Str, "   abc123  abc123   ")),
            (r#""""#, tok(Kind::Str, "")),
            (r#""a\""#, tok(Kind::Str, "a\\")),
            (r#""abc"#, tok(Kind::Invalid, "abc")),
            (r#"""#, tok(Kind::Invalid, "")),
        ] {
            assert_eq!(vec![expected, Token::EOF], lex(input), "lexing `{}`", input);
        }
    }

    #[test]
    fn strings_keep_whitespace_and_bytes() {
        let mut lexer = Lexer::new(SliceSource::new(b"\"\t\n\xff\""));

        assert_eq!(
            Token::new(Kind::Str, &b"\t\n\xff"[..]),
            lexer.next_token().unwrap()
        );
    }

    #[test]
    fn invalid_lead_byte() {
        assert_eq!(
            vec![
                Token::LEFT_BRACE,
                tok(Kind::Invalid, "a"),
                Token::RIGHT_BRACE,
                Token::EOF,
            ],
            lex("{a}")
        );
    }

    #[test]
    fn values_separated_by_whitespace() {
        assert_eq!(
            vec![
                tok(Kind::Str, "a"),
                tok(Kind::Int, "123"),
                Token::TRUE,
                Token::EOF,
            ],
            lex(r#"   "a"   123 true"#)
        );
    }

    #[test]
    fn nested_document() {
        let input = r#"{
            "a": "1",
            "b": 1,
            "c": 1.0,
            "d": {},
            "e": [
                {
                    "z": ["a", 0.15, false, null, true, -12, -0.123]
                }
            ],
            "f": null
        }"#;

        assert_eq!(
            vec![
                Token::LEFT_BRACE,
                tok(Kind::Str, "a"),
                Token::COLON,
                tok(Kind::Str, "1"),
                Token::COMMA,
                tok(Kind::Str, "b"),
                Token::COLON,
                tok(Kind::Int, "1"),
                Token::COMMA,
                tok(Kind::Str, "c"),
                Token::COLON,
                tok(Kind::Float, "1.0"),
                Token::COMMA,
                tok(Kind::Str, "d"),
                Token::COLON,
                Token::LEFT_BRACE,
                Token::RIGHT_BRACE,
                Token::COMMA,
                tok(Kind::Str, "e"),
                Token::COLON,
                Token::LEFT_BRACKET,
                Token::LEFT_BRACE,
                tok(Kind::Str, "z"),
                Token::COLON,
                Token::LEFT_BRACKET,
                tok(Kind::Str, "a"),
                Token::COMMA,
                tok(Kind::Float, "0.15"),
                Token::COMMA,
                Token::FALSE,
                Token::COMMA,
                Token::NULL,
                Token::COMMA,
                Token::TRUE,
                Token::COMMA,
                tok(Kind::Int, "-12"),
                Token::COMMA,
                tok(Kind::Float, "-0.123"),
                Token::RIGHT_BRACKET,
                Token::RIGHT_BRACE,
                Token::RIGHT_BRACKET,
                Token::COMMA,
                tok(Kind::Str, "f"),
                Token::COLON,
                Token::NULL,
                Token::RIGHT_BRACE,
                Token::EOF,
            ],
            lex(input)
        );
    }
}
