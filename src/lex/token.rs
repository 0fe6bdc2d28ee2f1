use std::{borrow::Cow, fmt, str};

/**
The kind of a token.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// The bytes between a pair of double quotes.
    Str,
    /// A number without a decimal point.
    Int,
    /// A number with a decimal point.
    Float,
    /// `true` or `false`
    Bool,
    /// `null`
    Null,
    /// The end of the input.
    Eof,
    /// Bytes that don't match any token.
    Invalid,
}

/**
What the lexer should do after reading the first byte of a token.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lead {
    Structural(Token),
    Str,
    True,
    False,
    Null,
    Num,
    Invalid,
}

impl Lead {
    /**
    Classify a token from its first byte.
    */
    #[inline]
    pub(crate) const fn from_byte(b: u8) -> Lead {
        match b {
            b'{' => Lead::Structural(Token::LEFT_BRACE),
            b'}' => Lead::Structural(Token::RIGHT_BRACE),
            b'[' => Lead::Structural(Token::LEFT_BRACKET),
            b']' => Lead::Structural(Token::RIGHT_BRACKET),
            b':' => Lead::Structural(Token::COLON),
            b',' => Lead::Structural(Token::COMMA),
            b'"' => Lead::Str,
            b't' => Lead::True,
            b'f' => Lead::False,
            b'n' => Lead::Null,
            b'-' | b'0'..=b'9' => Lead::Num,
            _ => Lead::Invalid,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::LeftBrace => "`{`",
            Kind::RightBrace => "`}`",
            Kind::LeftBracket => "`[`",
            Kind::RightBracket => "`]`",
            Kind::Colon => "`:`",
            Kind::Comma => "`,`",
            Kind::Str => "string",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::Bool => "boolean",
            Kind::Null => "`null`",
            Kind::Eof => "end of input",
            Kind::Invalid => "invalid token",
        };

        f.write_str(name)
    }
}

/**
A single token produced by the lexer.

Tokens with a fixed literal borrow it statically, so producing them doesn't allocate.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    kind: Kind,
    literal: Cow<'static, [u8]>,
}

impl Token {
    pub const LEFT_BRACE: Token = Token::fixed(Kind::LeftBrace, b"{");
    pub const RIGHT_BRACE: Token = Token::fixed(Kind::RightBrace, b"}");
    pub const LEFT_BRACKET: Token = Token::fixed(Kind::LeftBracket, b"[");
    pub const RIGHT_BRACKET: Token = Token::fixed(Kind::RightBracket, b"]");
    pub const COLON: Token = Token::fixed(Kind::Colon, b":");
    pub const COMMA: Token = Token::fixed(Kind::Comma, b",");
    pub const TRUE: Token = Token::fixed(Kind::Bool, b"true");
    pub const FALSE: Token = Token::fixed(Kind::Bool, b"false");
    pub const NULL: Token = Token::fixed(Kind::Null, b"null");
    pub const EOF: Token = Token::fixed(Kind::Eof, b"EOF");

    const fn fixed(kind: Kind, literal: &'static [u8]) -> Token {
        Token {
            kind,
            literal: Cow::Borrowed(literal),
        }
    }

    /**
    A token with a literal read from the input.
    */
    pub fn new(kind: Kind, literal: impl Into<Vec<u8>>) -> Token {
        Token {
            kind,
            literal: Cow::Owned(literal.into()),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn literal(&self) -> &[u8] {
        &self.literal
    }

    #[inline]
    pub fn into_literal(self) -> Vec<u8> {
        self.literal.into_owned()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match str::from_utf8(&self.literal) {
            Ok(literal) => f.debug_tuple("Token").field(&self.kind).field(&literal).finish(),
            Err(_) => f
                .debug_tuple("Token")
                .field(&self.kind)
                .field(&self.literal)
                .finish(),
        }
    }
}
