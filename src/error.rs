/*!
Errors produced while decoding a document.

Every failure aborts the whole parse. The first error encountered is the one returned.
*/

use std::{borrow::Cow, fmt, io};

use crate::lex::Kind;

/**
An error encountered while decoding a document.
*/
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/**
The kind of failure behind an [`Error`].
*/
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A byte sequence doesn't match any token.
    #[error("invalid token `{}`", Literal(.0))]
    InvalidToken(Vec<u8>),
    /// A token of the wrong kind where a specific one was required.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Kind,
    },
    /// An object contains the same key twice.
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),
    /// Non-whitespace content follows a single value document.
    #[error("trailing content after document, found {0}")]
    TrailingContent(Kind),
    /// A numeric literal doesn't fit its target representation.
    #[error("invalid {target} value `{literal}`")]
    Number {
        literal: String,
        target: &'static str,
    },
    /// A string literal isn't valid UTF-8.
    #[error("string literal is not valid UTF-8")]
    Utf8,
    /// Arrays and objects are nested deeper than allowed.
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimit(usize),
    /// The byte source failed.
    #[error("failed to read input: {0}")]
    Io(#[source] io::Error),
    /// An internal contract was broken. This is a bug, not a problem with the input.
    #[error("internal error: {0}")]
    Unreachable(&'static str),
}

struct Literal<'a>(&'a [u8]);

impl<'a> fmt::Display for Literal<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: Cow<str> = String::from_utf8_lossy(self.0);
        fmt::Display::fmt(&s, f)
    }
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Error { kind }
    }

    pub(crate) fn invalid_token(literal: impl Into<Vec<u8>>) -> Self {
        Error::new(ErrorKind::InvalidToken(literal.into()))
    }

    pub(crate) fn unexpected(expected: &'static str, found: Kind) -> Self {
        Error::new(ErrorKind::UnexpectedToken { expected, found })
    }

    pub(crate) fn unreachable(msg: &'static str) -> Self {
        Error::new(ErrorKind::Unreachable(msg))
    }

    /**
    The kind of failure.
    */
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /**
    Take the kind of failure.
    */
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /**
    Whether this error signals a bug in the decoder rather than a problem with the input.
    */
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ErrorKind::Unreachable(_))
    }

    /**
    Whether this error was caused by the contents of the input.
    */
    pub fn is_input(&self) -> bool {
        !matches!(self.kind, ErrorKind::Unreachable(_) | ErrorKind::Io(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::new(ErrorKind::Io(err))
    }
}
