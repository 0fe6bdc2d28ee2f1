/*!
Sequential byte sources the lexer pulls from.

A source hands out one byte at a time and can take back the last byte it handed out.
The lexer needs that single byte of push back to end a number without consuming
the first byte of the next token.
*/

use std::io::{self, Read};

/**
A sequential source of bytes with one byte of push back.
*/
pub trait ByteSource {
    /**
    Read the next byte.

    The end of the input is `Ok(None)`, not an error.
    */
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /**
    Push the last byte returned by [`ByteSource::read_byte`] back onto the source.

    Only a single byte can be pushed back between reads. Calling this before any byte
    was read, or twice in a row, does nothing.
    */
    fn unread_byte(&mut self);
}

impl<'a, S: ByteSource + ?Sized> ByteSource for &'a mut S {
    #[inline]
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }

    #[inline]
    fn unread_byte(&mut self) {
        (**self).unread_byte()
    }
}

/**
A byte source over an in-memory buffer.
*/
#[derive(Debug, Clone)]
pub struct SliceSource<'input> {
    input: &'input [u8],
    offset: usize,
    can_unread: bool,
}

impl<'input> SliceSource<'input> {
    pub fn new(input: &'input [u8]) -> Self {
        SliceSource {
            input,
            offset: 0,
            can_unread: false,
        }
    }

    /**
    The number of bytes consumed so far.
    */
    pub fn offset(&self) -> usize {
        self.offset
    }

    /**
    The bytes that haven't been consumed yet.
    */
    pub fn remaining(&self) -> &'input [u8] {
        &self.input[self.offset..]
    }
}

impl<'input> ByteSource for SliceSource<'input> {
    #[inline]
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.input.get(self.offset) {
            Some(b) => {
                self.offset += 1;
                self.can_unread = true;
                Ok(Some(*b))
            }
            None => {
                self.can_unread = false;
                Ok(None)
            }
        }
    }

    #[inline]
    fn unread_byte(&mut self) {
        if self.can_unread {
            self.offset -= 1;
            self.can_unread = false;
        }
    }
}

/**
A buffered byte source over an [`io::Read`].
*/
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
    last: Option<u8>,
    pushed_back: Option<u8>,
}

impl<R: Read> ReadSource<R> {
    const DEFAULT_CAPACITY: usize = 8 * 1024;

    pub fn new(inner: R) -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        ReadSource {
            inner,
            buf: vec![0; capacity.max(1)].into_boxed_slice(),
            pos: 0,
            filled: 0,
            last: None,
            pushed_back: None,
        }
    }

    /**
    Take back the underlying reader.

    Any bytes that were buffered but not consumed are lost.
    */
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> io::Result<bool> {
        loop {
            match self.inner.read(&mut self.buf) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pushed_back.take() {
            self.last = Some(b);
            return Ok(Some(b));
        }

        if self.pos == self.filled && !self.fill()? {
            self.last = None;
            return Ok(None);
        }

        let b = self.buf[self.pos];
        self.pos += 1;
        self.last = Some(b);

        Ok(Some(b))
    }

    fn unread_byte(&mut self) {
        if let Some(b) = self.last.take() {
            self.pushed_back = Some(b);
        }
    }
}
