// SPDX-License-Identifier: Apache-2.0

use crate::decimal::{digit_value, push_signed_digit, push_unsigned_digit};
use crate::error::{ReadError, ReadErrorKind};
use crate::token::{Token, TokenKind};

/// How a single-byte match treats a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Match {
    /// A miss is an error.
    Required,
    /// A miss is silent and consumes nothing.
    Optional,
}

/// A pull-based token reader over a bencoded byte slice.
///
/// Each call consumes exactly one syntactic token; walking lists and
/// dictionaries is the caller's loop. Two families of calls are offered:
///
/// * `read_*` are best-effort. A mismatch is counted in the session and the
///   call still returns *some* value, continuing past a missing tag where it
///   can. Check [`error_count`](Self::error_count) after a logical unit of
///   reads to decide whether the parse was valid.
/// * `try_read_*` fail fast with a [`ReadError`]. Failures are recorded in the
///   session too, so both styles can be mixed on one reader.
///
/// ```
/// use picobencode::TokenReader;
///
/// let mut reader = TokenReader::new(b"d2:!!i3ee");
/// assert!(reader.read_dict());
/// assert_eq!(reader.read_str(), b"!!");
/// assert_eq!(reader.read_int(), 3);
/// assert!(reader.read_end());
/// assert!(reader.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    data: &'a [u8],
    pos: usize,
    errors: usize,
    first_error: Option<ReadError>,
}

impl<'a> TokenReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    ///
    /// The input is only borrowed; all returned byte strings are views into it.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            errors: 0,
            first_error: None,
        }
    }

    /// Reads a byte string, `<len>:<bytes>`.
    ///
    /// If the declared length runs past the end of input, the error is
    /// counted, the available tail is returned and the cursor moves to the end.
    pub fn read_str(&mut self) -> &'a [u8] {
        let len = self.str_len().map(Some);
        let Some(len) = self.settle(len) else {
            return &[];
        };
        match self.take(len) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.note(err);
                let data = self.data;
                let tail = data.get(self.pos..).unwrap_or(&[]);
                self.pos = data.len();
                tail
            }
        }
    }

    /// Reads a signed integer, `i[+|-]<digits>e`. Returns 0 if the body is malformed.
    pub fn read_int(&mut self) -> i64 {
        let tag = self.tag(b'i');
        self.settle(tag);
        let body = self.signed_body();
        self.settle(body)
    }

    /// Reads a non-negative integer, `i[+|-]<digits>e`, as used for lengths and counts.
    pub fn read_len(&mut self) -> u64 {
        let tag = self.tag(b'i');
        self.settle(tag);
        let body = self.unsigned_body();
        self.settle(body)
    }

    /// Consumes the `l` that opens a list. Returns whether it was present.
    pub fn read_list(&mut self) -> bool {
        let tag = self.tag(b'l').map(|()| true);
        self.settle(tag)
    }

    /// Consumes the `d` that opens a dictionary. Returns whether it was present.
    pub fn read_dict(&mut self) -> bool {
        let tag = self.tag(b'd').map(|()| true);
        self.settle(tag)
    }

    /// Consumes the `e` that closes a list or dictionary. Returns whether it was present.
    pub fn read_end(&mut self) -> bool {
        let tag = self.tag(b'e').map(|()| true);
        self.settle(tag)
    }

    /// Fail-fast [`read_str`](Self::read_str).
    pub fn try_read_str(&mut self) -> Result<&'a [u8], ReadError> {
        let result = self.str_len().and_then(|len| self.take(len));
        self.checked(result)
    }

    /// Fail-fast [`read_int`](Self::read_int).
    pub fn try_read_int(&mut self) -> Result<i64, ReadError> {
        let result = self.tag(b'i').and_then(|()| self.signed_body());
        self.checked(result)
    }

    /// Fail-fast [`read_len`](Self::read_len).
    pub fn try_read_len(&mut self) -> Result<u64, ReadError> {
        let result = self.tag(b'i').and_then(|()| self.unsigned_body());
        self.checked(result)
    }

    /// Fail-fast [`read_list`](Self::read_list).
    pub fn try_read_list(&mut self) -> Result<(), ReadError> {
        let result = self.tag(b'l');
        self.checked(result)
    }

    /// Fail-fast [`read_dict`](Self::read_dict).
    pub fn try_read_dict(&mut self) -> Result<(), ReadError> {
        let result = self.tag(b'd');
        self.checked(result)
    }

    /// Fail-fast [`read_end`](Self::read_end).
    pub fn try_read_end(&mut self) -> Result<(), ReadError> {
        let result = self.tag(b'e');
        self.checked(result)
    }

    /// Classifies the next token without consuming anything. `None` at end of input.
    pub fn peek(&self) -> Option<TokenKind> {
        self.peek_byte().map(TokenKind::classify)
    }

    /// Pulls the next token of whatever kind comes next.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Does not check that
    /// list and dictionary markers balance; that is the caller's business.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, ReadError> {
        let Some(kind) = self.peek() else {
            return Ok(None);
        };
        let token = match kind {
            TokenKind::Integer => Token::Integer(self.try_read_int()?),
            TokenKind::Bytes => Token::Bytes(self.try_read_str()?),
            TokenKind::ListStart => {
                self.try_read_list()?;
                Token::ListStart
            }
            TokenKind::DictStart => {
                self.try_read_dict()?;
                Token::DictStart
            }
            TokenKind::End => {
                self.try_read_end()?;
                Token::End
            }
            TokenKind::Unknown(_) => {
                let result = self.fail(ReadErrorKind::TokenMismatch);
                return self.checked(result);
            }
        };
        log::trace!("token {:?} ends at {}", token, self.pos);
        Ok(Some(token))
    }

    /// Consumes exactly one complete value, however deeply nested.
    ///
    /// Nesting is tracked with a counter, so arbitrarily deep input costs no
    /// extra memory.
    pub fn skip_value(&mut self) -> Result<(), ReadError> {
        let mut depth: usize = 0;
        loop {
            if depth == 0 && self.peek() == Some(TokenKind::End) {
                let result = self.fail(ReadErrorKind::TokenMismatch);
                return self.checked(result);
            }
            match self.next_token()? {
                None => {
                    let result = self.fail(ReadErrorKind::Truncated);
                    return self.checked(result);
                }
                Some(Token::ListStart | Token::DictStart) => depth = depth.saturating_add(1),
                Some(Token::End) => depth = depth.saturating_sub(1),
                Some(Token::Integer(_) | Token::Bytes(_)) => {}
            }
            if depth == 0 {
                return Ok(());
            }
        }
    }

    /// Number of errors recorded so far in this session. Zero means every
    /// read so far was well-formed.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// The first error recorded in this session, if any.
    pub fn first_error(&self) -> Option<ReadError> {
        self.first_error
    }

    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }

    /// Cursor position, in bytes from the start of input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread part of the input.
    pub fn remaining(&self) -> &'a [u8] {
        let data = self.data;
        data.get(self.pos..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn fail<T>(&self, kind: ReadErrorKind) -> Result<T, ReadError> {
        ReadError::new(kind, self.peek_byte(), self.pos)
    }

    /// Consumes one byte from `set`. Nothing is consumed on a miss.
    fn eat_one_of(&mut self, set: &[u8], mode: Match) -> Result<Option<u8>, ReadError> {
        match self.peek_byte() {
            Some(b) if set.contains(&b) => {
                self.pos += 1;
                Ok(Some(b))
            }
            _ if mode == Match::Optional => Ok(None),
            None => self.fail(ReadErrorKind::Truncated),
            Some(_) => self.fail(ReadErrorKind::TokenMismatch),
        }
    }

    fn tag(&mut self, tag: u8) -> Result<(), ReadError> {
        self.eat_one_of(&[tag], Match::Required).map(|_| ())
    }

    /// Consumes an optional sign, returning whether it was `-`.
    fn sign(&mut self) -> Result<bool, ReadError> {
        Ok(self.eat_one_of(b"+-", Match::Optional)? == Some(b'-'))
    }

    /// Consumes `digit+ until`, folding digits with `push`.
    ///
    /// Every digit is consumed even after an overflow so the cursor lands past
    /// the terminator; the overflow is reported at the first digit that caused it.
    fn eat_digit_run<T: Copy>(
        &mut self,
        until: u8,
        init: T,
        push: impl Fn(T, u8) -> Option<T>,
    ) -> Result<T, ReadError> {
        let start = self.pos;
        let mut acc = init;
        let mut overflow_at = None;
        loop {
            match self.peek_byte() {
                None => return self.fail(ReadErrorKind::Truncated),
                Some(b) if b == until => break,
                Some(b) => match digit_value(b) {
                    Some(digit) => {
                        match push(acc, digit) {
                            Some(next) => acc = next,
                            None if overflow_at.is_none() => overflow_at = Some((b, self.pos)),
                            None => {}
                        }
                        self.pos += 1;
                    }
                    None => return self.fail(ReadErrorKind::TokenMismatch),
                },
            }
        }
        if self.pos == start {
            // `until` showed up where the first digit was required
            return self.fail(ReadErrorKind::TokenMismatch);
        }
        self.pos += 1;
        match overflow_at {
            Some((byte, pos)) => ReadError::new(ReadErrorKind::Overflow, Some(byte), pos),
            None => Ok(acc),
        }
    }

    fn signed_body(&mut self) -> Result<i64, ReadError> {
        let negative = self.sign()?;
        self.eat_digit_run(b'e', 0i64, |acc, digit| {
            push_signed_digit(acc, digit, negative)
        })
    }

    fn unsigned_body(&mut self) -> Result<u64, ReadError> {
        let sign_pos = self.pos;
        let negative = self.sign()?;
        let value = self.eat_digit_run(b'e', 0u64, push_unsigned_digit)?;
        if negative && value != 0 {
            return ReadError::new(ReadErrorKind::Overflow, Some(b'-'), sign_pos);
        }
        Ok(value)
    }

    fn str_len(&mut self) -> Result<usize, ReadError> {
        let start = self.pos;
        let len = self.eat_digit_run(b':', 0u64, push_unsigned_digit)?;
        match usize::try_from(len) {
            Ok(len) => Ok(len),
            Err(_) => ReadError::new(
                ReadErrorKind::Overflow,
                self.data.get(start).copied(),
                start,
            ),
        }
    }

    /// Takes exactly `len` bytes, or fails without moving the cursor.
    fn take(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let data = self.data;
        let bytes = self
            .pos
            .checked_add(len)
            .and_then(|end| data.get(self.pos..end));
        match bytes {
            Some(bytes) => {
                self.pos += len;
                Ok(bytes)
            }
            None => ReadError::new(ReadErrorKind::Truncated, None, data.len()),
        }
    }

    fn note(&mut self, err: ReadError) -> ReadError {
        log::warn!("bencode read error: {:?}", err);
        self.errors = self.errors.saturating_add(1);
        if self.first_error.is_none() {
            self.first_error = Some(err);
        }
        err
    }

    fn checked<T>(&mut self, result: Result<T, ReadError>) -> Result<T, ReadError> {
        result.map_err(|err| self.note(err))
    }

    /// Best-effort resolution: records a failure and substitutes the default.
    fn settle<T: Default>(&mut self, result: Result<T, ReadError>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                self.note(err);
                T::default()
            }
        }
    }
}
