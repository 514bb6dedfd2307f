// SPDX-License-Identifier: Apache-2.0

/// One syntactic unit pulled from a [`TokenReader`](crate::TokenReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete integer (e.g., `i42e`).
    Integer(i64),
    /// A complete byte string (e.g., `4:spam`), borrowed from the input.
    Bytes(&'a [u8]),
    /// The start of a list (`l`).
    ListStart,
    /// The start of a dictionary (`d`).
    DictStart,
    /// The end of a list or dictionary (`e`).
    End,
}

/// Classification of the next token, decided from its first byte alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Bytes,
    ListStart,
    DictStart,
    End,
    /// A byte that cannot start any token.
    Unknown(u8),
}

impl TokenKind {
    pub(crate) fn classify(byte: u8) -> Self {
        match byte {
            b'i' => TokenKind::Integer,
            b'0'..=b'9' => TokenKind::Bytes,
            b'l' => TokenKind::ListStart,
            b'd' => TokenKind::DictStart,
            b'e' => TokenKind::End,
            other => TokenKind::Unknown(other),
        }
    }
}
