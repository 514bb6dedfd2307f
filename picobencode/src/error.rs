// SPDX-License-Identifier: Apache-2.0

/// What went wrong while reading a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorKind {
    /// A required tag, digit or terminator was absent.
    TokenMismatch,
    /// A declared length or a digit run ran past the end of the input.
    Truncated,
    /// A decimal value does not fit the integer type it is read into.
    Overflow,
}

/// An error recorded by [`TokenReader`](crate::TokenReader).
///
/// Carries the offending byte (if the input had one at that point) and the
/// cursor position where the mismatch was detected.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ReadError {
    kind: ReadErrorKind,
    byte: Option<u8>,
    position: usize,
}

impl ReadError {
    pub(crate) fn new<T>(kind: ReadErrorKind, byte: Option<u8>, position: usize) -> Result<T, Self> {
        Err(Self {
            kind,
            byte,
            position,
        })
    }

    pub fn kind(&self) -> ReadErrorKind {
        self.kind
    }

    /// The byte found where something else was expected, `None` at end of input.
    pub fn byte(&self) -> Option<u8> {
        self.byte
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Debug for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.byte {
            Some(b) => write!(f, "{:?}({}) at {}", self.kind, b as char, self.position),
            None => write!(f, "{:?}(<end>) at {}", self.kind, self.position),
        }
    }
}

impl core::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self.kind {
            ReadErrorKind::TokenMismatch => "unexpected token",
            ReadErrorKind::Truncated => "input truncated",
            ReadErrorKind::Overflow => "integer out of range",
        };
        match self.byte {
            Some(b) => write!(f, "{what} at byte {} ({:#04x})", self.position, b),
            None => write!(f, "{what} at byte {} (end of input)", self.position),
        }
    }
}

/// Errors that can occur while serializing a [`Value`](crate::Value) tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// The tree needs more simultaneously pending items than the writer's stack holds.
    CapacityExceeded {
        /// The writer's fixed stack capacity.
        capacity: usize,
    },
    /// The output buffer is too small for the encoding.
    BufferFull {
        /// Bytes successfully written before the buffer ran out.
        written: usize,
    },
}

impl core::fmt::Display for WriteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WriteError::CapacityExceeded { capacity } => {
                write!(f, "work stack capacity of {capacity} items exceeded")
            }
            WriteError::BufferFull { written } => {
                write!(f, "output buffer full after {written} bytes")
            }
        }
    }
}
