// SPDX-License-Identifier: Apache-2.0

//! An allocation-free, recursion-free [bencode] codec.
//!
//! Everything runs in memory the caller provides: the reader borrows its
//! input, the writer fills a caller-owned output slice, and trees are built
//! from borrowed arrays. Neither half recurses, so stack use is bounded and
//! known up front.
//!
//! * [`Writer`] serializes a [`Value`] tree with a fixed-capacity work stack.
//! * [`TokenReader`] pulls one token at a time; assembling tokens into
//!   whatever shape the application needs is the caller's loop.
//!
//! ```
//! use picobencode::{write, TokenReader, Value};
//!
//! let items = [Value::int(1), Value::str("hi")];
//! let mut out = [0u8; 32];
//! let len = write(&Value::list(&items), &mut out).unwrap();
//! assert_eq!(&out[..len], b"li1e2:hie");
//!
//! let mut reader = TokenReader::new(&out[..len]);
//! assert!(reader.read_list());
//! assert_eq!(reader.read_int(), 1);
//! assert_eq!(reader.read_str(), b"hi");
//! assert!(reader.read_end());
//! assert_eq!(reader.error_count(), 0);
//! ```
//!
//! Integers are signed 64-bit on the wire contract. Key order in
//! dictionaries is neither enforced on write nor required on read.
//!
//! [bencode]: https://www.bittorrent.org/beps/bep_0003.html

#![cfg_attr(not(test), no_std)]

mod decimal;

mod error;
pub use error::{ReadError, ReadErrorKind, WriteError};

mod reader;
pub use reader::TokenReader;

mod sink;

mod token;
pub use token::{Token, TokenKind};

mod value;
pub use value::Value;

mod writer;
pub use writer::{encoded_len, write, Writer, DEFAULT_CAPACITY};
