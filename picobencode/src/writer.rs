// SPDX-License-Identifier: Apache-2.0

use crate::decimal::Decimal;
use crate::error::WriteError;
use crate::sink::{CountingSink, Sink, SliceSink};
use crate::value::Value;

/// Work-stack capacity used by [`Writer::new`] and [`write`].
pub const DEFAULT_CAPACITY: usize = 768;

/// An entry on the writer's work stack.
#[derive(Debug, Clone, Copy)]
enum Pending<'v> {
    /// A value still to be emitted.
    Node(&'v Value<'v>),
    /// The closing `e` of an already opened list or dictionary.
    End,
}

/// Fixed-capacity LIFO of pending work.
struct WorkStack<'v, const N: usize> {
    items: [Pending<'v>; N],
    len: usize,
}

impl<'v, const N: usize> WorkStack<'v, N> {
    fn new() -> Self {
        Self {
            items: [Pending::End; N],
            len: 0,
        }
    }

    fn push(&mut self, item: Pending<'v>) -> Result<(), WriteError> {
        match self.items.get_mut(self.len) {
            Some(slot) => {
                *slot = item;
                self.len += 1;
                Ok(())
            }
            None => Err(WriteError::CapacityExceeded { capacity: N }),
        }
    }

    /// Fails unless `extra` more items fit.
    fn reserve(&self, extra: usize) -> Result<(), WriteError> {
        match self.len.checked_add(extra) {
            Some(needed) if needed <= N => Ok(()),
            _ => Err(WriteError::CapacityExceeded { capacity: N }),
        }
    }

    fn pop(&mut self) -> Option<Pending<'v>> {
        self.len = self.len.checked_sub(1)?;
        self.items.get(self.len).copied()
    }
}

/// Serializes [`Value`] trees without recursion or allocation.
///
/// The tree is walked depth-first with an explicit stack of `N` entries. At
/// any moment the stack holds every not-yet-emitted member of every open
/// container plus one closing marker per open container, so `N` bounds the
/// combination of nesting depth and breadth, not depth alone. A tree that
/// needs more yields [`WriteError::CapacityExceeded`].
///
/// ```
/// use picobencode::{Value, Writer};
///
/// let entries = [(Value::str("!!"), Value::int(3))];
/// let mut out = [0u8; 16];
/// let len = Writer::new().write(&Value::dict(&entries), &mut out).unwrap();
/// assert_eq!(&out[..len], b"d2:!!i3ee");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Writer<const N: usize = DEFAULT_CAPACITY> {
    _capacity: (),
}

impl Writer<DEFAULT_CAPACITY> {
    /// Creates a writer with [`DEFAULT_CAPACITY`] stack entries.
    pub const fn new() -> Self {
        Self::with_capacity()
    }
}

impl Default for Writer<DEFAULT_CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Writer<N> {
    const VALID_CAPACITY: () = assert!(N > 0, "writer capacity must be at least one item");

    /// Creates a writer with `N` stack entries.
    ///
    /// ```
    /// use picobencode::Writer;
    /// let writer = Writer::<32>::with_capacity();
    /// assert_eq!(writer.capacity(), 32);
    /// ```
    pub const fn with_capacity() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_CAPACITY;
        Self { _capacity: () }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Encodes `root` into `out`, returning the number of bytes written.
    ///
    /// On error the contents of `out` are unspecified.
    pub fn write(&self, root: &Value<'_>, out: &mut [u8]) -> Result<usize, WriteError> {
        let result = self.walk(root, &mut SliceSink::new(out));
        match &result {
            Ok(len) => log::debug!("encoded {} bytes", len),
            Err(err) => log::debug!("encoding failed: {}", err),
        }
        result
    }

    /// Exact number of bytes [`write`](Self::write) would produce for `root`.
    pub fn encoded_len(&self, root: &Value<'_>) -> Result<usize, WriteError> {
        self.walk(root, &mut CountingSink::default())
    }

    fn walk<S: Sink>(&self, root: &Value<'_>, sink: &mut S) -> Result<usize, WriteError> {
        let mut stack = WorkStack::<N>::new();
        stack.push(Pending::Node(root))?;

        while let Some(item) = stack.pop() {
            let node = match item {
                Pending::End => {
                    sink.put_byte(b'e')?;
                    continue;
                }
                Pending::Node(node) => node,
            };
            match node {
                Value::Integer(n) => {
                    sink.put_byte(b'i')?;
                    sink.put(Decimal::signed(*n).as_bytes())?;
                    sink.put_byte(b'e')?;
                }
                Value::Bytes(data) => {
                    sink.put(Decimal::unsigned(data.len() as u64).as_bytes())?;
                    sink.put_byte(b':')?;
                    // Copied by length; content may contain any byte, including 0
                    sink.put(data)?;
                }
                Value::List(items) => {
                    log::trace!("open list of {} items, {} pending", items.len(), stack.len);
                    stack.reserve(node.open_cost())?;
                    sink.put_byte(b'l')?;
                    stack.push(Pending::End)?;
                    // Reversed so that popping yields the original order
                    for item in items.iter().rev() {
                        stack.push(Pending::Node(item))?;
                    }
                }
                Value::Dict(entries) => {
                    log::trace!("open dict of {} entries, {} pending", entries.len(), stack.len);
                    stack.reserve(node.open_cost())?;
                    sink.put_byte(b'd')?;
                    stack.push(Pending::End)?;
                    for (key, value) in entries.iter().rev() {
                        stack.push(Pending::Node(value))?;
                        stack.push(Pending::Node(key))?;
                    }
                }
            }
        }

        Ok(sink.written())
    }
}

/// Encodes `root` into `out` with a default-capacity [`Writer`].
pub fn write(root: &Value<'_>, out: &mut [u8]) -> Result<usize, WriteError> {
    Writer::new().write(root, out)
}

/// Exact encoded size of `root` with a default-capacity [`Writer`].
pub fn encoded_len(root: &Value<'_>) -> Result<usize, WriteError> {
    Writer::new().encoded_len(root)
}
