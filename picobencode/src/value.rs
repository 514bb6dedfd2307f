// SPDX-License-Identifier: Apache-2.0

/// An in-memory bencode value.
///
/// A `Value` never owns anything: byte strings, list members and dict
/// entries are all borrowed from storage the caller built, typically arrays
/// on the stack. This keeps tree construction allocation-free:
///
/// ```
/// use picobencode::Value;
///
/// let inner = [Value::int(1), Value::int(2)];
/// let outer = [Value::list(&inner), Value::int(3)];
/// let root = Value::list(&outer);
/// # let _ = root;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// A signed 64-bit integer, `i<digits>e` on the wire.
    Integer(i64),
    /// An arbitrary binary byte string, `<len>:<bytes>` on the wire.
    Bytes(&'a [u8]),
    /// An ordered sequence of values, `l...e` on the wire.
    List(&'a [Value<'a>]),
    /// Key/value pairs in caller order, `d...e` on the wire.
    ///
    /// Neither key uniqueness nor ordering is enforced, and keys are not
    /// required to be byte strings.
    Dict(&'a [(Value<'a>, Value<'a>)]),
}

impl<'a> Value<'a> {
    pub const fn int(n: i64) -> Self {
        Value::Integer(n)
    }

    pub const fn bytes(data: &'a [u8]) -> Self {
        Value::Bytes(data)
    }

    /// A byte string holding the UTF-8 bytes of `s`.
    pub const fn str(s: &'a str) -> Self {
        Value::Bytes(s.as_bytes())
    }

    pub const fn list(items: &'a [Value<'a>]) -> Self {
        Value::List(items)
    }

    pub const fn dict(entries: &'a [(Value<'a>, Value<'a>)]) -> Self {
        Value::Dict(entries)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Value::Bytes(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [Value<'a>]> {
        match self {
            Value::List(items) => Some(*items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&'a [(Value<'a>, Value<'a>)]> {
        match self {
            Value::Dict(entries) => Some(*entries),
            _ => None,
        }
    }

    /// Number of work-stack slots this value's children occupy once it is
    /// opened: every member plus the closing marker. Atoms occupy none.
    pub(crate) fn open_cost(&self) -> usize {
        match self {
            Value::Integer(_) | Value::Bytes(_) => 0,
            Value::List(items) => items.len().saturating_add(1),
            Value::Dict(entries) => entries.len().saturating_mul(2).saturating_add(1),
        }
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(data: &'a [u8]) -> Self {
        Value::Bytes(data)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Bytes(s.as_bytes())
    }
}
