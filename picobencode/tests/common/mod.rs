// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use picobencode::{TokenReader, Value};

enum Expect<'v> {
    Node(&'v Value<'v>),
    End,
}

/// Reads `value` back token by token and asserts every token matches.
///
/// Walks the expected tree with an explicit stack, the same way the writer
/// does, so deep test trees do not recurse.
pub fn assert_reads_back(value: &Value<'_>, reader: &mut TokenReader<'_>) {
    let mut stack = vec![Expect::Node(value)];
    while let Some(expect) = stack.pop() {
        match expect {
            Expect::End => assert!(reader.read_end(), "missing end at {}", reader.position()),
            Expect::Node(Value::Integer(n)) => assert_eq!(reader.read_int(), *n),
            Expect::Node(Value::Bytes(b)) => assert_eq!(reader.read_str(), *b),
            Expect::Node(Value::List(items)) => {
                assert!(reader.read_list(), "missing list at {}", reader.position());
                stack.push(Expect::End);
                stack.extend(items.iter().rev().map(Expect::Node));
            }
            Expect::Node(Value::Dict(entries)) => {
                assert!(reader.read_dict(), "missing dict at {}", reader.position());
                stack.push(Expect::End);
                for (key, value) in entries.iter().rev() {
                    stack.push(Expect::Node(value));
                    stack.push(Expect::Node(key));
                }
            }
        }
    }
    assert_eq!(
        reader.error_count(),
        0,
        "unexpected read errors, first: {:?}",
        reader.first_error()
    );
}

/// Writes `value` into `out` and returns the encoded prefix.
pub fn encode<'o>(value: &Value<'_>, out: &'o mut [u8]) -> &'o [u8] {
    let len = picobencode::write(value, out).expect("value should encode");
    &out[..len]
}
