// SPDX-License-Identifier: Apache-2.0

// The reference corpus: each vector is written, compared byte for byte,
// then read back with zero recorded errors.

mod common;

use common::{assert_reads_back, encode};
use picobencode::{TokenReader, Value};

macro_rules! reference_vectors {
    ($($name:ident: $value:expr => $expected:expr;)*) => {
        $(
            paste::paste! {
                #[test_log::test]
                fn [<write_ $name>]() {
                    let mut out = [0u8; 256];
                    assert_eq!(encode(&$value, &mut out), &$expected[..]);
                }

                #[test_log::test]
                fn [<read_back_ $name>]() {
                    let mut reader = TokenReader::new($expected);
                    assert_reads_back(&$value, &mut reader);
                    assert!(reader.is_empty());
                }
            }
        )*
    };
}

reference_vectors! {
    int_three: Value::int(3) => b"i3e";
    int_zero: Value::int(0) => b"i0e";
    empty_string: Value::bytes(b"") => b"0:";
    bang: Value::str("!") => b"1:!";
    list_of_one: Value::list(&[Value::int(1)]) => b"li1ee";
    empty_list: Value::list(&[]) => b"le";
    empty_dict: Value::dict(&[]) => b"de";
    nested_list: Value::list(&[
        Value::list(&[Value::int(1), Value::int(2)]),
        Value::int(3),
    ]) => b"lli1ei2eei3ee";
    mixed_list: Value::list(&[Value::int(1), Value::str("hi")]) => b"li1e2:hie";
    dict_of_one: Value::dict(&[(Value::str("!!"), Value::int(3))]) => b"d2:!!i3ee";
    embedded_zero: Value::bytes(&[0]) => b"1:\x00";
    int_min: Value::int(i64::MIN) => b"i-9223372036854775808e";
    int_max: Value::int(i64::MAX) => b"i9223372036854775807e";
    negative: Value::int(-42) => b"i-42e";
}
