// Example: build a tree on the stack and encode it into a fixed buffer

use picobencode::{encoded_len, Value, WriteError, Writer};

fn main() -> Result<(), WriteError> {
    let path = [Value::str("docs"), Value::str("readme.txt")];
    let info = [
        (Value::str("length"), Value::int(4096)),
        (Value::str("path"), Value::list(&path)),
        (Value::str("checksum"), Value::bytes(&[0xde, 0xad, 0x00, 0xef])),
    ];
    let root = Value::dict(&info);

    println!("Encoded size: {} bytes", encoded_len(&root)?);

    let mut out = [0u8; 128];
    let len = Writer::new().write(&root, &mut out)?;
    println!("Output: {}", out[..len].escape_ascii());

    // A writer with a tiny stack reports the overflow instead of corrupting memory
    let small = Writer::<4>::with_capacity();
    match small.write(&root, &mut out) {
        Err(e) => println!("With capacity {}: {}", small.capacity(), e),
        Ok(n) => println!("Unexpectedly fit in {} bytes", n),
    }

    Ok(())
}
