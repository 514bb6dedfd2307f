// Example: walk a bencoded buffer token by token, then read a malformed one best-effort

use picobencode::{ReadError, Token, TokenReader};

fn main() -> Result<(), ReadError> {
    let input = b"d8:announce13:udp://tracker4:infod6:lengthi4096e4:pathl4:docseee";
    println!("Input: {}", input.escape_ascii());

    let mut reader = TokenReader::new(input);
    let mut depth = 0usize;
    while let Some(token) = reader.next_token()? {
        if token == Token::End {
            depth = depth.saturating_sub(1);
        }
        let indent = "  ".repeat(depth);
        match token {
            Token::DictStart => println!("{indent}dict"),
            Token::ListStart => println!("{indent}list"),
            Token::End => println!("{indent}end"),
            Token::Integer(n) => println!("{indent}int {n}"),
            Token::Bytes(b) => println!("{indent}bytes \"{}\"", b.escape_ascii()),
        }
        if matches!(token, Token::DictStart | Token::ListStart) {
            depth += 1;
        }
    }

    println!();
    let broken = b"d3:keyi12";
    println!("Best-effort read of: {}", broken.escape_ascii());
    let mut reader = TokenReader::new(broken);
    reader.read_dict();
    let key = reader.read_str();
    let value = reader.read_int();
    reader.read_end();
    println!(
        "key={} value={} errors={} first={:?}",
        key.escape_ascii(),
        value,
        reader.error_count(),
        reader.first_error()
    );

    Ok(())
}
