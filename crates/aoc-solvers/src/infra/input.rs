//! Puzzle input reading

use std::io::{self, Read};

/// Read all of standard input
pub fn read_stdin() -> io::Result<String> {
    read_all(io::stdin().lock())
}

/// Read everything from `reader` into a string
pub fn read_all<R: Read>(mut reader: R) -> io::Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}
