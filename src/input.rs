// Stdin handling: buffer everything, split into `\n`-delimited records, and
// check each record is a JSON object. Records stay as borrowed byte slices so
// the publisher sends exactly what was read.
use std::io::{self, Read};

use serde_json::{Map, Value};

/// Read the whole input (stdin in production) into memory.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    Ok(body)
}

/// Lines of `body` in order, ending at the first empty line. Anything after
/// that line is never yielded.
pub fn records(body: &[u8]) -> impl Iterator<Item = &[u8]> {
    body.split(|b| *b == b'\n').take_while(|line| !line.is_empty())
}

/// A record is valid when it decodes as a JSON object or `null`. Invalid
/// UTF-8 is replaced with U+FFFD before decoding. The decoded value is
/// dropped.
pub fn validate(line: &[u8]) -> Result<(), serde_json::Error> {
    let text = String::from_utf8_lossy(line);
    serde_json::from_str::<Option<Map<String, Value>>>(&text).map(|_| ())
}
