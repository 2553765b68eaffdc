// Percent-encoding helpers shared by the parser, builder and mail rendering

use crate::error::{Error, Result};
use crate::parser::common_chars::is_unreserved;

/// Decodes URI percent-encoding (%HH) within a string.
///
/// `+` is left untouched. Fails on truncated or non-hex escapes and on
/// byte sequences that are not UTF-8 once decoded.
pub fn unescape_uri_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut unescaped: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 < bytes.len() {
                    let h1 = bytes[i + 1];
                    let h2 = bytes[i + 2];
                    if let (Some(v1), Some(v2)) = (hex_val(h1), hex_val(h2)) {
                        unescaped.push((v1 << 4) | v2);
                        i += 3;
                    } else {
                        return Err(Error::ParseError(format!(
                            "Invalid hex sequence: %{}{}",
                            h1 as char, h2 as char
                        )));
                    }
                } else {
                    return Err(Error::ParseError(
                        "Incomplete escape sequence at end of input".to_string(),
                    ));
                }
            }
            b => {
                unescaped.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(unescaped)
        .map_err(|e| Error::ParseError(format!("UTF-8 error after URI unescaping: {}", e)))
}

// hnv-unreserved = "[" / "]" / "/" / ":" / "+" / "$"  ("?" can't appear in a header)
fn is_header_safe(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b'[' | b']' | b'/' | b':' | b'+' | b'$')
}

/// Percent-encodes a header name or value so it fits `hname` / `hvalue`.
pub fn escape_header_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);

    for &byte in s.as_bytes() {
        if is_header_safe(byte) {
            result.push(byte as char);
        } else {
            result.push('%');
            result.push_str(&format!("{:02X}", byte));
        }
    }

    result
}

// Helper to convert a hex character (byte) to its value (0-15)
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
