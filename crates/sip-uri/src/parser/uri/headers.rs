use nom::{
    bytes::complete::take_while,
    character::complete::char,
    combinator::{all_consuming, map_res, recognize},
    multi::separated_list1,
    sequence::{preceded, separated_pair},
};
use std::str;

use crate::parser::ParseResult;

fn is_header_char(c: u8) -> bool {
    !matches!(c, b'?' | b'=' | b'&')
}

// header = *( any char except "?" / "=" / "&" ) "=" *( any char except "?" / "=" / "&" )
fn header(input: &[u8]) -> ParseResult<(&str, &str)> {
    separated_pair(
        map_res(take_while(is_header_char), str::from_utf8),
        char('='),
        map_res(take_while(is_header_char), str::from_utf8),
    )(input)
}

// headers = header *( "&" header )
fn header_list(input: &[u8]) -> ParseResult<Vec<(&str, &str)>> {
    separated_list1(char('&'), header)(input)
}

// uri-headers = "?" headers
// Returns the list without the leading "?".
pub(crate) fn uri_headers(input: &[u8]) -> ParseResult<&str> {
    preceded(char('?'), map_res(recognize(header_list), str::from_utf8))(input)
}

/// Matches `blob` as a whole against the header list grammar and returns the
/// `(name, value)` segments in order, each split at its only "=".
pub(crate) fn scan_headers(blob: &str) -> Option<Vec<(&str, &str)>> {
    all_consuming(header_list)(blob.as_bytes())
        .ok()
        .map(|(_, pairs)| pairs)
}

/// Returns true when `s` matches a single `name=value` header segment.
pub fn matches_header(s: &str) -> bool {
    all_consuming(header)(s.as_bytes()).is_ok()
}
