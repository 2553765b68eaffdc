use nom::{
    bytes::complete::take_while,
    character::complete::char,
    combinator::{map_res, verify},
    sequence::preceded,
};
use std::str;

use crate::parser::ParseResult;

// parameter = *( any char except "?" / "=" / "&" ) "=" *( any char except "?" / "=" / "&" )
//
// A parameter may itself contain ";", so "a=b;c=d" could split several ways. A list
// `parameter *( ";" parameter )` exists exactly when there is no "?" or "&", no
// ";"-segment holds more than one "=", and at least one "=" is present.
pub(crate) fn is_parameter_list(blob: &[u8]) -> bool {
    !blob.iter().any(|&c| c == b'?' || c == b'&')
        && blob.contains(&b'=')
        && blob
            .split(|&c| c == b';')
            .all(|segment| segment.iter().filter(|&&c| c == b'=').count() <= 1)
}

/// Returns true when `s` matches a single `name=value` parameter segment.
pub fn matches_parameter(s: &str) -> bool {
    let bytes = s.as_bytes();
    is_parameter_list(bytes) && bytes.iter().filter(|&&c| c == b'=').count() == 1
}

// uri-parameters = ";" parameter *( ";" parameter )
// Returns the list without the leading ";".
pub(crate) fn uri_parameters(input: &[u8]) -> ParseResult<&str> {
    preceded(
        char(';'),
        map_res(
            verify(take_while(|c: u8| c != b'?'), |blob: &[u8]| {
                is_parameter_list(blob)
            }),
            str::from_utf8,
        ),
    )(input)
}

/// Splits a validated parameter list into `name[=value]` items, in order.
pub(crate) fn parameter_pairs(blob: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    blob.split(';')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (segment, None),
        })
}
