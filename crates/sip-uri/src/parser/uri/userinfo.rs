use nom::{
    branch::alt,
    bytes::complete::take_while1,
    combinator::{map_res, recognize},
    multi::many0,
};
use std::str;

use crate::parser::common_chars::{escaped, is_unreserved};
use crate::parser::ParseResult;

fn is_userinfo_char(c: u8) -> bool {
    is_unreserved(c) || matches!(c, b';' | b':' | b'&' | b'=' | b'+' | b'$' | b',')
}

// userinfo = *( unreserved / escaped / ";" / ":" / "&" / "=" / "+" / "$" / "," )
// Returns the raw (still escaped) text; may be empty.
pub(crate) fn userinfo(input: &[u8]) -> ParseResult<&str> {
    map_res(
        recognize(many0(alt((escaped, take_while1(is_userinfo_char))))),
        str::from_utf8,
    )(input)
}

/// Splits raw userinfo into `user` and the deprecated `password` at the first ':'.
pub(crate) fn split_userinfo(userinfo: &str) -> (&str, Option<&str>) {
    match userinfo.split_once(':') {
        Some((user, password)) => (user, Some(password)),
        None => (userinfo, None),
    }
}
