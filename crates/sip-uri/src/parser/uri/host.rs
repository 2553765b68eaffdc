use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{map_res, recognize, verify},
    sequence::{delimited, preceded},
};
use std::net::Ipv6Addr;
use std::str;

use crate::parser::ParseResult;

fn is_host_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'.'
}

// domainlabel = alphanum / alphanum *( alphanum / "-" ) alphanum
fn is_domainlabel(label: &[u8]) -> bool {
    match (label.first(), label.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && label.iter().all(|&c| c.is_ascii_alphanumeric() || c == b'-')
        }
        _ => false,
    }
}

// toplabel = ALPHA / ALPHA *( alphanum / "-" ) alphanum
fn is_toplabel(label: &[u8]) -> bool {
    label.first().map_or(false, |c| c.is_ascii_alphabetic()) && is_domainlabel(label)
}

// hostname = *( domainlabel "." ) toplabel [ "." ]
pub(crate) fn is_hostname(run: &[u8]) -> bool {
    let run = run.strip_suffix(b".").unwrap_or(run);
    let mut labels: Vec<&[u8]> = run.split(|&c| c == b'.').collect();
    match labels.pop() {
        Some(top) => is_toplabel(top) && labels.iter().all(|label| is_domainlabel(label)),
        None => false,
    }
}

// IPv4address = 1*digit "." 1*digit "." 1*digit "." 1*digit
pub(crate) fn is_ipv4_shape(run: &[u8]) -> bool {
    let parts: Vec<&[u8]> = run.split(|&c| c == b'.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.iter().all(u8::is_ascii_digit))
}

// IPv6reference = "[" IPv6address "]"
fn ipv6_reference(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(delimited(
        char('['),
        verify(
            take_while1(|c: u8| c.is_ascii_hexdigit() || c == b':' || c == b'.'),
            |inner: &[u8]| {
                str::from_utf8(inner)
                    .ok()
                    .and_then(|s| s.parse::<Ipv6Addr>().ok())
                    .is_some()
            },
        ),
        char(']'),
    ))(input)
}

// Hostnames and IPv4 literals share one character run; the run is taken whole and
// then classified, since whatever follows a host can never be a host character.
fn hostname_or_ipv4(input: &[u8]) -> ParseResult<&[u8]> {
    verify(take_while1(is_host_char), |run: &[u8]| {
        is_ipv4_shape(run) || is_hostname(run)
    })(input)
}

// host = hostname / IPv4address / IPv6reference
pub(crate) fn host(input: &[u8]) -> ParseResult<&str> {
    map_res(alt((ipv6_reference, hostname_or_ipv4)), str::from_utf8)(input)
}

// port = 1*DIGIT, kept raw; range checking happens when the value is stored
pub(crate) fn port(input: &[u8]) -> ParseResult<&str> {
    preceded(char(':'), map_res(digit1, str::from_utf8))(input)
}
