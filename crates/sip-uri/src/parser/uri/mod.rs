// Declare URI sub-modules
pub(crate) mod headers;
pub(crate) mod host;
pub(crate) mod params;
pub(crate) mod userinfo;

pub(crate) use headers::scan_headers;
pub use headers::matches_header;
pub(crate) use params::{is_parameter_list, parameter_pairs};
pub use params::matches_parameter;
pub(crate) use userinfo::split_userinfo;

use nom::{
    branch::alt,
    character::complete::char,
    combinator::{all_consuming, consumed, map, map_res, opt},
    sequence::{pair, terminated, tuple},
};
use std::str;

use crate::parser::ParseResult;

use headers::uri_headers;
use host::{host, port};
use params::uri_parameters;
use userinfo::userinfo;

/// Raw slices of a decomposed opaque body, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SipParts<'a> {
    /// `[ userinfo "@" ] host [ ":" port ]` exactly as written
    pub address: &'a str,
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
    pub parameters: Option<&'a str>,
    pub headers: Option<&'a str>,
}

type Address<'a> = (Option<&'a str>, &'a str, Option<&'a str>);

// address = userinfo "@" host [ ":" port ]
fn address_with_userinfo(input: &[u8]) -> ParseResult<Address<'_>> {
    map(
        tuple((terminated(userinfo, char('@')), host, opt(port))),
        |(user, host, port)| (Some(user), host, port),
    )(input)
}

// address = host [ ":" port ]
fn address_without_userinfo(input: &[u8]) -> ParseResult<Address<'_>> {
    map(pair(host, opt(port)), |(host, port)| (None, host, port))(input)
}

fn sip_body<'a, F>(address: F) -> impl FnMut(&'a [u8]) -> ParseResult<'a, SipParts<'a>>
where
    F: FnMut(&'a [u8]) -> ParseResult<'a, Address<'a>>,
{
    map_res(
        tuple((consumed(address), opt(uri_parameters), opt(uri_headers))),
        |((raw, (userinfo, host, port)), parameters, headers)| {
            str::from_utf8(raw).map(|address| SipParts {
                address,
                userinfo,
                host,
                port,
                parameters,
                headers,
            })
        },
    )
}

// sip-opaque = [ userinfo "@" ] host [ ":" port ] [ ";" parameters ] [ "?" headers ]
//
// Anchored at both ends. The userinfo branch is tried first and the bare-host
// branch only when the whole body fails to match with it.
pub(crate) fn sip_opaque(input: &[u8]) -> ParseResult<SipParts<'_>> {
    alt((
        all_consuming(sip_body(address_with_userinfo)),
        all_consuming(sip_body(address_without_userinfo)),
    ))(input)
}

/// Decomposes a full opaque body, or `None` when it does not match.
pub(crate) fn parse_sip_opaque(opaque: &str) -> Option<SipParts<'_>> {
    sip_opaque(opaque.as_bytes()).ok().map(|(_, parts)| parts)
}

/// Decomposes a bare `[ userinfo "@" ] host [ ":" port ]` address.
pub(crate) fn parse_sip_address(address: &str) -> Option<Address<'_>> {
    alt((
        all_consuming(address_with_userinfo),
        all_consuming(address_without_userinfo),
    ))(address.as_bytes())
    .ok()
    .map(|(_, parsed)| parsed)
}
