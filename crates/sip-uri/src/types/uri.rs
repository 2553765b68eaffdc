//! # SIP URI value type
//!
//! [`SipUri`] holds one `sip:` URI. The body after `sip:` (the *opaque part*)
//! is decomposed with the anchored grammar
//!
//! ```text
//! [ userinfo "@" ] host [ ":" port ] [ ";" parameters ] [ "?" headers ]
//! ```
//!
//! and exposed through two views of the same state:
//!
//! - the mailto-style view: [`to`](SipUri::to) (the address part,
//!   `[userinfo "@"] host [":" port]`) plus the ordered [`headers`](SipUri::headers);
//! - the RFC 3261 view: [`user`](SipUri::user), [`password`](SipUri::password),
//!   [`host`](SipUri::host), [`port`](SipUri::port) and
//!   [`parameters`](SipUri::parameters).
//!
//! Every constructor runs the decomposition, so both views are always populated.
//! Only [`set_to("")`](SipUri::set_to) leaves an instance without an address,
//! in which case the RFC 3261 view is `None`.
//!
//! ```rust
//! use sip_uri::prelude::*;
//! use std::str::FromStr;
//!
//! let uri = SipUri::from_str("sip:alice@atlanta.com:5060;transport=tcp?subject=project%20x").unwrap();
//! assert_eq!(uri.to(), "alice@atlanta.com:5060");
//! assert_eq!(uri.user(), Some("alice"));
//! assert_eq!(uri.port(), Some(5060));
//! assert_eq!(uri.parameter("transport"), Some("tcp"));
//! assert_eq!(uri.headers(), &[("subject".to_string(), "project%20x".to_string())]);
//! assert_eq!(uri.to_string(), "sip:alice@atlanta.com:5060;transport=tcp?subject=project%20x");
//! ```

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use nom::combinator::all_consuming;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Component, Error, Result};
use crate::parser::common_chars::{is_mailbox_list, is_opaque, is_uric};
use crate::parser::uri::{
    is_parameter_list, parameter_pairs, parse_sip_address, parse_sip_opaque, scan_headers,
    split_userinfo,
};
use crate::parser::uri::host::host as host_parser;
use crate::parser::utils::unescape_uri_component;

/// The host part of a SIP URI.
///
/// Dotted-decimal runs that are not valid IPv4 addresses (e.g. `999.0.0.1`)
/// are still accepted by the grammar and kept as [`Host::Domain`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Host {
    /// A domain name (e.g., "example.com").
    Domain(String),
    /// An IP address (v4 or v6).
    Address(IpAddr),
}

impl Host {
    /// Create a new host from a domain name
    pub fn domain(domain: impl Into<String>) -> Self {
        Host::Domain(domain.into())
    }

    /// Returns true when the host is an IP literal
    pub fn is_ip(&self) -> bool {
        matches!(self, Host::Address(_))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Domain(domain) => f.write_str(domain),
            Host::Address(IpAddr::V4(addr)) => write!(f, "{}", addr),
            Host::Address(IpAddr::V6(addr)) => write!(f, "[{}]", addr),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if all_consuming(host_parser)(s.as_bytes()).is_err() {
            return Err(reject(Component::Host, format!("not a hostname or IP literal: {}", s)));
        }

        if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return inner
                .parse::<Ipv6Addr>()
                .map(|addr| Host::Address(IpAddr::V6(addr)))
                .map_err(|_| reject(Component::Host, format!("invalid IPv6 reference: {}", s)));
        }

        match s.parse::<Ipv4Addr>() {
            Ok(addr) => Ok(Host::Address(IpAddr::V4(addr))),
            Err(_) => Ok(Host::Domain(s.to_string())),
        }
    }
}

impl From<IpAddr> for Host {
    fn from(addr: IpAddr) -> Self {
        Host::Address(addr)
    }
}

fn reject(component: Component, message: impl Into<String>) -> Error {
    let error = Error::invalid(component, message);
    debug!(%component, "rejected sip URI component");
    error
}

/// Checks a candidate `to` value: empty, or opaque characters forming one or
/// more mailbox characters.
pub fn validate_to(to: &str) -> Result<()> {
    if to.is_empty() {
        return Ok(());
    }
    if !is_opaque(to) {
        return Err(reject(Component::To, format!("expected opaque component: {}", to)));
    }
    if !is_mailbox_list(to) {
        return Err(reject(Component::To, format!("expected mailbox address: {}", to)));
    }
    Ok(())
}

/// Checks a candidate header list: empty, or opaque characters forming
/// `name=value` segments separated by `&`.
pub fn validate_headers(headers: &str) -> Result<()> {
    if headers.is_empty() {
        return Ok(());
    }
    if !is_opaque(headers) {
        return Err(reject(
            Component::Headers,
            format!("expected opaque component: {}", headers),
        ));
    }
    if scan_headers(headers).is_none() {
        return Err(reject(
            Component::Headers,
            format!("expected name=value pairs joined by '&': {}", headers),
        ));
    }
    Ok(())
}

fn check_port(port: &str) -> Result<u16> {
    port.parse::<u16>()
        .map_err(|_| reject(Component::Port, format!("not a port number: {}", port)))
}

fn check_parameters(parameters: &str) -> Result<()> {
    if !is_uric(parameters) || !is_parameter_list(parameters.as_bytes()) {
        return Err(reject(
            Component::Parameters,
            format!("expected name=value parameters joined by ';': {}", parameters),
        ));
    }
    Ok(())
}

fn check_fragment(fragment: &str) -> Result<()> {
    if !is_uric(fragment) {
        return Err(reject(Component::Fragment, format!("invalid fragment: {}", fragment)));
    }
    Ok(())
}

/// A `sip:` URI.
///
/// Header names and values are kept in their wire (percent-encoded) form;
/// [`decoded_headers`](SipUri::decoded_headers) and [`header`](SipUri::header)
/// decode on access.
///
/// Instances serialize (serde) as their string form and deserializing runs the
/// same validation as [`FromStr`]. A URI whose address was cleared with
/// `set_to("")` serializes as `sip:?...` and does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SipUri {
    opaque: String,
    to: String,
    headers: Vec<(String, String)>,
    fragment: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<Host>,
    port: Option<u16>,
    parameters: Option<String>,
}

impl SipUri {
    /// The scheme handled by this type
    pub const SCHEME: &'static str = "sip";

    /// sip: URIs have no implicit port
    pub const DEFAULT_PORT: Option<u16> = None;

    /// Component names making up a sip: URI
    pub const COMPONENTS: &'static [&'static str] =
        &["scheme", "user", "host", "port", "parameters", "headers"];

    fn empty(opaque: String, fragment: Option<String>) -> Self {
        SipUri {
            opaque,
            to: String::new(),
            headers: Vec::new(),
            fragment,
            user: None,
            password: None,
            host: None,
            port: None,
            parameters: None,
        }
    }

    /// Creates a URI directly from an opaque body, without the generic
    /// character-class check.
    ///
    /// The body must match the SIP grammar as a whole, otherwise
    /// [`Error::UnrecognizedOpaquePart`] is returned; each component is then
    /// validated as it is stored.
    ///
    /// ```
    /// use sip_uri::{Error, SipUri};
    ///
    /// let uri = SipUri::from_opaque("bob@biloxi.com", None).unwrap();
    /// assert_eq!(uri.host().map(|h| h.to_string()), Some("biloxi.com".to_string()));
    ///
    /// assert!(matches!(
    ///     SipUri::from_opaque("###", None),
    ///     Err(Error::UnrecognizedOpaquePart(_))
    /// ));
    /// ```
    pub fn from_opaque(opaque: impl Into<String>, fragment: Option<&str>) -> Result<Self> {
        let mut uri = SipUri::empty(opaque.into(), fragment.map(str::to_string));
        uri.decompose()?;
        Ok(uri)
    }

    /// Generic-layer construction: validates the opaque body and fragment
    /// character classes, then decomposes.
    pub(crate) fn new_checked(opaque: String, fragment: Option<String>) -> Result<Self> {
        if !is_opaque(&opaque) {
            debug!("opaque part failed the character-class check");
            return Err(Error::InvalidOpaque(opaque));
        }
        if let Some(fragment) = fragment.as_deref() {
            check_fragment(fragment)?;
        }
        let mut uri = SipUri::empty(opaque, fragment);
        uri.decompose()?;
        Ok(uri)
    }

    fn decompose(&mut self) -> Result<()> {
        self.headers.clear();

        let opaque = self.opaque.clone();
        let parts = match parse_sip_opaque(&opaque) {
            Some(parts) => parts,
            None => {
                debug!("opaque part does not match the sip grammar");
                return Err(Error::UnrecognizedOpaquePart(opaque));
            }
        };

        let (user, password) = match parts.userinfo.map(split_userinfo) {
            Some((user, password)) => (Some(user.to_string()), password.map(str::to_string)),
            None => (None, None),
        };
        let host = parts.host.parse::<Host>()?;
        let port = parts.port.map(check_port).transpose()?;
        if let Some(parameters) = parts.parameters {
            check_parameters(parameters)?;
        }
        let headers = parts.headers.unwrap_or("");
        validate_headers(headers)?;

        self.user = user;
        self.password = password;
        self.host = Some(host);
        self.port = port;
        self.parameters = parts.parameters.map(str::to_string);
        self.headers = scan_header_pairs(headers);
        self.to = parts.address.to_string();
        Ok(())
    }

    fn regenerate_opaque(&mut self) {
        self.opaque = compose_opaque(&self.to, self.parameters.as_deref(), &self.headers);
    }

    /// Always `"sip"`
    pub fn scheme(&self) -> &'static str {
        Self::SCHEME
    }

    /// The opaque body after `sip:` and before any fragment
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    /// The address part, `[userinfo "@"] host [":" port]`, in wire form
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Header pairs in wire (percent-encoded) form, in URI order
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Header pairs with names and values percent-decoded, in URI order
    pub fn decoded_headers(&self) -> Result<Vec<(String, String)>> {
        self.headers
            .iter()
            .map(|(name, value)| -> Result<(String, String)> {
                Ok((unescape_uri_component(name)?, unescape_uri_component(value)?))
            })
            .collect()
    }

    /// The decoded value of the first header whose decoded name matches
    /// `name` case-insensitively
    pub fn header(&self, name: &str) -> Result<Option<String>> {
        for (raw_name, raw_value) in &self.headers {
            if unescape_uri_component(raw_name)?.eq_ignore_ascii_case(name) {
                return unescape_uri_component(raw_value).map(Some);
            }
        }
        Ok(None)
    }

    /// The fragment after `#`, if any
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// The user part of the userinfo, in wire form
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// The password part of the userinfo (deprecated in SIP), in wire form
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The raw parameter list without the leading `;`
    pub fn parameters(&self) -> Option<&str> {
        self.parameters.as_deref()
    }

    /// Parameters as `name[=value]` items, in URI order
    pub fn parameter_pairs(&self) -> Vec<(&str, Option<&str>)> {
        self.parameters
            .as_deref()
            .map(|blob| parameter_pairs(blob).collect())
            .unwrap_or_default()
    }

    /// Looks up a parameter by name (case-insensitive). Flag parameters such
    /// as `lr` yield `Some("")`.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.as_deref().and_then(|blob| {
            parameter_pairs(blob)
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.unwrap_or(""))
        })
    }

    /// Replaces the address part.
    ///
    /// The value must be empty or satisfy the opaque class and the mailbox
    /// grammar. A non-empty value must also be a `[userinfo "@"] host [":" port]`
    /// address; the RFC 3261 view is re-derived from it and existing parameters
    /// and headers are kept. The new opaque body must decompose back into the
    /// same address and parameters: with a parameter such as `maddr=a@b.org`,
    /// an address without userinfo would turn the parameter into userinfo and
    /// is rejected.
    ///
    /// An empty value clears the address and parameters. Such a URI renders as
    /// `sip:?name=value` and cannot be parsed back (or deserialized), since the
    /// grammar requires a host.
    ///
    /// On error the URI is left unchanged.
    pub fn set_to(&mut self, to: &str) -> Result<()> {
        validate_to(to)?;

        if to.is_empty() {
            self.to.clear();
            self.user = None;
            self.password = None;
            self.host = None;
            self.port = None;
            self.parameters = None;
            self.regenerate_opaque();
            return Ok(());
        }

        if parse_sip_address(to).is_none() {
            return Err(reject(Component::To, format!("not a sip address: {}", to)));
        }

        let opaque = compose_opaque(to, self.parameters.as_deref(), &self.headers);
        let candidate = match SipUri::from_opaque(opaque, self.fragment.as_deref()) {
            Ok(candidate) => candidate,
            Err(Error::UnrecognizedOpaquePart(_)) => {
                return Err(reject(Component::To, format!("not a sip address: {}", to)));
            }
            Err(e) => return Err(e),
        };
        if candidate.to != to
            || candidate.parameters != self.parameters
            || candidate.headers != self.headers
        {
            return Err(reject(
                Component::To,
                format!("address changes how the parameters parse: {}", to),
            ));
        }

        *self = candidate;
        Ok(())
    }

    /// Replaces the header list with `headers` in wire form
    /// (`name=value&name=value`); empty clears it. On error the URI is left
    /// unchanged.
    pub fn set_headers(&mut self, headers: &str) -> Result<()> {
        validate_headers(headers)?;
        self.headers = scan_header_pairs(headers);
        self.regenerate_opaque();
        Ok(())
    }

    /// Replaces the fragment; the value must consist of `uric` characters
    pub fn set_fragment(&mut self, fragment: Option<&str>) -> Result<()> {
        if let Some(fragment) = fragment {
            check_fragment(fragment)?;
        }
        self.fragment = fragment.map(str::to_string);
        Ok(())
    }
}

fn join_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}

// to [ ";" parameters ] [ "?" headers ]
fn compose_opaque(to: &str, parameters: Option<&str>, headers: &[(String, String)]) -> String {
    let mut opaque = to.to_string();
    if let Some(parameters) = parameters {
        opaque.push(';');
        opaque.push_str(parameters);
    }
    if !headers.is_empty() {
        opaque.push('?');
        opaque.push_str(&join_headers(headers));
    }
    opaque
}

// Caller has already validated the list.
fn scan_header_pairs(headers: &str) -> Vec<(String, String)> {
    if headers.is_empty() {
        return Vec::new();
    }
    scan_headers(headers)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::SCHEME, self.to)?;

        if let Some(parameters) = &self.parameters {
            write!(f, ";{}", parameters)?;
        }

        if !self.headers.is_empty() {
            write!(f, "?{}", join_headers(&self.headers))?;
        }

        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }

        Ok(())
    }
}

impl FromStr for SipUri {
    type Err = Error;

    /// Parses a literal `sip:` URI. The scheme is matched case-insensitively
    /// and the fragment starts at the first `#`.
    fn from_str(s: &str) -> Result<Self> {
        let rest = match s.split_once(':') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case(Self::SCHEME) => rest,
            _ => return Err(Error::InvalidScheme(s.to_string())),
        };

        let (opaque, fragment) = match rest.split_once('#') {
            Some((opaque, fragment)) => (opaque, Some(fragment.to_string())),
            None => (rest, None),
        };

        SipUri::new_checked(opaque.to_string(), fragment)
    }
}

impl TryFrom<String> for SipUri {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SipUri> for String {
    fn from(uri: SipUri) -> Self {
        uri.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_opaque_populates_both_views() {
        let uri = SipUri::from_opaque("alice:secret@atlanta.com:5060;transport=udp?subject=hi", None)
            .unwrap();
        assert_eq!(uri.scheme(), "sip");
        assert_eq!(uri.to(), "alice:secret@atlanta.com:5060");
        assert_eq!(uri.user(), Some("alice"));
        assert_eq!(uri.password(), Some("secret"));
        assert_eq!(uri.host(), Some(&Host::domain("atlanta.com")));
        assert_eq!(uri.port(), Some(5060));
        assert_eq!(uri.parameters(), Some("transport=udp"));
        assert_eq!(uri.headers(), &[("subject".to_string(), "hi".to_string())]);
    }

    #[test]
    fn test_from_opaque_unrecognised() {
        let err = SipUri::from_opaque("###", None).unwrap_err();
        assert_eq!(err, Error::UnrecognizedOpaquePart("###".to_string()));
    }

    #[test]
    fn test_mailto_style_body_without_host_is_unrecognised() {
        // There is no positional to/headers fallback: a body with no host fails outright.
        let err = SipUri::from_opaque("?subject=hi", None).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedOpaquePart(_)));
    }

    #[test]
    fn test_from_opaque_component_checks() {
        let err = SipUri::from_opaque("a@x.com:70000", None).unwrap_err();
        assert_eq!(err.component(), Some(Component::Port));

        let err = SipUri::from_opaque("a@x.com;a=b c", None).unwrap_err();
        assert_eq!(err.component(), Some(Component::Parameters));

        let err = SipUri::from_opaque("a@x.com?subject=hello world", None).unwrap_err();
        assert_eq!(err.component(), Some(Component::Headers));
    }

    #[test]
    fn test_host_variants() {
        assert_eq!(
            "192.0.2.1".parse::<Host>().unwrap(),
            Host::Address("192.0.2.1".parse().unwrap())
        );
        assert_eq!(
            "[2001:db8::1]".parse::<Host>().unwrap(),
            Host::Address("2001:db8::1".parse().unwrap())
        );
        assert_eq!("999.0.0.1".parse::<Host>().unwrap(), Host::domain("999.0.0.1"));
        assert_eq!("[2001:db8::1]".parse::<Host>().unwrap().to_string(), "[2001:db8::1]");
        assert!("bad host".parse::<Host>().is_err());
        assert!("2001:db8::1".parse::<Host>().is_err());
    }

    #[test]
    fn test_set_to_rederives_address() {
        let mut uri = SipUri::from_opaque("alice@atlanta.com;transport=tcp?subject=hi", None).unwrap();
        uri.set_to("bob@biloxi.com:5062").unwrap();
        assert_eq!(uri.user(), Some("bob"));
        assert_eq!(uri.host(), Some(&Host::domain("biloxi.com")));
        assert_eq!(uri.port(), Some(5062));
        assert_eq!(uri.parameters(), Some("transport=tcp"));
        assert_eq!(uri.opaque(), "bob@biloxi.com:5062;transport=tcp?subject=hi");
        assert_eq!(uri.to_string(), "sip:bob@biloxi.com:5062;transport=tcp?subject=hi");
    }

    #[test]
    fn test_set_to_rejects_and_keeps_state() {
        let mut uri = SipUri::from_opaque("alice@atlanta.com", None).unwrap();
        let before = uri.clone();

        let err = uri.set_to("a?b").unwrap_err();
        assert_eq!(err.component(), Some(Component::To));
        assert!(uri.set_to("a=b@x.com").is_err());
        assert!(uri.set_to("a&b@x.com").is_err());
        assert!(uri.set_to("not a uri").is_err());
        assert!(uri.set_to("a,b@x.com,c@y.com").is_err());
        assert_eq!(uri, before);
    }

    #[test]
    fn test_set_to_rejects_address_that_moves_parameters_into_userinfo() {
        let mut uri = SipUri::from_opaque("u@h.org;p=a@c.org?s=1", None).unwrap();
        let before = uri.clone();

        let err = uri.set_to("h.org").unwrap_err();
        assert_eq!(err.component(), Some(Component::To));
        assert_eq!(uri, before);

        uri.set_to("v@h.org").unwrap();
        assert_eq!(uri.parameters(), Some("p=a@c.org"));
        assert_eq!(SipUri::from_opaque(uri.opaque().to_string(), None).unwrap(), uri);
    }

    #[test]
    fn test_set_to_reports_port_errors() {
        let mut uri = SipUri::from_opaque("alice@atlanta.com", None).unwrap();
        let err = uri.set_to("alice@atlanta.com:70000").unwrap_err();
        assert_eq!(err.component(), Some(Component::Port));
        assert_eq!(uri.to(), "alice@atlanta.com");
    }

    #[test]
    fn test_userinfo_escapes_stay_raw() {
        let uri = SipUri::from_opaque("j%40s0n:p%3Aw@atlanta.com", None).unwrap();
        assert_eq!(uri.user(), Some("j%40s0n"));
        assert_eq!(uri.password(), Some("p%3Aw"));
    }

    #[test]
    fn test_scheme_constants() {
        assert_eq!(SipUri::DEFAULT_PORT, None);
        assert_eq!(
            SipUri::COMPONENTS,
            &["scheme", "user", "host", "port", "parameters", "headers"]
        );

        let uri = SipUri::from_opaque("alice@atlanta.com", None).unwrap();
        assert_eq!(uri.port(), SipUri::DEFAULT_PORT);
    }

    #[test]
    fn test_host_from_ip_addr() {
        let addr: IpAddr = "2001:db8::1".parse().unwrap();
        let host = Host::from(addr);
        assert!(host.is_ip());
        assert_eq!(host.to_string(), "[2001:db8::1]");
        assert_eq!(host.to_string().parse::<Host>().unwrap(), host);
    }

    #[test]
    fn test_set_to_empty_clears_address() {
        let mut uri = SipUri::from_opaque("alice@atlanta.com;lr=1?subject=hi", None).unwrap();
        uri.set_to("").unwrap();
        assert_eq!(uri.to(), "");
        assert_eq!(uri.user(), None);
        assert_eq!(uri.host(), None);
        assert_eq!(uri.parameters(), None);
        assert_eq!(uri.opaque(), "?subject=hi");
        assert_eq!(uri.to_string(), "sip:?subject=hi");

        // No host left, so the rendered form does not parse back
        assert!(matches!(
            uri.to_string().parse::<SipUri>(),
            Err(Error::UnrecognizedOpaquePart(_))
        ));
    }

    #[test]
    fn test_set_headers_regenerates_opaque() {
        let mut uri = SipUri::from_opaque("alice@atlanta.com", None).unwrap();
        uri.set_headers("subject=hi&priority=urgent&x=a%3Db").unwrap();
        assert_eq!(
            uri.headers(),
            &[
                ("subject".to_string(), "hi".to_string()),
                ("priority".to_string(), "urgent".to_string()),
                ("x".to_string(), "a%3Db".to_string()),
            ]
        );
        assert_eq!(uri.opaque(), "alice@atlanta.com?subject=hi&priority=urgent&x=a%3Db");

        uri.set_headers("").unwrap();
        assert!(uri.headers().is_empty());
        assert_eq!(uri.opaque(), "alice@atlanta.com");
    }

    #[test]
    fn test_set_headers_rejects() {
        let mut uri = SipUri::from_opaque("alice@atlanta.com?subject=hi", None).unwrap();
        assert!(uri.set_headers("subject").is_err());
        assert!(uri.set_headers("a=b=c").is_err());
        assert!(uri.set_headers("a=b&&c=d").is_err());
        assert!(uri.set_headers("subject=hello world").is_err());
        assert_eq!(uri.headers().len(), 1);
    }

    #[test]
    fn test_parameter_lookup() {
        let uri = SipUri::from_opaque("alice@atlanta.com;lr;Transport=TCP;maddr=", None).unwrap();
        assert_eq!(uri.parameter("transport"), Some("TCP"));
        assert_eq!(uri.parameter("lr"), Some(""));
        assert_eq!(uri.parameter("maddr"), Some(""));
        assert_eq!(uri.parameter("ttl"), None);
        assert_eq!(uri.parameter_pairs().len(), 3);
    }

    #[test]
    fn test_header_lookup_decodes() {
        let uri = SipUri::from_opaque("a@x.com?Subject=project%20x&subject=second", None).unwrap();
        assert_eq!(uri.header("subject").unwrap(), Some("project x".to_string()));
        assert_eq!(uri.header("priority").unwrap(), None);
    }

    #[test]
    fn test_fragment() {
        let mut uri: SipUri = "sip:a@x.com?subject=hi#top".parse().unwrap();
        assert_eq!(uri.fragment(), Some("top"));
        assert_eq!(uri.opaque(), "a@x.com?subject=hi");
        assert_eq!(uri.to_string(), "sip:a@x.com?subject=hi#top");

        assert!(uri.set_fragment(Some("a#b")).is_err());
        uri.set_fragment(None).unwrap();
        assert_eq!(uri.to_string(), "sip:a@x.com?subject=hi");
    }

    #[test]
    fn test_from_str_scheme_checks() {
        assert!("SIP:a@x.com".parse::<SipUri>().is_ok());
        assert!(matches!("sips:a@x.com".parse::<SipUri>(), Err(Error::InvalidScheme(_))));
        assert!(matches!("a@x.com".parse::<SipUri>(), Err(Error::InvalidScheme(_))));
        assert!(matches!("sip:a b@x.com".parse::<SipUri>(), Err(Error::InvalidOpaque(_))));
        assert!(matches!("sip:".parse::<SipUri>(), Err(Error::InvalidOpaque(_))));
    }

    #[test]
    fn test_validate_functions() {
        assert!(validate_to("").is_ok());
        assert!(validate_to("a@x.com,b@y.org").is_ok());
        assert!(validate_to("/a@x.com").is_err());
        assert!(validate_headers("").is_ok());
        assert!(validate_headers("a=1&b=2").is_ok());
        assert!(validate_headers("a=1&b").is_err());
    }
}
