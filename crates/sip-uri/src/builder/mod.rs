//! Building `sip:` URIs from components.
//!
//! The builder assembles an opaque body from either a mailto-style `to` address
//! or the RFC 3261 components (`user`, `password`, `host`, `port`,
//! `parameters`), appends the header list, and hands the result to the same
//! checked constructor used for parsing. The returned [`SipUri`] is therefore
//! always re-derived from its string form.
//!
//! ```rust
//! use sip_uri::prelude::*;
//!
//! // Positional [to, headers] form
//! let uri = build("alice@atlanta.com", vec![("subject", "project x")]).unwrap();
//! assert_eq!(uri.to_string(), "sip:alice@atlanta.com?subject=project%20x");
//!
//! // RFC 3261 components
//! let uri = SipUriBuilder::new()
//!     .with_user("bob")
//!     .with_host("biloxi.com")
//!     .with_port(5060)
//!     .with_parameter("transport", Some("tcp"))
//!     .build()
//!     .unwrap();
//! assert_eq!(uri.to_string(), "sip:bob@biloxi.com:5060;transport=tcp");
//! ```

mod header_input;

pub use header_input::{HeaderEntry, HeaderInput};

use crate::error::{Component, Error, Result};
use crate::types::uri::SipUri;

/// Builds a URI from the positional `[to, headers]` pair.
///
/// ```
/// use sip_uri::build;
///
/// let uri = build("a@x.com", Vec::<(String, String)>::new()).unwrap();
/// assert_eq!(uri.to_string(), "sip:a@x.com");
/// ```
pub fn build(to: impl Into<String>, headers: impl Into<HeaderInput>) -> Result<SipUri> {
    SipUriBuilder::from_pair(to, headers).build()
}

/// Component-wise builder for [`SipUri`].
///
/// `to` and the RFC 3261 components are alternatives: setting both `to` and
/// `host` is an error, as is setting `user`, `password`, `port` or
/// `parameters` without a `host`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SipUriBuilder {
    to: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    parameters: Vec<String>,
    headers: Option<HeaderInput>,
    fragment: Option<String>,
}

impl SipUriBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from the positional `[to, headers]` form
    pub fn from_pair(to: impl Into<String>, headers: impl Into<HeaderInput>) -> Self {
        Self::new().with_to(to).with_headers(headers)
    }

    /// Set the mailto-style address (wire form)
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the user part (wire form)
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password part (deprecated in SIP, wire form)
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the host. Bare IPv6 addresses are bracketed.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Append a `name[=value]` parameter.
    ///
    /// The parameter list as a whole needs at least one `name=value` entry:
    /// flag parameters such as `lr` are accepted next to one (`transport=udp;lr`),
    /// but a list of flags alone does not match the grammar and `build` fails
    /// with [`Error::UnrecognizedOpaquePart`].
    pub fn with_parameter(mut self, name: &str, value: Option<&str>) -> Self {
        self.parameters.push(match value {
            Some(value) => format!("{}={}", name, value),
            None => name.to_string(),
        });
        self
    }

    /// Append a raw `;`-joined parameter list
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters.push(parameters.into());
        self
    }

    /// Set the header list
    pub fn with_headers(mut self, headers: impl Into<HeaderInput>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    fn address(&self) -> Result<String> {
        let has_rfc3261_parts = self.user.is_some()
            || self.password.is_some()
            || self.port.is_some()
            || !self.parameters.is_empty();

        match (&self.to, &self.host) {
            (Some(_), Some(_)) => Err(Error::invalid(
                Component::To,
                "cannot be combined with a host component",
            )),
            (_, None) if has_rfc3261_parts => Err(Error::invalid(
                Component::Host,
                "required when user, password, port or parameters are given",
            )),
            (Some(to), None) => Ok(to.clone()),
            (None, None) => Ok(String::new()),
            (None, Some(host)) => {
                let mut address = String::new();
                if let Some(user) = &self.user {
                    address.push_str(user);
                    if let Some(password) = &self.password {
                        address.push(':');
                        address.push_str(password);
                    }
                    address.push('@');
                } else if let Some(password) = &self.password {
                    address.push(':');
                    address.push_str(password);
                    address.push('@');
                }
                if host.contains(':') && !host.starts_with('[') {
                    address.push('[');
                    address.push_str(host);
                    address.push(']');
                } else {
                    address.push_str(host);
                }
                if let Some(port) = self.port {
                    address.push(':');
                    address.push_str(&port.to_string());
                }
                if !self.parameters.is_empty() {
                    address.push(';');
                    address.push_str(&self.parameters.join(";"));
                }
                Ok(address)
            }
        }
    }

    /// Assembles the opaque body: the address, then `?` and the rendered
    /// header list when it is not empty.
    pub fn opaque(&self) -> Result<String> {
        let mut opaque = self.address()?;
        if let Some(headers) = &self.headers {
            let rendered = headers.render();
            if !rendered.is_empty() {
                opaque.push('?');
                opaque.push_str(&rendered);
            }
        }
        Ok(opaque)
    }

    /// Validates and decomposes the assembled URI
    pub fn build(self) -> Result<SipUri> {
        let opaque = self.opaque()?;
        SipUri::new_checked(opaque, self.fragment)
    }
}
