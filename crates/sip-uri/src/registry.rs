//! Scheme-to-handler dispatch.
//!
//! A [`SchemeRegistry`] is built once by the caller and owned by whatever does
//! URI parsing; there is no process-wide table.
//!
//! ```rust
//! use sip_uri::{SchemeRegistry, SipUri};
//!
//! let registry = SchemeRegistry::new().with_sip();
//! let uri = registry.parse("sip:alice@atlanta.com?subject=hi").unwrap();
//! assert_eq!(uri.scheme(), "sip");
//!
//! let sip = uri.as_any().downcast_ref::<SipUri>().unwrap();
//! assert_eq!(sip.to(), "alice@atlanta.com");
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::types::uri::SipUri;

/// Common surface of a parsed URI, whatever its scheme.
pub trait UriScheme: fmt::Display + fmt::Debug + Send + Sync {
    /// Lowercase scheme name
    fn scheme(&self) -> &str;

    /// The body after `scheme:` and before any fragment
    fn opaque(&self) -> &str;

    fn fragment(&self) -> Option<&str>;

    /// Access to the concrete type for downcasting
    fn as_any(&self) -> &dyn Any;
}

impl UriScheme for SipUri {
    fn scheme(&self) -> &str {
        SipUri::SCHEME
    }

    fn opaque(&self) -> &str {
        SipUri::opaque(self)
    }

    fn fragment(&self) -> Option<&str> {
        SipUri::fragment(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Parses a complete URI string of one scheme
pub type SchemeParser = fn(&str) -> Result<Box<dyn UriScheme>>;

fn parse_sip(input: &str) -> Result<Box<dyn UriScheme>> {
    Ok(Box::new(input.parse::<SipUri>()?))
}

/// Maps scheme names (case-insensitive) to their parsers.
#[derive(Clone)]
pub struct SchemeRegistry {
    handlers: HashMap<String, SchemeParser>,
}

impl SchemeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        SchemeRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Registers `parser` for `scheme`, replacing any earlier handler
    pub fn with_scheme(mut self, scheme: &str, parser: SchemeParser) -> Self {
        let key = scheme.to_ascii_uppercase();
        trace!(scheme = %key, "registering URI scheme handler");
        self.handlers.insert(key, parser);
        self
    }

    /// Registers the `sip` handler under `"SIP"`
    pub fn with_sip(self) -> Self {
        self.with_scheme(SipUri::SCHEME, parse_sip)
    }

    pub fn is_registered(&self, scheme: &str) -> bool {
        self.handlers.contains_key(&scheme.to_ascii_uppercase())
    }

    /// Registered scheme names, upper-cased, in no particular order
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Dispatches `input` to the handler for its scheme
    pub fn parse(&self, input: &str) -> Result<Box<dyn UriScheme>> {
        let scheme = match input.split_once(':') {
            Some((scheme, _)) if is_scheme_name(scheme) => scheme,
            _ => return Err(Error::MissingScheme(input.to_string())),
        };

        match self.handlers.get(&scheme.to_ascii_uppercase()) {
            Some(parser) => parser(input),
            None => Err(Error::UnsupportedScheme(scheme.to_string())),
        }
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        SchemeRegistry::new().with_sip()
    }
}

impl fmt::Debug for SchemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut schemes: Vec<&str> = self.schemes().collect();
        schemes.sort_unstable();
        f.debug_struct("SchemeRegistry").field("schemes", &schemes).finish()
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme_name(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            bytes.all(|c| c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_rejects_sip() {
        let registry = SchemeRegistry::new();
        assert!(!registry.is_registered("sip"));
        assert!(matches!(
            registry.parse("sip:a@x.com"),
            Err(Error::UnsupportedScheme(s)) if s == "sip"
        ));
    }

    #[test]
    fn test_default_registers_sip_uppercase() {
        let registry = SchemeRegistry::default();
        assert!(registry.is_registered("sip"));
        assert!(registry.is_registered("SIP"));
        assert_eq!(registry.schemes().collect::<Vec<_>>(), vec!["SIP"]);
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let registry = SchemeRegistry::default();
        let uri = registry.parse("SIP:bob@biloxi.com#f").unwrap();
        assert_eq!(uri.scheme(), "sip");
        assert_eq!(uri.opaque(), "bob@biloxi.com");
        assert_eq!(uri.fragment(), Some("f"));
        assert_eq!(uri.to_string(), "sip:bob@biloxi.com#f");
    }

    #[test]
    fn test_missing_and_unsupported_schemes() {
        let registry = SchemeRegistry::default();
        assert!(matches!(registry.parse("no-scheme"), Err(Error::MissingScheme(_))));
        assert!(matches!(registry.parse("1sip:a@x.com"), Err(Error::MissingScheme(_))));
        assert!(matches!(
            registry.parse("mailto:a@x.com"),
            Err(Error::UnsupportedScheme(s)) if s == "mailto"
        ));
    }

    #[test]
    fn test_handler_errors_propagate() {
        let registry = SchemeRegistry::default();
        assert!(matches!(
            registry.parse("sip:###"),
            Err(Error::InvalidOpaque(_))
        ));
    }

    #[test]
    fn test_custom_handler_replaces_sip() {
        fn reject_all(input: &str) -> Result<Box<dyn UriScheme>> {
            Err(Error::UnsupportedScheme(input.to_string()))
        }
        let registry = SchemeRegistry::default().with_scheme("sip", reject_all);
        assert!(registry.parse("sip:a@x.com").is_err());
    }
}
