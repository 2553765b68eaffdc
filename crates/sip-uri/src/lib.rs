//! Parser and builder for `sip:` URIs.
//!
//! This crate handles a single URI scheme. A `sip:` URI is decomposed into
//! its user, host, port, parameters and headers, and can be rendered back
//! either as a canonical URI string or as a plain-text mail header block.
//!
//! - [`SipUri`] is the value type: parse it with [`FromStr`](std::str::FromStr),
//!   create it from a bare opaque body with [`SipUri::from_opaque`], or build it.
//! - [`build`] and [`SipUriBuilder`] assemble a URI from a `to` address and
//!   headers, or from RFC 3261 components.
//! - [`SchemeRegistry`] dispatches a full URI string to the handler registered
//!   for its scheme.
//!
//! This is a value library only: no SIP transport, transactions or dialogs.
//!
//! ```rust
//! use sip_uri::prelude::*;
//!
//! let uri = build("alice@atlanta.com", vec![("subject", "lunch"), ("to", "bob@biloxi.com")]).unwrap();
//! assert_eq!(uri.to_string(), "sip:alice@atlanta.com?subject=lunch&to=bob%40biloxi.com");
//! assert_eq!(
//!     uri.to_mailtext().unwrap(),
//!     "To: alice@atlanta.com, bob@biloxi.com\nSubject: lunch\n\n\n"
//! );
//! ```

pub mod builder;
pub mod error;
pub mod parser;
pub mod registry;
pub mod types;

pub use builder::{build, HeaderEntry, HeaderInput, SipUriBuilder};
pub use error::{Component, Error, Result};
pub use registry::{SchemeParser, SchemeRegistry, UriScheme};
pub use types::{validate_headers, validate_to, Host, SipUri};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::builder::{build, HeaderEntry, HeaderInput, SipUriBuilder};
    pub use crate::error::{Component, Error, Result};
    pub use crate::registry::{SchemeRegistry, UriScheme};
    pub use crate::types::{Host, SipUri};
}
