use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Settable components of a SIP URI, used to tag validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// The mailto-style primary address
    To,
    /// The `?name=value&...` header list
    Headers,
    /// The userinfo part before `@`
    User,
    /// The host part
    Host,
    /// The port after `:`
    Port,
    /// The `;name=value` parameter list
    Parameters,
    /// The fragment after `#`
    Fragment,
}

impl Component {
    /// Returns the lowercase component name
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::To => "to",
            Component::Headers => "headers",
            Component::User => "user",
            Component::Host => "host",
            Component::Port => "port",
            Component::Parameters => "parameters",
            Component::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building, parsing or mutating a SIP URI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The opaque body does not match the SIP URI grammar at all
    #[error("Unrecognised opaque part for sip URI: {0}")]
    UnrecognizedOpaquePart(String),

    /// A component value failed its character-class or grammar check
    #[error("Invalid {component} component: {message}")]
    InvalidComponent {
        component: Component,
        message: String,
    },

    /// The opaque body contains characters outside the opaque class
    #[error("Invalid opaque part: {0}")]
    InvalidOpaque(String),

    /// A string handed to the sip parser does not carry the sip scheme
    #[error("Invalid scheme for sip URI: {0}")]
    InvalidScheme(String),

    /// A string with no `scheme:` prefix was handed to the registry
    #[error("Missing URI scheme: {0}")]
    MissingScheme(String),

    /// No handler is registered for the scheme
    #[error("Unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// Percent-decoding failed
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl Error {
    pub(crate) fn invalid(component: Component, message: impl Into<String>) -> Self {
        Error::InvalidComponent {
            component,
            message: message.into(),
        }
    }

    /// Returns the component this error refers to, if any
    pub fn component(&self) -> Option<Component> {
        match self {
            Error::InvalidComponent { component, .. } => Some(*component),
            _ => None,
        }
    }
}
