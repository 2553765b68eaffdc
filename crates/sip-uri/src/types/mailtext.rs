// Plain-text (RFC 822 style) rendering of a SIP URI's to/headers view

use crate::error::Result;
use crate::parser::utils::unescape_uri_component;
use crate::types::uri::SipUri;

// First character upper-cased, the rest lower-cased
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl SipUri {
    /// Renders the URI as a plain-text message header block.
    ///
    /// The `To:` line starts with the decoded address; every `to` header adds
    /// `", " + value` to it. A `body` header becomes the message body (the last
    /// one wins). Every other header becomes a `Name: value` line with the
    /// name capitalized. The result is
    /// `"To: <to-line>\n<header-lines>\n<body>\n"`.
    ///
    /// ```
    /// use sip_uri::build;
    ///
    /// let uri = build("a@x.com", vec![("subject", "hi there"), ("to", "b@x.com"), ("body", "hello")]).unwrap();
    /// assert_eq!(uri.to_mailtext().unwrap(), "To: a@x.com, b@x.com\nSubject: hi there\n\nhello\n");
    /// ```
    pub fn to_mailtext(&self) -> Result<String> {
        let mut to = unescape_uri_component(self.to())?;
        let mut head = String::new();
        let mut body = String::new();

        for (name, value) in self.headers() {
            let name = unescape_uri_component(name)?;
            let value = unescape_uri_component(value)?;
            match name.as_str() {
                "body" => body = value,
                "to" => {
                    to.push_str(", ");
                    to.push_str(&value);
                }
                _ => {
                    head.push_str(&capitalize(&name));
                    head.push_str(": ");
                    head.push_str(&value);
                    head.push('\n');
                }
            }
        }

        Ok(format!("To: {}\n{}\n{}\n", to, head, body))
    }

    /// Same as [`to_mailtext`](SipUri::to_mailtext)
    pub fn to_rfc822text(&self) -> Result<String> {
        self.to_mailtext()
    }
}
