use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1, take_while_m_n},
    combinator::{all_consuming, recognize},
    multi::{many0, many1},
    sequence::{pair, tuple},
};

use crate::parser::ParseResult;

// Character sets from RFC 2396 (with the RFC 2732 "[" / "]" additions)

// mark = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"
pub(crate) fn is_mark(c: u8) -> bool {
    matches!(c, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

// unreserved = alphanum / mark
pub(crate) fn is_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || is_mark(c)
}

// reserved = ";" / "/" / "?" / ":" / "@" / "&" / "=" / "+" / "$" / "," / "[" / "]"
pub(crate) fn is_reserved(c: u8) -> bool {
    matches!(
        c,
        b';' | b'/' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b',' | b'[' | b']'
    )
}

pub(crate) fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

fn is_uric_char(c: u8) -> bool {
    is_unreserved(c) || is_reserved(c)
}

// uric_no_slash = unreserved / escaped / ";" / "?" / ":" / "@" / "&" / "=" / "+" / "$" / ","
fn is_uric_no_slash_char(c: u8) -> bool {
    is_unreserved(c)
        || matches!(c, b';' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b',')
}

// Everything except "(" / ")" / "%" / "?" / "=" / "&"; "%" only as part of an escape
fn is_mailbox_char(c: u8) -> bool {
    !matches!(c, b'(' | b')' | b'%' | b'?' | b'=' | b'&')
}

// escaped = "%" HEXDIG HEXDIG
pub(crate) fn escaped(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((tag(b"%"), take_while_m_n(2, 2, is_hex_digit))))(input)
}

// uric = reserved / unreserved / escaped
fn uric(input: &[u8]) -> ParseResult<&[u8]> {
    alt((escaped, take_while1(is_uric_char)))(input)
}

// opaque_part = uric_no_slash *uric
fn opaque_part(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        alt((escaped, take_while_m_n(1, 1, is_uric_no_slash_char))),
        many0(uric),
    ))(input)
}

// mailbox = 1*( escaped / mailbox-char )
fn mailbox(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many1(alt((escaped, take_while1(is_mailbox_char)))))(input)
}

/// Returns true when `s` as a whole satisfies the `opaque_part` character class.
pub fn is_opaque(s: &str) -> bool {
    all_consuming(opaque_part)(s.as_bytes()).is_ok()
}

/// Returns true when every character of `s` is `uric` (empty is accepted).
pub fn is_uric(s: &str) -> bool {
    all_consuming(many0(uric))(s.as_bytes()).is_ok()
}

/// Returns true when `s` is one or more mailbox characters.
pub fn is_mailbox_list(s: &str) -> bool {
    all_consuming(mailbox)(s.as_bytes()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_class() {
        assert!(is_opaque("alice@example.com"));
        assert!(is_opaque("alice@example.com?subject=hi%20there"));
        assert!(is_opaque("a;b=c?d=e&f=g"));
        assert!(!is_opaque(""));
        assert!(!is_opaque("/path"));
        assert!(!is_opaque("###"));
        assert!(!is_opaque("with space"));
        assert!(!is_opaque("bad%2"));
        assert!(!is_opaque("bad%ZZ"));
    }

    #[test]
    fn test_uric_class() {
        assert!(is_uric(""));
        assert!(is_uric("section-2/a?b"));
        assert!(!is_uric("a#b"));
        assert!(!is_uric("caf\u{e9}"));
    }

    #[test]
    fn test_mailbox_list() {
        assert!(is_mailbox_list("alice@example.com"));
        assert!(is_mailbox_list("alice@example.com,bob@example.org"));
        assert!(is_mailbox_list("joe%20bloggs@example.com"));
        assert!(!is_mailbox_list(""));
        assert!(!is_mailbox_list("a?b"));
        assert!(!is_mailbox_list("a=b"));
        assert!(!is_mailbox_list("a&b"));
        assert!(!is_mailbox_list("(comment)a@b"));
        assert!(!is_mailbox_list("100%"));
    }
}
