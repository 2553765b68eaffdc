//! Parsers for the `sip:` opaque body and its components.
//!
//! All grammar rules are written with the nom parser combinator library over
//! byte slices and anchored with `all_consuming` where a whole value must match.

pub(crate) mod common_chars;
pub(crate) mod uri;
pub mod utils;

use nom::IResult;

// Type alias for parser result
pub(crate) type ParseResult<'a, O> = IResult<&'a [u8], O>;

pub use common_chars::{is_mailbox_list, is_opaque, is_uric};
pub use uri::{matches_header, matches_parameter};
pub use utils::{escape_header_component, unescape_uri_component};
