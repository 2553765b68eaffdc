pub mod mailtext;
pub mod uri;

pub use uri::{validate_headers, validate_to, Host, SipUri};
