//! Walks through parsing, building and rendering sip: URIs.
//!
//! Run with `RUST_LOG=debug` to see rejected components logged.

use std::error::Error as StdError;

use sip_uri::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn StdError>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sip_uri=info".parse()?))
        .init();

    // Parse an RFC 3261 URI
    let uri: SipUri = "sip:alice:secret@atlanta.com:5060;transport=tcp?subject=project%20x".parse()?;
    info!(
        to = uri.to(),
        user = ?uri.user(),
        host = ?uri.host().map(|h| h.to_string()),
        port = ?uri.port(),
        transport = ?uri.parameter("transport"),
        "parsed sip URI"
    );
    println!("subject: {:?}", uri.header("subject")?);

    // Build one from the positional [to, headers] form
    let uri = build(
        "alice@atlanta.com",
        vec![("to", "bob@biloxi.com"), ("subject", "lunch?"), ("body", "noon works")],
    )?;
    println!("{}", uri);
    print!("{}", uri.to_mailtext()?);

    // Build one from components
    let uri = SipUriBuilder::new()
        .with_user("bob")
        .with_host("2001:db8::10")
        .with_port(5062)
        .with_parameter("transport", Some("udp"))
        .with_parameter("lr", None)
        .build()?;
    println!("{}", uri);

    // Mutate through the mailto-style setters
    let mut uri = uri;
    uri.set_to("carol@chicago.com")?;
    uri.set_headers("priority=urgent")?;
    println!("{}", uri);

    match uri.set_to("a?b") {
        Ok(()) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected: {}", e),
    }

    // Dispatch by scheme
    let registry = SchemeRegistry::default();
    for input in ["sip:bob@biloxi.com#top", "tel:+1-555-0100", "sip:###"] {
        match registry.parse(input) {
            Ok(parsed) => println!("{} -> {}", input, parsed),
            Err(e) => println!("{} -> error: {}", input, e),
        }
    }

    Ok(())
}
