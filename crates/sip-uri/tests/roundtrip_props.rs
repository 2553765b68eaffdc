// Property tests for the build / render / reparse cycle

use proptest::prelude::*;
use std::str::FromStr;

use sip_uri::{build, SipUri};

fn address() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{0,7}", "[a-z][a-z0-9-]{0,6}[a-z0-9]", "(com|org|net)")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

fn headers() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z][a-z-]{0,7}", "[a-zA-Z0-9 .,:@/]{0,12}"), 0..6)
}

proptest! {
    #[test]
    fn build_render_reparse_preserves_to_and_headers(to in address(), pairs in headers()) {
        let built = build(to.clone(), pairs.clone()).unwrap();
        let reparsed = SipUri::from_str(&built.to_string()).unwrap();

        prop_assert_eq!(reparsed.to(), to.as_str());
        prop_assert_eq!(reparsed.decoded_headers().unwrap(), pairs);
    }

    #[test]
    fn rendered_headers_follow_input_order(to in address(), pairs in headers()) {
        let built = build(to, pairs.clone()).unwrap();
        let names: Vec<String> = built.headers().iter().map(|(name, _)| name.clone()).collect();
        let expected: Vec<String> = pairs.into_iter().map(|(name, _)| name).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn opaque_and_display_agree(to in address(), pairs in headers()) {
        let built = build(to, pairs).unwrap();
        prop_assert_eq!(built.to_string(), format!("sip:{}", built.opaque()));
    }
}
