use std::collections::BTreeMap;

use crate::parser::utils::escape_header_component;

/// One entry of an ordered header list handed to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEntry {
    /// A header name followed by one or more value pieces. The pieces are
    /// concatenated and, like the name, percent-encoded.
    Pair { name: String, values: Vec<String> },
    /// A segment already in wire form (`name=value`), appended verbatim.
    Raw(String),
}

impl HeaderEntry {
    /// A `name=value` entry from decoded text
    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        HeaderEntry::Pair {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    fn render(&self) -> String {
        match self {
            HeaderEntry::Pair { name, values } => format!(
                "{}={}",
                escape_header_component(name),
                escape_header_component(&values.concat())
            ),
            HeaderEntry::Raw(segment) => segment.clone(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for HeaderEntry {
    fn from((name, value): (N, V)) -> Self {
        HeaderEntry::pair(name, value)
    }
}

/// The shapes of header input the builder accepts, resolved once at the API
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderInput {
    /// An ordered list; output order follows the list
    Pairs(Vec<HeaderEntry>),
    /// A mapping of decoded names to decoded values, emitted in key order
    Map(BTreeMap<String, String>),
    /// An already-encoded header list, appended as-is
    Raw(String),
}

impl HeaderInput {
    /// Renders the `&`-joined header list (without the leading `?`)
    pub(crate) fn render(&self) -> String {
        match self {
            HeaderInput::Pairs(entries) => entries
                .iter()
                .map(HeaderEntry::render)
                .collect::<Vec<_>>()
                .join("&"),
            HeaderInput::Map(map) => map
                .iter()
                .map(|(name, value)| {
                    format!(
                        "{}={}",
                        escape_header_component(name),
                        escape_header_component(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&"),
            HeaderInput::Raw(raw) => raw.clone(),
        }
    }
}

impl From<Vec<HeaderEntry>> for HeaderInput {
    fn from(entries: Vec<HeaderEntry>) -> Self {
        HeaderInput::Pairs(entries)
    }
}

impl<N: Into<String>, V: Into<String>> From<Vec<(N, V)>> for HeaderInput {
    fn from(pairs: Vec<(N, V)>) -> Self {
        HeaderInput::Pairs(pairs.into_iter().map(HeaderEntry::from).collect())
    }
}

impl<N: Into<String>, V: Into<String>, const K: usize> From<[(N, V); K]> for HeaderInput {
    fn from(pairs: [(N, V); K]) -> Self {
        HeaderInput::Pairs(pairs.into_iter().map(HeaderEntry::from).collect())
    }
}

impl From<BTreeMap<String, String>> for HeaderInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        HeaderInput::Map(map)
    }
}

impl From<&str> for HeaderInput {
    fn from(raw: &str) -> Self {
        HeaderInput::Raw(raw.to_string())
    }
}

impl From<String> for HeaderInput {
    fn from(raw: String) -> Self {
        HeaderInput::Raw(raw)
    }
}
