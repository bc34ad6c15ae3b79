//! Generic RFC 3986 decomposition.
//!
//! File URIs are split without any scheme-specific rewriting so that an
//! authority absorbed from a relative-looking path can be put back.

use regex::Regex;
use std::sync::LazyLock;

static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI pattern must compile")
});

/// Components of an absolute URI, borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct UriParts<'a> {
    pub scheme: &'a str,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Returns None for relative references, characters not allowed in a
    /// URI, or malformed percent escapes.
    pub fn parse(input: &'a str) -> Option<Self> {
        if !input.chars().all(is_uri_char) || !has_valid_escapes(input) {
            return None;
        }

        let captures = URI_PATTERN.captures(input)?;
        Some(Self {
            scheme: captures.get(1)?.as_str(),
            authority: captures.get(2).map(|m| m.as_str()),
            path: captures.get(3).map_or("", |m| m.as_str()),
            query: captures.get(4).map(|m| m.as_str()),
            fragment: captures.get(5).map(|m| m.as_str()),
        })
    }

    /// Host part of the authority, without user info or port.
    pub fn reg_name(&self) -> Option<&'a str> {
        let authority = self.authority?;
        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_userinfo, host)| host);

        if host.starts_with('[') {
            // IP literal: keep everything up to the closing bracket
            return Some(host.find(']').map_or(host, |end| &host[..=end]));
        }

        Some(host.split_once(':').map_or(host, |(name, _port)| name))
    }
}

fn is_uri_char(ch: char) -> bool {
    ch.is_ascii_graphic() && !matches!(ch, '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
}

fn has_valid_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
