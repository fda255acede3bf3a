//! Link analysis: Sword-style `sword://module/key` links, bare verse keys
//! such as `Job.3.3`, and the reader's own `gdef:`/`hdef:`/... links.
//!
//! See <http://www.crosswire.org/wiki/Frontends:URI_Standard>.

use crate::error::Error;
use crate::protocol::{self, BIBLE_PROTOCOL};
use crate::types::{DocType, ParsedReference};

/// Analyze a link into its document type, optional module, and key.
///
/// Never panics. Any input that is not a recognized link yields
/// `Error::UnrecognizedReference`.
///
/// # Errors
///
/// Returns `Error::UnrecognizedReference` when the protocol token is unknown
/// or nothing but slashes follows it.
pub fn analyze(uri: &str) -> Result<ParsedReference, Error> {
    let (token, body) = split_protocol(uri);

    let Some(mut doc_type) = protocol::doc_type_for(token) else {
        tracing::debug!(uri, token, "unknown link protocol");
        return Err(unrecognized(uri));
    };

    // Strip the `//` of `sword://module/key` along with any trailing slash.
    let body = body.trim_matches('/');
    if body.is_empty() {
        tracing::debug!(uri, "link has no reference after its protocol");
        return Err(unrecognized(uri));
    }

    let (book, key) = match body.split_once('/') {
        None => (None, body),
        Some((book, key)) => (Some(book), key),
    };

    // `sword://Bible/John.17.11` names no real module; it means the Bible text.
    if book.is_some_and(|b| return b.eq_ignore_ascii_case(BIBLE_PROTOCOL)) {
        doc_type = DocType::Bible;
    }

    return Ok(ParsedReference {
        book: book.map(str::to_string),
        doc_type,
        key: key.to_string(),
    });
}

/// Split a link into protocol token and reference body.
///
/// Links without a colon are Bible keys. Otherwise only the text between the
/// first and second colon is the body, so `sword:a:b` has body `a`.
fn split_protocol(uri: &str) -> (&str, &str) {
    if !uri.contains(':') {
        return (BIBLE_PROTOCOL, uri);
    }
    let mut tokens = uri.split(':');
    let token = tokens.next().unwrap_or_default();
    let body = tokens.next().unwrap_or_default();
    return (token, body);
}

/// Build the single failure value for `uri`.
fn unrecognized(uri: &str) -> Error {
    return Error::UnrecognizedReference {
        uri: uri.to_string(),
    };
}
