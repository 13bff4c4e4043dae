//! Charset sniffing and decoding of raw HTML bytes.
//!
//! The declared charset is read from a `<meta>` tag near the top of the
//! document; anything undeclared or unknown is treated as UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::patterns::{HTTP_EQUIV_CHARSET, META_CHARSET};

/// Bytes searched for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Returns the encoding a document declares, or UTF-8.
///
/// `<meta charset>` is checked before `<meta http-equiv="Content-Type">`.
/// Labels are resolved with the WHATWG rules, so `ISO-8859-1` yields
/// windows-1252.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<&str> {
    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .find_map(|pattern| pattern.captures(head)?.get(1))
        .map(|m| m.as_str())
}

/// Decodes `html` to UTF-8 in its declared encoding.
///
/// Malformed sequences become U+FFFD; decoding never fails.
///
/// ```
/// use rs_boilerpipe::encoding::decode_html;
///
/// let html = b"<meta charset=\"latin1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html);
    }
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        debug!(encoding = encoding.name(), "replaced malformed input while decoding");
    }
    decoded
}
