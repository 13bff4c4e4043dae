//! Text normalization.
//!
//! Canonicalizes raw markup and block text: character references, vendor
//! punctuation, line endings, and whitespace. Every step is total; anything
//! unrecognized passes through unchanged.

use std::borrow::Cow;

use regex::Captures;

use crate::patterns::{BLANK_LINES, CHARACTER_REFERENCE, PADDED_NEWLINE, SPACE_RUN};

/// Normalizes text: character references, punctuation, line endings, whitespace.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::normalize::normalize;
///
/// assert_eq!(normalize("a&nbsp;&#8220;b&#8221;\r\n\r\n  c"), "a \"b\"\nc");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = decode_character_references(text);
    let text = translate_punctuation(&text);
    let text = normalize_line_endings(&text);
    collapse_whitespace(&text)
}

/// Pre-parse pass over raw markup: punctuation and line endings only.
///
/// Character references are left to the parser.
#[must_use]
pub fn prepare_markup(html: &str) -> String {
    normalize_line_endings(&translate_punctuation(html)).into_owned()
}

/// Decodes `&#NNN;`, `&#xHHH;`, and the fixed named-entity table.
///
/// References that are out of range, or that would decode to `&` and so
/// form a new reference, are kept verbatim. Decoding repeats until nothing
/// changes, since a decoded `#` or digit can complete a reference
/// (`&&#35;65;`).
#[must_use]
pub fn decode_character_references(text: &str) -> Cow<'_, str> {
    let mut current = match decode_once(text) {
        Cow::Owned(decoded) if decoded != text => decoded,
        _ => return Cow::Borrowed(text),
    };
    loop {
        let next = match decode_once(&current) {
            Cow::Owned(next) if next != current => next,
            _ => break,
        };
        current = next;
    }
    Cow::Owned(current)
}

fn decode_once(text: &str) -> Cow<'_, str> {
    CHARACTER_REFERENCE.replace_all(text, |caps: &Captures| {
        if let Some(name) = caps.get(3) {
            return named_entity(name.as_str()).to_string();
        }
        let radix = if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) { 16 } else { 10 };
        caps.get(2)
            .and_then(|digits| u32::from_str_radix(digits.as_str(), radix).ok())
            .and_then(char::from_u32)
            .filter(|c| *c != '&')
            .map_or_else(|| caps[0].to_string(), String::from)
    })
}

fn named_entity(name: &str) -> &'static str {
    match name {
        "nbsp" => " ",
        "mdash" => "-",
        "ldquo" | "rdquo" => "\"",
        "quot" | "lsquo" | "rsquo" => "'",
        _ => "",
    }
}

/// Replaces word-processor punctuation with ASCII equivalents.
#[must_use]
pub fn translate_punctuation(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| ascii_equivalent(c).is_none()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ascii_equivalent(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn ascii_equivalent(c: char) -> Option<&'static str> {
    let replacement = match c {
        '\u{201c}' | '\u{201d}' => "\"",
        '\u{2018}' | '\u{2019}' | '\u{02bc}' => "'",
        '\u{2026}' => "...",
        '\u{2022}' | '\u{25cf}' => "-",
        '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2053}' | '\u{2e3a}' | '\u{2e3b}' => "-",
        '\u{2063}' | '\u{2025}' | '\u{a0}' => " ",
        _ => return None,
    };
    Some(replacement)
}

/// Converts `\r\n` and lone `\r` to `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Tabs to spaces, one space per run, no spaces around newlines, no blank lines.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let text = text.replace('\t', " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = PADDED_NEWLINE.replace_all(&text, "\n");
    BLANK_LINES.replace_all(&text, "\n").into_owned()
}
