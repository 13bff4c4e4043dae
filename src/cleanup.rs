//! Text cleanup applied after a content block is selected.
//!
//! - [`derive_title`]: longest segment of a raw `<title>`.
//! - [`strip_leading_title_echo`]: drop a body prefix that repeats the title.
//! - [`strip_timestamp`]: drop a leading dateline.
//! - [`strip_partial_sentence`]: drop the dangling remainder either one leaves.
//! - [`clean_body`]: all of the above in order.

use crate::patterns::{NON_LETTERS, PARTIAL_SENTENCE, TIMESTAMPS, TITLE_SEPARATOR};

/// Longest prefix, in letters, compared against the title.
const MAX_ECHO_LETTERS: usize = 50;

/// Highest normalized edit distance accepted for a title echo.
const MAX_ECHO_DISTANCE: f64 = 0.1;

/// Letters an echo must span (or the whole title, if shorter).
const MIN_ECHO_LETTERS: usize = 10;

/// Characters searched for a leading timestamp.
const TIMESTAMP_WINDOW: usize = 50;

/// Characters trimmed after a stripped title echo.
const ECHO_TRAILERS: &[char] = &[' ', '.', '?', ';', ':', '(', ')', '-', '\t', '\n'];

/// Derives a clean title from raw `<title>` text.
///
/// Splits on separators (», |, comma, colon, parentheses, hyphen, nbsp) and
/// keeps the longest segment; the later segment wins a tie. One leading
/// apostrophe is dropped.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::cleanup::derive_title;
///
/// assert_eq!(derive_title("Breaking News - Site Name"), "Breaking News");
/// ```
#[must_use]
pub fn derive_title(raw: &str) -> String {
    let mut best = "";
    let mut best_len = 0;
    for segment in TITLE_SEPARATOR.split(raw) {
        let len = segment.chars().count();
        if len >= best_len {
            best = segment;
            best_len = len;
        }
    }
    let best = best.strip_prefix('\'').unwrap_or(best);
    best.trim().to_string()
}

/// Strips a leading echo of `title` from `body`.
///
/// Letters-only, lowercased prefixes of both are compared by normalized
/// edit distance for every length up to 50; the best prefix is accepted if
/// its distance is at most 0.1 and it spans at least `min(title letters, 10)`
/// letters. The matched letters are then walked off the original body and
/// leading punctuation trimmed. Returns `body` unchanged otherwise.
#[must_use]
pub fn strip_leading_title_echo(body: &str, title: &str) -> String {
    let body_letters = NON_LETTERS.replace_all(&body.to_lowercase(), "").into_owned();
    let title_letters = NON_LETTERS.replace_all(&title.to_lowercase(), "").into_owned();

    let limit = MAX_ECHO_LETTERS
        .min(body_letters.len())
        .min(title_letters.len());

    // (distance, length): lower distance first, then longer prefix
    let mut best: Option<(f64, usize)> = None;
    for len in 1..=limit {
        let distance = levenshtein(&body_letters[..len], &title_letters[..len]) as f64 / len as f64;
        let better = match best {
            None => true,
            Some((best_distance, best_len)) => {
                distance < best_distance || (distance == best_distance && len > best_len)
            }
        };
        if better {
            best = Some((distance, len));
        }
    }

    match best {
        Some((distance, len))
            if distance <= MAX_ECHO_DISTANCE && len >= title_letters.len().min(MIN_ECHO_LETTERS) =>
        {
            strip_letters(body, &title_letters[..len])
                .trim_start_matches(ECHO_TRAILERS)
                .to_string()
        }
        _ => body.to_string(),
    }
}

/// Walks `raw` from the start, consuming one letter of `letters` each time
/// the next raw character matches it case-insensitively, and returns the
/// rest of `raw` once `letters` is used up.
fn strip_letters<'a>(raw: &'a str, letters: &str) -> &'a str {
    let mut wanted = letters.chars().peekable();
    for (offset, c) in raw.char_indices() {
        let Some(next) = wanted.peek() else {
            return &raw[offset..];
        };
        if c.to_lowercase().eq(next.to_lowercase()) {
            wanted.next();
        }
    }
    ""
}

/// Removes a leading fragment of at most ten characters ending in `.` or `?`.
#[must_use]
pub fn strip_partial_sentence(text: &str) -> String {
    PARTIAL_SENTENCE.replace(text, "").into_owned()
}

/// Strips a leading date or time found within the first 50 characters.
///
/// Everything up to the end of the furthest-reaching match is removed and
/// the remainder trimmed; text without a match is only trimmed.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::cleanup::strip_timestamp;
///
/// assert_eq!(
///     strip_timestamp("Published Thursday, Dec. 20, 2012 7:00AM EST With the so-called Mayan"),
///     "With the so-called Mayan"
/// );
/// ```
#[must_use]
pub fn strip_timestamp(text: &str) -> String {
    let window_end = text
        .char_indices()
        .nth(TIMESTAMP_WINDOW)
        .map_or(text.len(), |(offset, _)| offset);
    let window = &text[..window_end];

    let cut = TIMESTAMPS
        .iter()
        .filter_map(|pattern| pattern.find(window))
        .map(|m| m.end())
        .max()
        .unwrap_or(0);
    text[cut..].trim().to_string()
}

/// Finishes a selected body: title echo, then timestamp, each followed by a
/// partial-sentence strip when it changed the text.
#[must_use]
pub fn clean_body(body: &str, title: &str) -> String {
    let mut body = body.trim().to_string();
    if !body.is_empty() && !title.is_empty() {
        let stripped = strip_leading_title_echo(&body, title);
        if stripped != body {
            body = strip_partial_sentence(&stripped);
        }
    }
    if !body.is_empty() {
        let stripped = strip_timestamp(&body);
        if stripped != body {
            body = strip_partial_sentence(&stripped);
        }
    }
    body
}

/// Levenshtein edit distance over characters.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b_chars.len()]
}
