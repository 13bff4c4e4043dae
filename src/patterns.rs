//! Compiled regex patterns for normalization, segmentation, and cleanup.
//!
//! All patterns are compiled once on first use with `LazyLock`.
//! Patterns are organized by the pipeline stage that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Normalizer Patterns
// =============================================================================

/// Numeric character references (`&#NNN;`, `&#xHHH;`) and the fixed named-entity table.
pub static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([xX]?)([0-9a-fA-F]+)|(nbsp|mdash|quot|lsquo|rsquo|ldquo|rdquo));")
        .expect("CHARACTER_REFERENCE regex")
});

/// Runs of spaces.
pub static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("SPACE_RUN regex"));

/// Newline with adjacent spaces on either side.
pub static PADDED_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\n *").expect("PADDED_NEWLINE regex"));

/// Runs of newlines (blank lines).
pub static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("BLANK_LINES regex"));

// =============================================================================
// Charset Sniffing Patterns
// =============================================================================

/// `<meta charset="...">`.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
pub static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

// =============================================================================
// Tree Walker Patterns
// =============================================================================

/// Relative `<font size="+N">` / `size="-N"`.
pub static FONT_SIZE_DELTA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]\d+)").expect("FONT_SIZE_DELTA regex"));

/// Absolute `<font size="N">`.
pub static FONT_SIZE_ABSOLUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("FONT_SIZE_ABSOLUTE regex"));

// =============================================================================
// Heuristic Patterns
// =============================================================================

/// Comment counters such as "12 comments" or "40 users responded in this thread".
pub static COMMENT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s+(comments|users responded in)").expect("COMMENT_COUNT regex")
});

// =============================================================================
// Text Cleanup Patterns
// =============================================================================

/// Separators between title segments (», |, comma, colon, parens, hyphen, nbsp).
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[\x{bb}|,:()\-\x{a0}]+\s*").expect("TITLE_SEPARATOR regex")
});

/// Anything that is not a lowercase ASCII letter.
pub static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]+").expect("NON_LETTERS regex"));

/// A leading fragment of at most ten characters ending a sentence.
pub static PARTIAL_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^.?]{0,10}[.?]\s*").expect("PARTIAL_SENTENCE regex"));

/// Date and time shapes looked for near the start of a body.
///
/// 1. day, anything, 4-digit 20xx year (`20, 2012`, `18, 2012`)
/// 2. `H:MM[:SS]` with optional meridiem and optional US timezone
/// 3. `H[:MM]` with optional meridiem and a mandatory US timezone
pub static TIMESTAMPS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(\d{1,2}\D+20\d\d)").expect("TIMESTAMPS date regex"),
        Regex::new(
            r"(?i)(\d{1,2}(:\d\d)+\s*(AM|PM|a\.m\.|p\.m\.)?\s*(ET|EST|EDT|PT|PST|PDT|CT|CST|CDT)?)",
        )
        .expect("TIMESTAMPS clock regex"),
        Regex::new(
            r"(?i)(\d{1,2}(:\d\d)*\s*(AM|PM|A\.M\.|P\.M\.)?\s*(ET|EST|EDT|PT|PST|PDT|CT|CST|CDT))",
        )
        .expect("TIMESTAMPS zone regex"),
    ]
});
