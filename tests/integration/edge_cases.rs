//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and error handling.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_boilerpipe::{extract, extract_bytes, extract_with_options, segment, Error, Label, Options};

#[test]
fn test_extract_empty_input() {
    let result = extract("").expect("empty input is not an error");
    assert!(result.is_empty());
    assert!(result.strategy.is_none());
}

#[test]
fn test_extract_empty_body() {
    let result = extract("<html><head><title>Nothing here</title></head><body></body></html>")
        .expect("empty body is not an error");
    assert!(result.is_empty());
}

#[test]
fn test_extract_without_title_declines() {
    let html = format!("<html><body><p>{}</p></body></html>", "plenty of words ".repeat(40));
    let result = extract(&html).expect("missing title is not an error");
    assert!(result.is_empty());
}

#[test]
fn test_extract_script_only_page() {
    let html = format!(
        "<html><head><title>App shell</title></head><body><script>{}</script></body></html>",
        "var x = 1; ".repeat(100)
    );
    let result = extract(&html).expect("script-only page is not an error");
    assert!(result.is_empty());
}

#[test]
fn test_extract_malformed_html() {
    // Unclosed tags are repaired by the parser before segmentation
    let html = format!(
        "<html><head><title>Broken markup</title><body><div><p>{}<p>{}",
        "first paragraph text ".repeat(12),
        "second paragraph text ".repeat(12)
    );
    let page = segment(&html).expect("repaired markup segments cleanly");
    let paragraphs = page.blocks.iter().filter(|b| b.has(Label::MaybeContent)).count();
    assert_eq!(paragraphs, 2);
    assert!(extract(&html).is_ok());
}

#[test]
fn test_doctype_text_is_dropped() {
    let page = segment(
        "<html><body><p>html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\"</p><p>Real text</p></body></html>",
    )
    .expect("segmentation should succeed");
    let texts: Vec<&str> = page.blocks.iter().map(|b| b.text.trim()).collect();
    assert_eq!(texts, vec!["Real text"]);
}

#[test]
fn test_long_emphasis_run_is_ignored() {
    let page = segment("<html><body><p>Lead <b>one two three four five six seven</b> tail</p></body></html>")
        .expect("segmentation should succeed");
    let texts: Vec<&str> = page.blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, vec!["Lead", "one two three four five six seven", "tail"]);
    assert!(page.blocks[1].has(Label::Ignore));
    assert!(page.blocks[2].has(Label::MaybeContent));
}

#[test]
fn test_short_emphasis_stays_inline() {
    let page = segment("<html><body><p>Lead <b>short bold</b> tail</p></body></html>")
        .expect("segmentation should succeed");
    assert_eq!(page.blocks.len(), 1);
    assert_eq!(page.blocks[0].text, "Lead short bold tail");
}

#[test]
fn test_bad_font_size_is_ignored() {
    let page = segment(r#"<html><body><p><font size="huge">sized text</font></p></body></html>"#)
        .expect("non-numeric font size is not an error");
    assert_eq!(page.blocks[0].text, "sized text");
}

#[test]
fn test_entities_in_text() {
    let page = segment("<html><body><p>Fish &amp; chips &#8212; &ldquo;cheap&rdquo;</p></body></html>")
        .expect("segmentation should succeed");
    assert_eq!(page.blocks[0].text.trim(), "Fish & chips - \"cheap\"");
}

#[test]
fn test_invalid_utf8_bytes() {
    let mut html = b"<html><head><title>Bytes</title></head><body><p>".to_vec();
    html.extend_from_slice(b"\xFF\xFE broken ");
    html.extend_from_slice(b"</p></body></html>");
    assert!(extract_bytes(&html).is_ok());
}

#[test]
fn test_deep_nesting_hits_limit() {
    let html = format!("<html><body>{}deep{}</body></html>", "<span>".repeat(40), "</span>".repeat(40));
    let options = Options {
        max_tree_depth: 16,
        ..Options::default()
    };
    assert_eq!(extract_with_options(&html, &options), Err(Error::TooDeep(16)));
}
