//! Integration tests for real-world article extraction
//!
//! Fixture pages carry the usual furniture around the story: navigation
//! lists, bylines, comment sections, and footers.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_boilerpipe::{extract, extract_bytes, extract_with_options, segment, Options, Strategy};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_news_article_body() {
    let html = fixture("news_article.html");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.title, "Storm batters coast as thousands evacuate");
            assert_eq!(result.strategy, Some(Strategy::Article));

            // Byline dateline is stripped from the front of the body
            assert!(
                result.body.starts_with("Residents the river rose"),
                "unexpected body start: {}",
                &result.body[..40.min(result.body.len())]
            );
            assert!(result.body.contains("Emergency"));
            assert!(result.body.contains("Officials"));

            // Boilerplate stays out
            assert!(!result.body.contains("Politics"));
            assert!(!result.body.contains("Great article"));
            assert!(!result.body.contains("Copyright"));
            assert!(!result.body.contains("analytics"));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_news_article_segmentation() {
    let html = fixture("news_article.html");
    let page = segment(&html).expect("segmentation should succeed");

    assert_eq!(page.title, "Storm batters coast as thousands evacuate");
    let hidden = page.blocks.iter().filter(|b| b.ignore_depth > 0).count();
    assert_eq!(hidden, 2, "script and style blocks are kept but marked");

    let paragraph_words: Vec<usize> = page
        .blocks
        .iter()
        .filter(|b| b.tag_path.last().is_some_and(|t| t == "p"))
        .map(|b| b.word_count)
        .collect();
    assert_eq!(paragraph_words, vec![60, 60, 50, 30, 2]);
}

#[test]
fn test_blog_comments_included_by_default() {
    let html = fixture("blog_with_comments.html");
    let result = extract(&html).expect("extraction should succeed");

    assert_eq!(result.title, "growing tomatoes");
    assert!(result.body.starts_with("Posted on the garden blog"));
    assert!(result.body.contains("Seedlings"));
    // Same-depth comment blocks merge into the article run
    assert!(result.body.contains("Bernadette"));
}

#[test]
fn test_blog_comments_cut_at_end_of_text() {
    let html = fixture("blog_with_comments.html");
    let options = Options {
        detect_end_of_text: true,
        ..Options::default()
    };
    let result = extract_with_options(&html, &options).expect("extraction should succeed");

    assert_eq!(result.strategy, Some(Strategy::Article));
    assert!(result.body.contains("Seedlings"));
    assert!(result.body.contains("Mulching"));
    assert!(!result.body.contains("Bernadette"));
    assert!(!result.body.contains("Cornelius"));
    assert!(!result.body.contains("Post a comment"));
}

#[test]
fn test_latin1_article_from_bytes() {
    let bytes = std::fs::read(fixture_path("latin1_article.html")).expect("Failed to read fixture");
    let result = extract_bytes(&bytes).expect("extraction should succeed");

    assert_eq!(result.title, "Caf\u{e9} culture returns");
    assert!(result.body.contains("Caf\u{e9}s"));
    assert!(result.body.contains("Propri\u{e9}taires"));
    assert!(!result.body.contains('\u{fffd}'));
}
