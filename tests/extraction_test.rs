use rs_boilerpipe::cleanup::{derive_title, strip_timestamp};
use rs_boilerpipe::extractor::ParseState;
use rs_boilerpipe::heuristics::merge_blocks;
use rs_boilerpipe::normalize::normalize;
use rs_boilerpipe::{extract, extract_with_options, segment, Error, Label, Options, Strategy};

fn extract_ok(html: &str) -> rs_boilerpipe::ExtractResult {
    match extract(html) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn single_long_paragraph_yields_title_and_body() {
    let html = format!(
        "<html><title>T</title><body><p>{}</p></body></html>",
        "word ".repeat(50)
    );
    let result = extract_ok(&html);
    assert_eq!(result.title, "T");
    assert!(result.body.contains("word"));
    assert_eq!(result.body.split_whitespace().count(), 50);
}

#[test]
fn anchor_only_document_yields_nothing() {
    let result = extract_ok(r##"<body><a href="#">click</a></body>"##);
    assert!(result.title.is_empty());
    assert!(result.body.is_empty());
    assert_eq!(result.strategy, None);
}

#[test]
fn link_list_page_yields_nothing() {
    let links: String = (0..30)
        .map(|i| format!(r#"<li><a href="/p/{i}">Another story headline</a></li>"#))
        .collect();
    let html = format!("<html><head><title>Index</title></head><body><ul>{links}</ul></body></html>");
    let result = extract_ok(&html);
    assert!(result.is_empty());
}

#[test]
fn paragraph_of_links_yields_nothing() {
    let links: String = (0..40)
        .map(|i| format!(r#"<a href="/p/{i}">story headline</a> "#))
        .collect();
    let html = format!("<html><head><title>Links</title></head><body><p>{links}</p></body></html>");
    let result = extract_ok(&html);
    assert!(result.is_empty());
    assert_eq!(result.strategy, None);
}

#[test]
fn extraction_is_deterministic() {
    let paragraph = "The committee met on a quiet morning to weigh the proposal in full. ".repeat(4);
    let html = format!(
        "<html><head><title>Council weighs plan - Gazette</title></head><body>\
         <div>Filed by the city desk reporter today</div>\
         <p>{paragraph}</p><p>{paragraph}</p><p>{paragraph}</p></body></html>"
    );
    let first = extract_ok(&html);
    let second = extract_ok(&html);
    assert_eq!(first, second);
    assert!(!first.is_empty());

    let pages = (segment(&html), segment(&html));
    assert_eq!(pages.0, pages.1);
}

#[test]
fn blocks_preserve_document_text_order() {
    let html = "<html>\n<head>\n<title>Title here</title>\n</head>\n<body>\n\
                <h1>Head</h1>\n<p>One <b>two</b> three</p>\n\
                <ul>\n<li>four</li>\n<li>five</li>\n</ul>\n\
                <div>six <span>seven</span></div>\n</body>\n</html>";

    let page = match segment(html) {
        Ok(page) => page,
        Err(err) => panic!("segmentation failed: {err}"),
    };
    let block_words: Vec<String> = page
        .blocks
        .iter()
        .flat_map(|b| b.text.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();

    let document = dom_query::Document::from(html);
    let text = document.select("html").text().to_string();
    let document_words: Vec<&str> = text.split_whitespace().collect();

    assert_eq!(block_words, document_words);
    assert_eq!(
        block_words,
        vec!["Title", "here", "Head", "One", "two", "three", "four", "five", "six", "seven"]
    );
}

#[test]
fn merged_run_is_space_joined_in_order() {
    let html = "<html><body><p>alpha one</p><p>beta two</p><p>gamma three</p></body></html>";
    let mut page = match segment(html) {
        Ok(page) => page,
        Err(err) => panic!("segmentation failed: {err}"),
    };
    for block in &mut page.blocks {
        block.label(Label::Content);
    }
    merge_blocks(&mut page.blocks, true, true);
    assert_eq!(page.blocks[0].text, "alpha one beta two gamma three");
    assert!(page.blocks[1..].iter().all(|b| b.has(Label::Ignore)));
}

#[test]
fn derive_title_keeps_longest_segment() {
    assert_eq!(derive_title("Breaking News - Site Name"), "Breaking News");
}

#[test]
fn strip_timestamp_removes_dateline() {
    let stripped = strip_timestamp("Published Thursday, Dec. 20, 2012 7:00AM EST With the so-called Mayan");
    assert!(stripped.starts_with("With the so-called"));
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "",
        "plain text",
        "a&nbsp;&nbsp;b",
        "&#38;nbsp; stays put",
        "&amp;mdash; and &#x2014;",
        "line\r\nbreaks\r\r\n\n\n  everywhere  ",
        "\u{2018}quoted\u{2019} \u{201c}text\u{201d} \u{2014} dash",
        "&#99999999; out of range",
        "tabs\tand  spaces \n  mixed",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn unbalanced_tags_are_structural_errors() {
    let mut state = ParseState::new();
    assert!(state.tag_start("div", "", None).is_ok());
    let err = match state.tag_end("p") {
        Ok(()) => panic!("expected an error"),
        Err(err) => err,
    };
    assert!(matches!(err, Error::UnbalancedTags { .. }));
    assert!(err.is_structural());
}

#[test]
fn nested_anchors_are_structural_errors() {
    let mut state = ParseState::new();
    assert!(state.tag_start("a", "", None).is_ok());
    assert_eq!(state.tag_start("a", "", None), Err(Error::NestedAnchor));
}

#[test]
fn nesting_beyond_limit_is_rejected() {
    let html = format!(
        "<html><head><title>Deep</title></head><body>{}text{}</body></html>",
        "<div>".repeat(64),
        "</div>".repeat(64)
    );
    let options = Options {
        max_tree_depth: 32,
        ..Options::default()
    };
    let err = match extract_with_options(&html, &options) {
        Ok(result) => panic!("expected TooDeep, got {result:?}"),
        Err(err) => err,
    };
    assert_eq!(err, Error::TooDeep(32));
    assert!(!err.is_structural());

    // the default limit is well above this document
    assert!(extract(&html).is_ok());
}

#[test]
fn paragraph_fallback_reports_strategy() {
    let html = format!(
        "<html><title>T</title><body><p>{}</p></body></html>",
        "word ".repeat(50)
    );
    assert_eq!(extract_ok(&html).strategy, Some(Strategy::Paragraph));
}
