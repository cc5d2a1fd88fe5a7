//! Whole-pipeline tests: raw HTML in, resolved record out.

use placelens_extract::extract::run_extractors;
use placelens_extract::{resolve_fields, UserInput};

const KEYWORD_CAP: usize = 12;

fn analyze(html: &str, user: &UserInput) -> placelens_extract::ExtractedRecord {
    resolve_fields(user, &run_extractors(html), KEYWORD_CAP)
}

#[test]
fn og_title_only_body_resolves_name_and_sentinels() {
    let html = r#"<html><head><meta property="og:title" content="Sample Cafe"></head></html>"#;
    let record = analyze(html, &UserInput::default());

    assert_eq!(record.name, "Sample Cafe");
    assert_eq!(record.description, "unconfirmed");
    assert!(record.keywords.is_empty());
    assert_eq!(record.image, "");
}

#[test]
fn all_three_strategies_contribute_under_priority() {
    let html = r#"<html><head>
        <meta property="og:title" content="Meta Cafe">
        <meta property="og:image" content="https://img.example.com/og.jpg">
        <script type="application/ld+json">
        {"@type": "Restaurant", "name": "LD Cafe", "description": "linked-data text"}
        </script>
        </head><body>
        <script id="__NEXT_DATA__" type="application/json">
        {"props": {"place": {
            "tags": ["coffee", "roastery"],
            "introduction": "app-state text",
            "photos": [{"url": "https://img.example.com/state.jpg"}]
        }}}
        </script>
        </body></html>"#;

    let record = analyze(html, &UserInput::default());
    assert_eq!(record.name, "Meta Cafe", "meta title outranks linked-data name");
    assert_eq!(record.description, "app-state text", "app state outranks linked-data");
    assert_eq!(record.keywords, vec!["coffee", "roastery"]);
    assert_eq!(record.image, "https://img.example.com/og.jpg", "meta image wins");
}

#[test]
fn user_overrides_beat_every_extracted_source() {
    let html = r#"<html><body>
        <script id="__NEXT_DATA__" type="application/json">
        {"place": {"tags": ["c", "d"], "summary": "extracted summary"}}
        </script>
        </body></html>"#;

    let user = UserInput {
        keywords: Some("a, b".to_string()),
        description: Some("owner-written detail".to_string()),
    };
    let record = analyze(html, &user);
    assert_eq!(record.keywords, vec!["a", "b"]);
    assert_eq!(record.description, "owner-written detail");
}

#[test]
fn malformed_blocks_degrade_without_aborting_extraction() {
    let html = r#"<html><head>
        <meta property="og:title" content="Resilient Cafe">
        <script type="application/ld+json">{broken</script>
        </head><body>
        <script id="__NEXT_DATA__" type="application/json">also broken</script>
        </body></html>"#;

    let record = analyze(html, &UserInput::default());
    assert_eq!(record.name, "Resilient Cafe");
    assert_eq!(record.description, "unconfirmed");
}

#[test]
fn pipeline_is_deterministic_over_identical_bodies() {
    let html = r#"<html><head>
        <meta property="og:title" content="Twice Cafe">
        <meta name="keywords" content="x, y">
        </head></html>"#;

    let first = analyze(html, &UserInput::default());
    let second = analyze(html, &UserInput::default());
    assert_eq!(first, second);
}

#[test]
fn empty_body_yields_the_all_sentinel_record() {
    let record = analyze("", &UserInput::default());
    assert_eq!(record, placelens_extract::ExtractedRecord::empty());
}
