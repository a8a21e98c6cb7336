//! End-to-end rendering of JSON document fixtures.
//!
//! These tests load `tests/fixtures/guide.json`, render it under several
//! option sets and check the complete output, including the spliced table
//! of contents and the footnote section.

#![cfg(feature = "serde")]

use std::fs;

use hemline::{Document, Error, RenderOptions, render_html};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

fn guide() -> Document {
    Document::from_path(fixture_path("guide.json")).expect("Failed to load guide fixture")
}

const GUIDE_TOC: &str = concat!(
    "<nav>\n",
    "<ul>\n",
    "<li><a href=\"#toc_0\">User Guide</a>\n",
    "<ul>\n",
    "<li><a href=\"#toc_1\">Install</a></li>\n",
    "<li><a href=\"#usage\">Usage</a>\n",
    "<ul>\n",
    "<li><a href=\"#toc_2\"><strong>Advanced</strong></a></li>\n",
    "</ul></li>\n",
    "<li><a href=\"#toc_3\">FAQ</a></li>\n",
    "</ul></li>\n",
    "</ul>\n",
    "</nav>\n",
);

const GUIDE_BODY: &str = concat!(
    "<h1 id=\"toc_0\">User Guide</h1>\n",
    "<p>Read the <a href=\"docs/intro.html\">introduction</a> first",
    "<sup class=\"footnote-ref\" id=\"fnref:first-note\"><a rel=\"footnote\" href=\"#fn:first-note\">1</a></sup>.</p>\n",
    "<h2 id=\"toc_1\">Install</h2>\n",
    "<ul>\n<li>Download</li>\n<li>Unpack</li>\n</ul>\n",
    "<pre><code class=\"language-sh\">tar xf pkg.tar &amp;&amp; ./install</code></pre>\n",
    "<h2 id=\"usage\">Usage</h2>\n",
    "<p><a href=\"https://example.com/help\">https://example.com/help</a>",
    " or <a href=\"mailto:help@example.com\">help@example.com</a></p>\n",
    "<h3 id=\"toc_2\"><strong>Advanced</strong></h3>\n",
    "<hr>\n",
    "<h2 id=\"toc_3\">FAQ</h2>\n",
    "<div class=\"footnotes\">\n<hr>\n<ol>\n",
    "<li id=\"fn:first-note\"><p>Or skip it.</p>\n</li>\n",
    "</ol>\n</div>\n",
);

// ============================================================================
// Table of Contents
// ============================================================================

#[test]
fn test_guide_with_toc() {
    let html = render_html(&guide(), RenderOptions::new().with_toc(true));
    assert_eq!(html, format!("{GUIDE_TOC}\n{GUIDE_BODY}"));
}

#[test]
fn test_guide_toc_only() {
    let options = RenderOptions {
        omit_contents: true,
        ..RenderOptions::new().with_toc(true)
    };
    assert_eq!(render_html(&guide(), options), GUIDE_TOC);
}

#[test]
fn test_guide_without_toc_has_no_generated_ids() {
    let html = render_html(&guide(), RenderOptions::default());
    assert!(!html.contains("<nav>"));
    assert!(!html.contains("toc_"));
    assert!(html.contains("<h2 id=\"usage\">Usage</h2>"));
    assert!(html.starts_with("<h1>User Guide</h1>\n"));
}

#[test]
fn test_guide_complete_page() {
    let options = RenderOptions::new()
        .with_toc(true)
        .with_complete_page(true)
        .with_title("Guide");
    let html = render_html(&guide(), options);

    assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n  <title>Guide</title>\n"));
    assert!(html.contains(&format!("<body>\n\n{GUIDE_TOC}{GUIDE_BODY}\n</body>\n</html>\n")));
}

// ============================================================================
// Link Policy
// ============================================================================

#[test]
fn test_guide_absolute_prefix() {
    let options = RenderOptions {
        nofollow_links: true,
        ..RenderOptions::new().with_absolute_prefix("https://site.org")
    };
    let html = render_html(&guide(), options);

    assert!(html.contains("<a href=\"https://site.org/docs/intro.html\">introduction</a>"));
    assert!(html.contains(
        "<a href=\"https://example.com/help\" rel=\"nofollow\">https://example.com/help</a>"
    ));
}

#[test]
fn test_guide_skip_links() {
    let options = RenderOptions {
        skip_links: true,
        ..Default::default()
    };
    let html = render_html(&guide(), options);

    assert!(html.contains("Read the <tt>introduction</tt> first"));
    assert!(html.contains("<tt>https://example.com/help</tt>"));
    // footnote references are not links in the skip sense
    assert!(html.contains("href=\"#fn:first-note\""));
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");
    fs::write(
        &path,
        r#"{"blocks": [{"type": "paragraph", "content": [{"type": "text", "text": "x < y"}]}]}"#,
    )
    .unwrap();

    let doc = Document::from_path(&path).unwrap();
    assert_eq!(render_html(&doc, RenderOptions::default()), "<p>x &lt; y</p>\n");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Document::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_invalid_heading_level() {
    let err = Document::from_json(
        r#"{"blocks": [{"type": "heading", "level": 7, "content": [{"type": "text", "text": "x"}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidDocument(_)));
    assert!(err.to_string().contains("heading level 7"));
}
