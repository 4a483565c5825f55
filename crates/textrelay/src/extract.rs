//! Visible-text extraction
//!
//! Reduces raw HTML to a single flat string of visible text. Parsing is
//! lenient (html5ever), so arbitrary input - malformed markup, plain text,
//! or an empty string - always produces a result and never an error.

use scraper::{Html, Selector};

/// Elements whose entire subtree is invisible and must not contribute text.
const HIDDEN_SELECTOR: &str = "script, style";

/// Extract the visible text of an HTML document.
///
/// Script and style subtrees are detached from the parsed tree before text
/// collection, remaining text nodes are joined with single spaces in
/// document order, and the result is whitespace-collapsed. Returns an empty
/// string for pages with no visible text.
pub fn extract_visible_text(html: &str) -> String {
    let mut document = Html::parse_document(html);

    // Static selector, cannot fail to parse
    let hidden = Selector::parse(HIDDEN_SELECTOR).unwrap();
    let doomed: Vec<_> = document.select(&hidden).map(|el| el.id()).collect();
    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let text = document.root_element().text().collect::<Vec<_>>().join(" ");

    collapse_whitespace(&text)
}

/// Collapse whitespace line by line: trim each line, split trimmed lines on
/// double-space runs, trim each fragment, and rejoin the non-empty fragments
/// with single spaces.
///
/// The double-space split (rather than a general whitespace collapse) is the
/// exact rule the ingestion side was tuned against; keep it as is.
fn collapse_whitespace(text: &str) -> String {
    let mut fragments: Vec<&str> = Vec::new();
    for line in text.lines() {
        for fragment in line.trim().split("  ") {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }
    }
    fragments.join(" ")
}
