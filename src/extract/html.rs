// src/extract/html.rs
// =============================================================================
// This module extracts raw links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Extraction is a pure transform from markup to a list of strings: no URL
// resolution happens here (that's the classifier's job) and the only network
// call is the page fetch in extract_links(). The hrefs come back in document
// order, including anchors nested arbitrarily deep in the tree.
//
// Rust concepts:
// - Result<T, E>: For operations that can fail (the fetch)
// - Iterators: For walking the selected elements
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};

// Decides whether an href value points at a navigable page
//
// We skip:
// - empty hrefs (anchor tags used as markup hooks)
// - "#..." (same-page fragment anchors)
// - "mailto:..." (email addresses, nothing to crawl or check)
//
// The classifier applies the same filter, so hrefs that arrive there by
// another route are held to the same rule.
pub fn is_page_link(href: &str) -> bool {
    !href.is_empty() && !href.starts_with('#') && !href.starts_with("mailto:")
}

// Extracts all anchor hrefs from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of trimmed href values in document order
//
// Example:
//   html = "<div><a href='/docs'>Docs</a></div>"
//   result = ["/docs"]
//
// html5ever is error-recovering, so malformed markup never fails here; it
// just yields whatever anchors could still be recognized. An empty result
// for a parseable document is not an error.
pub fn parse_links(html: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags that carry an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    // select() walks the tree depth-first, so nested anchors come out in
    // document order
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // Trim surrounding whitespace before filtering
            let href = href.trim();

            if is_page_link(href) {
                links.push(href.to_string());
            }
        }
    }

    links
}

// Fetches a page and extracts the raw links from its body
//
// Parameters:
//   client: shared reqwest client (connection pooling)
//   url: the page to fetch
//
// Returns: Result<Vec<String>>
//   Success: the raw hrefs found in the page body
//   Error: the fetch failed (connection refused, timeout, etc.)
//
// Note that the body is parsed whatever the HTTP status was. A 404 page is
// still HTML and still gets scanned; reporting the status itself is the
// checker's job, not ours.
pub async fn extract_links(client: &Client, url: &str) -> Result<Vec<String>> {
    let body = client.get(url).send().await?.text().await?;
    Ok(parse_links(&body))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. Why doesn't parse_links return a Result?
//    - html5ever follows the HTML5 parsing algorithm, which defines a
//      recovery for every malformed input
//    - So parsing cannot fail; only the network fetch can
//
// 3. Why trim the href?
//    - Real-world markup contains href=" /docs " with stray whitespace
//    - The classifier later needs a clean string to resolve
//
// 4. What does .value() do?
//    - element is an ElementRef (reference to an HTML element)
//    - .value() gets the underlying Element
//    - .attr("href") gets the value of the href attribute
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_document_order() {
        let html = r#"
            <body>
                <a href="https://example.com/one">one</a>
                <ul>
                    <li><a href="/two">two</a></li>
                    <li><span><a href="three.html">three</a></span></li>
                </ul>
            </body>
        "#;
        let links = parse_links(html);
        assert_eq!(
            links,
            vec!["https://example.com/one", "/two", "three.html"]
        );
    }

    #[test]
    fn test_trims_whitespace() {
        let html = r#"<a href="  /docs  ">Docs</a>"#;
        assert_eq!(parse_links(html), vec!["/docs"]);
    }

    #[test]
    fn test_skips_empty_fragment_and_mailto() {
        let html = r##"
            <a href="">hook</a>
            <a href="#top">top</a>
            <a href="mailto:test@example.com">mail</a>
            <a href="/keep">keep</a>
        "##;
        assert_eq!(parse_links(html), vec!["/keep"]);
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let html = r#"<a name="section">no href</a><a href="/here">here</a>"#;
        assert_eq!(parse_links(html), vec!["/here"]);
    }

    #[test]
    fn test_zero_anchors_is_empty_not_an_error() {
        let html = "<html><body><p>nothing to see</p></body></html>";
        assert!(parse_links(html).is_empty());
    }

    #[test]
    fn test_malformed_markup_is_best_effort() {
        // Unclosed tags everywhere; html5ever recovers and still sees
        // the href
        let html = r#"<html><body><p><a href="/ok">ok<span>never closed"#;
        assert_eq!(parse_links(html), vec!["/ok"]);
    }

    #[test]
    fn test_nested_anchors_at_any_depth() {
        let html = r#"
            <div><div><div><table><tr><td>
                <a href="/deep">deep</a>
            </td></tr></table></div></div></div>
        "#;
        assert_eq!(parse_links(html), vec!["/deep"]);
    }
}
