// src/classify/links.rs
// =============================================================================
// This module turns the raw hrefs extracted from one page into absolute,
// deduplicated URLs, partitioned by whether they stay on the same host.
//
// We use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs against a base (like a browser does)
// - Produce a canonical string form we can use as a dedup key
//
// Classification is a pure function: same inputs, same outputs, no hidden
// state. Deduplication is scoped to a single call (one page), not across
// pages; the crawler's visited set handles cross-page duplicates.
//
// Rust concepts:
// - HashSet: For O(1) "have we seen this URL on this page" checks
// - Pattern matching: To skip unparseable inputs without failing
// =============================================================================

use std::collections::HashSet;
use url::Url;

use crate::extract::is_page_link;

// The deduplicated links found on a single page, split by host
//
// Both vectors preserve first-seen order, and a URL appears in at most one
// of them. A LinkSet is built per page visit and consumed immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    /// Absolute URLs on the same host as the page (crawl candidates)
    pub internal: Vec<String>,
    /// Absolute URLs on other hosts (check-only, never crawled)
    pub external: Vec<String>,
}

// Classifies raw hrefs relative to the page they were found on
//
// Parameters:
//   base_url: the URL of the page the hrefs came from
//   hrefs: raw href values, as the extractor produced them
//
// Returns: a LinkSet of canonical absolute URLs
//
// Resolution follows standard URL rules: a relative href takes the base's
// scheme/host/path context, a protocol-relative href ("//other.com/x") takes
// the base's scheme, and an already-absolute href overrides the base
// entirely. Hrefs that don't parse are skipped silently - crawled markup is
// untrusted input and link discovery is best-effort, not validation.
//
// If the base itself doesn't parse we return two empty sequences rather
// than an error. In practice the base is a URL we just fetched, so this is
// interface parity more than a reachable path.
pub fn classify_links(base_url: &str, hrefs: &[String]) -> LinkSet {
    let mut links = LinkSet::default();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => return links,
    };

    // Dedup key is the canonical absolute string, scoped to this page
    let mut seen = HashSet::new();

    for href in hrefs {
        let href = href.trim();

        // Same filter the extractor applies; fragments and mailto links
        // never become crawl or check targets, wherever they came from
        if !is_page_link(href) {
            continue;
        }

        // join() resolves relative forms and accepts absolute ones
        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(_) => continue, // unparseable href, skip silently
        };

        // Canonical form: the url crate normalizes as it parses
        // (lowercased host, default port stripped, path made explicit)
        let canonical = resolved.to_string();

        // insert() returns false if the value was already present
        if !seen.insert(canonical.clone()) {
            continue;
        }

        // Host equality includes the port: a link to another port on the
        // same machine is a different site as far as crawling goes
        if resolved.host_str() == base.host_str() && resolved.port() == base.port() {
            links.internal.push(canonical);
        } else {
            links.external.push(canonical);
        }
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does base.join(href) do?
//    - It implements RFC 3986 reference resolution
//    - "https://example.com/a/" + "/b"  = "https://example.com/b"
//    - "https://example.com/a/" + "b"   = "https://example.com/a/b"
//    - "https://example.com/a/" + "https://other.com" = "https://other.com/"
//
// 2. Why dedup on the canonical string and not the raw href?
//    - "/b" and "https://example.com/b" are the same link after
//      resolution, and we only want to handle it once per page
//
// 3. Why skip bad hrefs instead of returning an error?
//    - One broken attribute in a page shouldn't stop us from
//      discovering the other links on it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partitions_internal_and_external() {
        let result = classify_links(
            "https://example.com/a/",
            &hrefs(&["/b", "https://other.com/c", "#frag", "mailto:x@y.com", "/b"]),
        );
        assert_eq!(result.internal, vec!["https://example.com/b"]);
        assert_eq!(result.external, vec!["https://other.com/c"]);
    }

    #[test]
    fn test_relative_resolution_takes_base_context() {
        let result = classify_links(
            "https://example.com/docs/guide/",
            &hrefs(&["intro.html", "../api/", "/top"]),
        );
        assert_eq!(
            result.internal,
            vec![
                "https://example.com/docs/guide/intro.html",
                "https://example.com/docs/api/",
                "https://example.com/top",
            ]
        );
        assert!(result.external.is_empty());
    }

    #[test]
    fn test_protocol_relative_href() {
        let result = classify_links("https://example.com/", &hrefs(&["//other.com/x"]));
        assert!(result.internal.is_empty());
        assert_eq!(result.external, vec!["https://other.com/x"]);
    }

    #[test]
    fn test_dedup_spans_both_partitions() {
        let result = classify_links(
            "https://example.com/",
            &hrefs(&[
                "/x",
                "https://example.com/x",
                "/y",
                "https://ext.example.org/z",
                "https://ext.example.org/z",
            ]),
        );
        assert_eq!(
            result.internal,
            vec!["https://example.com/x", "https://example.com/y"]
        );
        assert_eq!(result.external, vec!["https://ext.example.org/z"]);

        // Partitions are disjoint and duplicate-free
        for url in &result.internal {
            assert!(!result.external.contains(url));
        }
    }

    #[test]
    fn test_malformed_href_is_skipped_silently() {
        let result = classify_links(
            "https://example.com/",
            &hrefs(&["https://exa mple.com/broken", "/fine"]),
        );
        assert_eq!(result.internal, vec!["https://example.com/fine"]);
        assert!(result.external.is_empty());
    }

    #[test]
    fn test_unparseable_base_yields_empty_sets() {
        let result = classify_links("not a url at all", &hrefs(&["/a", "/b"]));
        assert!(result.internal.is_empty());
        assert!(result.external.is_empty());
    }

    #[test]
    fn test_different_port_is_external() {
        let result = classify_links(
            "http://127.0.0.1:8080/",
            &hrefs(&["/same", "http://127.0.0.1:9090/other"]),
        );
        assert_eq!(result.internal, vec!["http://127.0.0.1:8080/same"]);
        assert_eq!(result.external, vec!["http://127.0.0.1:9090/other"]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let input = hrefs(&["/b", "https://other.com/c", "/b", "relative"]);
        let first = classify_links("https://example.com/a/", &input);
        let second = classify_links("https://example.com/a/", &input);
        assert_eq!(first, second);
    }
}
