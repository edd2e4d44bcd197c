// src/extract/mod.rs
// =============================================================================
// This module handles link extraction: turning a fetched HTML page into the
// list of raw href values found in its anchor tags.
//
// Submodules:
// - html: Fetches a page and pulls href attributes out of its <a> tags
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application can use.
// =============================================================================

mod html;

// Re-export public items from the submodule
// This lets users write `extract::parse_links()` instead of
// `extract::html::parse_links()`
pub use html::{extract_links, is_page_link, parse_links};
