// src/classify/mod.rs
// =============================================================================
// This module handles link classification: resolving the raw hrefs from one
// page against that page's URL, deduplicating them, and splitting them into
// internal links (same host, will be crawled) and external links (different
// host, only checked).
//
// Submodules:
// - links: The resolution and partitioning logic
//
// This file (mod.rs) is the module root - it re-exports the public API.
// =============================================================================

mod links;

pub use links::{classify_links, LinkSet};
