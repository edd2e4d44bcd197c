// src/crawl/mod.rs
// =============================================================================
// This module is the concurrency core: the recursive, deduplicated,
// fan-out/join traversal of a site.
//
// Submodules:
// - visited: The shared set that guarantees each URL is claimed at most once
// - orchestrator: The Crawler that drives checking, extraction,
//   classification, and recursive task spawning
//
// How a crawl works:
// 1. Claim the URL in the visited set (atomically; losers bail out)
// 2. Check the page's own reachability
// 3. Fetch the page and extract its links
// 4. Classify links into internal and external
// 5. Check each external link once
// 6. Spawn a concurrent crawl task per internal link and wait for the
//    whole subtree to finish
// =============================================================================

mod orchestrator;
mod visited;

pub use orchestrator::Crawler;
pub use visited::VisitedSet;
