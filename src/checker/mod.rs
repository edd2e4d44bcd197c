// src/checker/mod.rs
// =============================================================================
// This module contains the link checking logic.
//
// Submodules:
// - http: Makes HTTP requests to classify links as reachable or dead
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod http;

// Re-export public items from the submodule
// This lets users write `checker::check_link()` instead of
// `checker::http::check_link()`
pub use http::{check_link, CheckOutcome, CheckResult, ResultSink};
