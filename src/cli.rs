// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Our interface is deliberately small: one positional seed URL plus a flag
// that caps how many HTTP requests may be in flight at once.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-patrol",
    version = "0.1.0",
    about = "Crawl a website and report dead links",
    long_about = "link-patrol starts from a seed URL, recursively visits every page on the \
                  same host, and reports the reachability of every internal and external \
                  link it finds along the way."
)]
pub struct Cli {
    /// Seed URL to start crawling from (absolute, e.g. https://example.com)
    ///
    /// This is a positional argument (required, no flag needed).
    /// Pages on the same host are crawled recursively; links to other
    /// hosts are only checked for reachability.
    pub seed_url: String,

    /// Maximum number of simultaneous in-flight HTTP requests
    ///
    /// This is an optional flag: --concurrency N
    /// #[arg(long, default_value_t = 50)] creates the flag with a default.
    ///
    /// Every internal link spawns a new crawl task, so without a cap a
    /// densely interlinked site could open an unbounded number of
    /// connections at once. This flag bounds that fan-out.
    #[arg(long, default_value_t = 50)]
    pub concurrency: usize,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - The tool does exactly one thing: crawl a site from a seed URL
//    - A plain Parser struct is all we need; clap still generates
//      --help and --version for free
//
// 2. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 3. What is usize?
//    - An unsigned integer type that's the size of a pointer
//    - Used for sizes, lengths, and counts
//    - A natural fit for "how many requests at once"
// -----------------------------------------------------------------------------
