// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the seed URL (it must be absolute, with a host)
// 3. Start the crawl and print check results as they stream in
// 4. Exit with proper code (0 = crawl completed, 2 = error)
//
// Everything here is thin glue around the crawl engine: the interesting
// work lives in the extract, classify, checker, and crawl modules.
//
// Rust concepts used:
// - async/await: Because the crawler makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Channels: To receive results from the crawl tasks as they happen
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - HTTP reachability checks
mod classify; // src/classify/ - internal/external link partitioning
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the concurrent traversal engine
mod extract; // src/extract/ - pulling hrefs out of HTML

use anyhow::{anyhow, Result};
use clap::Parser; // Parser trait enables the parse() method
use tokio::sync::mpsc::unbounded_channel;
use url::Url;

use cli::Cli;
use crawl::Crawler;

// The #[tokio::main] attribute transforms our async main into a real main
// function; it creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
//
// A completed crawl exits 0 whether or not dead links were found; the
// findings are the printed result lines, not the exit code. Code 2 is
// reserved for failures to start at all (bad seed URL, client setup).
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // The seed must be an absolute URL with a host; everything the crawl
    // discovers is classified against it
    let seed = Url::parse(&cli.seed_url)
        .map_err(|e| anyhow!("Invalid seed URL '{}': {}", cli.seed_url, e))?;
    if seed.host_str().is_none() {
        return Err(anyhow!("Seed URL has no host: {}", cli.seed_url));
    }

    // The result channel: crawl tasks send, we receive and print.
    // The channel closes when the crawler (and with it every sender
    // clone) is dropped, which ends the printer loop below.
    let (tx, mut rx) = unbounded_channel();

    let crawler = Crawler::new(cli.concurrency, tx)?;

    // Print each check result on its own line as it arrives. Results from
    // different pages interleave in whatever order the tasks produce them.
    let printer = tokio::spawn(async move {
        while let Some(result) = rx.recv().await {
            println!("{}", result);
        }
    });

    // Url::to_string() gives the canonical form (e.g. a bare host gains
    // its trailing slash), so links back to the seed page dedup against it
    crawler.run(seed.to_string()).await?;

    printer
        .await
        .map_err(|e| anyhow!("result printer failed: {}", e))?;

    Ok(0)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why print from a separate task?
//    - Crawl tasks shouldn't block on stdout; they send into an unbounded
//      channel and move on
//    - One printer task keeps lines whole (no interleaved half-lines)
//
// 2. Why canonicalize the seed before crawling?
//    - The visited set keys on canonical URL strings
//    - "https://example.com" and "https://example.com/" must count as the
//      same page, or the seed would be crawled twice
//
// 3. When does the printer loop end?
//    - rx.recv() returns None once every sender is gone
//    - The last sender lives inside the Crawler, which is consumed by
//      run(); when the task tree finishes, the channel closes itself
// -----------------------------------------------------------------------------
