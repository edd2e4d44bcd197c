// src/crawl/orchestrator.rs
// =============================================================================
// This module implements the crawl orchestrator: the piece that ties the
// checker, extractor, and classifier together and drives the recursive,
// concurrent traversal of a site.
//
// The shape of the traversal mirrors the link graph itself. Visiting a page
// spawns one new task per not-yet-visited internal link, and a task only
// finishes after every task it spawned has finished. Awaiting the root task
// therefore joins the entire transitive tree: when it returns, the crawl is
// done.
//
// Fan-out is unbounded at the task level but bounded at the network level:
// a semaphore caps how many tasks may be in their network-active phase
// (checking, fetching, checking externals) at once. Tasks that are merely
// waiting on their children hold no permit, so a deep site cannot deadlock
// the pool.
//
// Rust concepts:
// - Arc<Self>: Tasks share one Crawler; each clone is a cheap handle
// - BoxFuture: An async fn can't recurse directly (its future type would
//   be infinitely sized), so crawl() returns a boxed future instead
// - Semaphore: Counting permits that gate concurrent network work
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use tokio::sync::Semaphore;

use crate::checker::{check_link, ResultSink};
use crate::classify::classify_links;
use crate::extract::extract_links;

use super::visited::VisitedSet;

// How long any single HTTP request may take before we give up on it
// Without this, one unresponsive host would hang the whole crawl
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The crawl orchestrator
//
// One Crawler is built per run and shared across every task it spawns.
// All of its fields are either immutable or internally synchronized, so
// tasks never need any locking beyond what VisitedSet does itself.
pub struct Crawler {
    /// Shared HTTP client (connection pooling across all tasks)
    client: Client,
    /// URLs already claimed by some task, shared by all tasks
    visited: VisitedSet,
    /// Permits gating the network-active phase of tasks
    permits: Arc<Semaphore>,
    /// Where check results are emitted
    results: ResultSink,
}

impl Crawler {
    // Builds a crawler for one run
    //
    // Parameters:
    //   concurrency: cap on simultaneous in-flight HTTP work (clamped to
    //     at least 1, otherwise no task could ever make progress)
    //   results: the sink that receives every CheckResult
    //
    // Returns Arc<Self> because the crawl tasks all need shared ownership
    // of the same crawler.
    pub fn new(concurrency: usize, results: ResultSink) -> Result<Arc<Self>> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Arc::new(Self {
            client,
            visited: VisitedSet::new(),
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
            results,
        }))
    }

    // Runs a full crawl from the seed and waits for it to complete
    //
    // The seed should already be in canonical absolute form (see main.rs),
    // so that links back to the seed page dedup against it correctly.
    //
    // Consumes the Arc: when the task tree finishes, the last handles are
    // dropped, which drops the ResultSink and closes the result channel.
    // That is how consumers learn the stream is over.
    pub async fn run(self: Arc<Self>, seed: String) -> Result<()> {
        let root = tokio::spawn(self.crawl(seed));

        root.await
            .map_err(|e| anyhow!("crawl task panicked: {}", e))?;

        Ok(())
    }

    // Crawls one URL and, transitively, everything it links to on-host
    //
    // Per-task flow:
    // 1. Claim the URL; if some task already has it, contribute nothing
    // 2. Under a permit: check the page, extract + classify its links,
    //    and check each external link once
    // 3. Permit released: spawn a child task per internal link and wait
    //    for all of them
    //
    // Every failure is local to this task. A page that can't be fetched is
    // reported and its subtree is pruned; siblings and parents carry on.
    fn crawl(self: Arc<Self>, url: String) -> BoxFuture<'static, ()> {
        async move {
            // Atomic check-then-mark: of all tasks racing for this URL,
            // exactly one proceeds past this line
            if !self.visited.claim(&url) {
                return;
            }

            // The network-active phase runs inside this block so the
            // permit is dropped before we start waiting on children.
            // A parent blocked on its subtree must not occupy a slot a
            // descendant needs.
            let internal = {
                let _permit = self
                    .permits
                    .clone()
                    .acquire_owned()
                    .await
                    .expect("crawl semaphore closed");

                // Report the page's own reachability even though we are
                // about to fetch it again for extraction
                check_link(&self.client, &url, &self.results).await;

                let hrefs = match extract_links(&self.client, &url).await {
                    Ok(hrefs) => hrefs,
                    Err(e) => {
                        // One unreadable page must not abort the rest of
                        // the crawl tree
                        eprintln!("Failed to extract links from {}: {}", url, e);
                        return;
                    }
                };

                let links = classify_links(&url, &hrefs);

                // External links get a reachability check and nothing
                // more; other hosts are never crawled
                for external in &links.external {
                    check_link(&self.client, external, &self.results).await;
                }

                links.internal
            };

            // Fan out: one concurrent task per internal link. The visited
            // check at the top of each child filters revisits, so cycles
            // in the link graph terminate.
            let mut children = Vec::with_capacity(internal.len());
            for link in internal {
                children.push(tokio::spawn(Arc::clone(&self).crawl(link)));
            }

            // Join: this task is not done until its whole subtree is.
            // A panicked child is reported and the rest still complete.
            for child in children {
                if let Err(e) = child.await {
                    eprintln!("Warning: a crawl task failed: {}", e);
                }
            }
        }
        .boxed()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does crawl() return BoxFuture instead of being an async fn?
//    - An async fn's future embeds the futures it awaits
//    - A recursive async fn would embed itself: an infinite type
//    - Boxing breaks the cycle with one heap allocation per task
//
// 2. What is acquire_owned()?
//    - acquire() borrows the semaphore; acquire_owned() takes an Arc and
//      returns a permit that owns its place in it
//    - The owned form is what you want inside 'static spawned tasks
//    - It only errors if the semaphore was closed, which we never do
//
// 3. How does the crawl know it's finished?
//    - Task completion is the join mechanism: every spawned child is
//      awaited by its parent, so the root task's completion implies the
//      entire tree's completion
//
// 4. Why check a page and then fetch it again for extraction?
//    - The check and the extraction are independent operations with
//      independent failure handling, and the checker never reads bodies
//    - The cost is one extra GET per internal page
// -----------------------------------------------------------------------------
