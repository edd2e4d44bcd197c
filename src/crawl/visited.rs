// src/crawl/visited.rs
// =============================================================================
// This module implements the shared visited set.
//
// The visited set is the only mutable state shared across crawl tasks, and
// it exists to uphold one invariant: no URL is ever visited twice, even when
// many tasks discover it at the same moment. That means "is it visited?"
// and "mark it visited" must happen as one atomic step; two separate calls
// would leave a window where two tasks both decide the URL is fresh.
//
// Rust concepts:
// - Arc: Shared ownership across tasks (atomic reference counting)
// - Mutex: Mutual exclusion around the HashSet
// - HashSet: O(1) membership checks, no duplicates
// =============================================================================

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// A concurrency-safe set of already-claimed URLs
//
// Cloning a VisitedSet is cheap and every clone shares the same underlying
// set, so each crawl task can carry its own handle. The set only ever
// grows; it lives for one crawl run and is dropped with the crawler.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl VisitedSet {
    /// Creates an empty visited set for a new crawl run
    pub fn new() -> Self {
        Self::default()
    }

    // Atomically claims a URL for visiting
    //
    // Returns true if the caller is the first to claim this URL and should
    // proceed, false if some task (possibly this one, earlier) already
    // claimed it. The check and the mark happen under one lock guard, so
    // exactly one of any number of racing callers gets true.
    pub fn claim(&self, url: &str) -> bool {
        let mut set = self.inner.lock().expect("visited set lock poisoned");

        // HashSet::insert returns false if the value was already present,
        // which is exactly the check-then-mark we need in one step
        set.insert(url.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<Mutex<...>> and not just Mutex<...>?
//    - Mutex gives exclusion, Arc gives shared ownership
//    - Tasks are spawned with 'static lifetimes, so they can't borrow a
//      set owned by the caller; each needs its own owning handle
//
// 2. Why a std Mutex instead of tokio's async Mutex?
//    - The critical section is a single HashSet insert: microseconds,
//      never awaits
//    - Holding a std Mutex across .await would be a bug, but we never do
//
// 3. What about lock poisoning?
//    - A std Mutex is "poisoned" if a thread panics while holding it
//    - Nothing in claim() can panic mid-update, so we treat poisoning as
//      an unrecoverable programmer error and expect()
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_wins_second_loses() {
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/"));
        assert!(!visited.claim("https://example.com/"));
        assert!(visited.claim("https://example.com/other"));
    }

    #[test]
    fn test_exactly_one_of_many_racing_claims_succeeds() {
        let visited = VisitedSet::new();
        let mut handles = Vec::new();

        for _ in 0..32 {
            let visited = visited.clone();
            handles.push(std::thread::spawn(move || {
                visited.claim("https://example.com/contended")
            }));
        }

        let wins = handles
            .into_iter()
            .map(|h| h.join().expect("claim thread panicked"))
            .filter(|&won| won)
            .count();

        assert_eq!(wins, 1);
    }
}
