//! URL frontier for breadth-first traversal
//!
//! The frontier owns two disjoint sets: URLs pending a visit, queued in
//! discovery order, and URLs already visited. A URL handed out by
//! [`Frontier::next`] is held in flight until [`Frontier::mark_visited`], so it
//! cannot be queued again while its own page is being processed.

use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

/// Returned by [`Frontier::next`] once no URLs are pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frontier is empty")]
pub struct EmptyFrontier;

#[derive(Debug, Default)]
pub struct Frontier {
    /// FIFO queue of pending URLs
    pending: VecDeque<String>,

    /// Multiplicity of each URL in `pending`; seeds are not deduplicated
    queued: HashMap<String, usize>,

    /// URLs returned by `next` and not yet marked visited
    in_flight: HashSet<String>,

    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier seeded with the given URLs
    pub fn with_seeds<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frontier = Self::new();
        frontier.seed(urls);
        frontier
    }

    /// Queues the given URLs in order, without deduplication
    pub fn seed<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in urls {
            self.enqueue(url.into());
        }
    }

    /// Queues a URL unless it is already pending, in flight, or visited
    ///
    /// Returns true if the URL was queued.
    pub fn add(&mut self, url: &str) -> bool {
        if self.queued.contains_key(url)
            || self.in_flight.contains(url)
            || self.visited.contains(url)
        {
            return false;
        }

        self.enqueue(url.to_string());
        true
    }

    /// Removes and returns the earliest-queued URL
    ///
    /// Entries visited since they were queued (duplicate seeds) are skipped.
    /// The caller must later pass the URL to [`Frontier::mark_visited`].
    pub fn next(&mut self) -> Result<String, EmptyFrontier> {
        while let Some(url) = self.pending.pop_front() {
            self.dequeue_count(&url);

            if self.visited.contains(&url) {
                tracing::trace!("Dropping already visited URL {} from frontier", url);
                continue;
            }

            self.in_flight.insert(url.clone());
            return Ok(url);
        }

        Err(EmptyFrontier)
    }

    /// Marks a URL visited; idempotent
    ///
    /// Any pending copies are dropped so the URL never sits in both sets.
    pub fn mark_visited(&mut self, url: &str) {
        self.in_flight.remove(url);

        if self.queued.remove(url).is_some() {
            self.pending.retain(|pending| pending != url);
        }

        self.visited.insert(url.to_string());
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.queued.contains_key(url)
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of pending entries
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    fn enqueue(&mut self, url: String) {
        *self.queued.entry(url.clone()).or_insert(0) += 1;
        self.pending.push_back(url);
    }

    fn dequeue_count(&mut self, url: &str) {
        if let Some(count) = self.queued.get_mut(url) {
            *count -= 1;
            if *count == 0 {
                self.queued.remove(url);
            }
        }
    }
}
