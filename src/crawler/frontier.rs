//! Frontier management for the breadth-first crawl
//!
//! This module handles:
//! - The FIFO queue of URLs still to visit
//! - Membership tracking so a URL is queued at most once
//! - The visited set, which is never shrunk and never retried

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Duplicate-free FIFO of URLs awaiting a fetch, paired with the visited set
///
/// A URL is accepted by [`Frontier::enqueue`] only if it is neither queued
/// nor visited. Lookups use hash sets, so the no-duplicate check stays O(1)
/// however large the site grows.
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, oldest first
    queue: VecDeque<Url>,

    /// Mirror of `queue` for membership tests
    queued: HashSet<Url>,

    /// URLs that have completed a fetch attempt
    visited: HashSet<Url>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding only the seed URL
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::new();
        frontier.enqueue(seed);
        frontier
    }

    /// Adds a URL to the back of the queue
    ///
    /// # Returns
    ///
    /// * `true` - The URL was added
    /// * `false` - The URL was already visited or already queued
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }

        self.queued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Removes and returns the earliest-enqueued URL
    pub fn dequeue(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Records a completed fetch attempt
    ///
    /// Returns `false` if the URL had already been visited.
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.visited.insert(url.clone())
    }

    /// Returns true if a fetch has already been attempted for `url`
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Returns true if `url` is waiting in the queue
    pub fn is_queued(&self, url: &Url) -> bool {
        self.queued.contains(url)
    }

    /// Number of URLs that have completed a fetch attempt
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no URLs are waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
