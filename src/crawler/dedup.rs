//! Content deduplication
//!
//! Pages are fingerprinted with SHA-256 over their whitespace-collapsed text.
//! A page is accepted only if its text is long enough and its fingerprint has
//! not been accepted before.

use crate::crawler::parser::normalize_whitespace;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

/// Fixed-size hash of normalized page text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Computes the fingerprint of `text` after collapsing whitespace
    pub fn of(text: &str) -> Self {
        let normalized = normalize_whitespace(text);
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Decision for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// New content; the fingerprint has been recorded
    Accepted(Fingerprint),
    /// Fewer characters than the minimum
    TooShort { length: usize },
    /// Same content as a page accepted earlier
    Duplicate(Fingerprint),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Tracks accepted fingerprints for one crawl run
#[derive(Debug)]
pub struct Deduplicator {
    seen: HashSet<Fingerprint>,
    min_length: usize,
}

impl Deduplicator {
    /// Creates a deduplicator rejecting texts shorter than `min_length` characters
    pub fn new(min_length: usize) -> Self {
        Self {
            seen: HashSet::new(),
            min_length,
        }
    }

    /// Evaluates a page's normalized text
    ///
    /// The length check runs first, so short pages never enter the
    /// fingerprint set. Length is counted in characters, not bytes.
    pub fn evaluate(&mut self, text: &str) -> Verdict {
        let length = text.chars().count();
        if length < self.min_length {
            return Verdict::TooShort { length };
        }

        let fingerprint = Fingerprint::of(text);
        if self.seen.insert(fingerprint) {
            Verdict::Accepted(fingerprint)
        } else {
            Verdict::Duplicate(fingerprint)
        }
    }

    /// Number of distinct fingerprints accepted so far
    pub fn accepted_count(&self) -> usize {
        self.seen.len()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}
