// src/frontier/mod.rs
// =============================================================================
// This module manages the crawl frontier.
//
// The frontier is the set of papers we've discovered but not yet visited.
// It has two jobs:
// - Keep candidates ordered so the most-cited paper is always fetched next
// - Reject duplicates (same URL, or same title under a different URL)
//
// Why a dedicated module?
// - Dedup + priority ordering is the heart of the crawler
// - Everything else (fetching, HTML parsing, reporting) just feeds it
//
// Rust concepts:
// - BinaryHeap: A priority queue from the standard library
// - HashSet: O(1) membership checks for the dedup sets
// =============================================================================

mod pool;

// Re-export the public API
pub use pool::{normalize_title, Frontier, Link};
