// src/crawler/mod.rs
// =============================================================================
// This module drives the crawl.
//
// The crawler owns the frontier and the growing result collection, and
// wires the collaborators together: fetch a page, extract its paper and
// its related links, feed the links back into the frontier, repeat until
// the paper quota is met or the frontier runs dry.
//
// Rust concepts:
// - Generics: The crawler works with any Fetch implementation
// - Ownership: One crawl = one crawler = one frontier, nothing shared
// =============================================================================

mod engine;

// Re-export the public API
pub use engine::{CrawlConfig, Crawler, Paper};
