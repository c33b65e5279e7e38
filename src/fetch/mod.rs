// src/fetch/mod.rs
// =============================================================================
// This module fetches pages from the web.
//
// The crawler never talks to reqwest directly - it goes through the Fetch
// trait. That keeps all the network plumbing (timeouts, TLS, status codes)
// in one place, and lets tests drive the crawler with canned HTML instead
// of live requests.
//
// Rust concepts:
// - Traits: Define a shared interface (like interfaces in other languages)
// - async-trait: Allows async functions inside traits
// =============================================================================

mod http;

// Re-export the public API
pub use http::{Fetch, HttpFetcher};
