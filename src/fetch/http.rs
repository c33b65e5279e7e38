// src/fetch/http.rs
// =============================================================================
// This module implements page fetching over HTTP.
//
// Key decisions:
// - One reqwest Client, built once, reused for every request
//   (connection pooling makes repeated requests to the same host cheap)
// - The per-request timeout is the crawl's wait budget: a page that
//   doesn't answer within it is a fetch failure, not a hang
// - A non-2xx status is an error too - a 404 page would otherwise be
//   parsed as if it were a paper
//
// Rust concepts:
// - async/await: For network I/O without blocking the thread
// - Result<T, E>: For error handling with the ? operator
// =============================================================================

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The fetching interface the crawler depends on
//
// Given a URL, produce the page's HTML. Implementations own their error
// modes (timeouts, bad statuses, connection failures); the crawler only
// sees success-or-failure.
#[async_trait]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// Fetches pages with a pooled HTTP client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds a fetcher whose requests give up after `wait_time` seconds
    pub fn new(wait_time: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(wait_time))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} from {}", response.status(), url));
        }

        let html = response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", url))?;

        Ok(html)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawl loop's logic (priority, dedup, depth, stopping) has
//      nothing to do with HTTP
//    - Behind a trait, tests can hand the crawler a fake fetcher backed
//      by a HashMap of canned pages - fast, offline, deterministic
//
// 2. What is #[async_trait]?
//    - Plain Rust traits can't hold async fns in a form every caller can
//      use, so the async-trait macro rewrites them into returning a
//      boxed Future
//    - Both the trait and each impl get the attribute
//
// 3. Why is the Client built once?
//    - Building a Client sets up TLS and a connection pool
//    - Reusing it means requests to the same host can share connections
//    - Client is internally reference-counted, so it's cheap to hold
// -----------------------------------------------------------------------------
