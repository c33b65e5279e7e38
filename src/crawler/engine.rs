// src/crawler/engine.rs
// =============================================================================
// This module implements the bounded, priority-ordered traversal.
//
// How it works:
// 1. Fetch the seed page, record its paper, queue its related links
// 2. Pop the most-cited pending link from the frontier
// 3. Fetch + extract it, record the paper
// 4. If the link is still within the depth limit, queue ITS related links
// 5. Repeat until we have enough papers or the frontier is empty
//
// Stopping policy: quota reached OR frontier drained, whichever comes
// first. Stopping early with fewer papers than asked for is fine.
//
// Failure policy: a failed fetch/extract aborts the whole crawl unless
// skip_failures is set, in which case the link is dropped with a warning
// and the crawl moves on. The seed is special - without it there is
// nothing to crawl, so seed failure always aborts.
//
// Rust concepts:
// - async/await: The fetch is the only suspension point per step
// - Generics with trait bounds: Crawler<F: Fetch>
// =============================================================================

use anyhow::{Context, Result};
use serde::Serialize;

use crate::extract;
use crate::fetch::Fetch;
use crate::frontier::{Frontier, Link};

// Depth recorded on the seed paper, marking it as the crawl's root.
// Reachable papers carry the depth of the link they were found through.
const SEED_DEPTH: i32 = -1;

// A fully fetched paper, ready for the report
//
// Serialize lets us print the collection as JSON with --json.
#[derive(Debug, Clone, Serialize)]
pub struct Paper {
    pub url: String,
    pub title: String,
    pub citation_count: u64,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub depth: i32,
}

// Settings for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed page URL the traversal starts from
    pub init_url: String,
    /// Links at this depth are visited but not expanded further
    pub max_depth: usize,
    /// Stop once this many papers have been collected
    pub tot_papers: usize,
    /// Warn and continue on a failed link instead of aborting
    pub skip_failures: bool,
}

// Drives one bounded crawl
//
// Owns all mutable state for the crawl's duration. Create a fresh
// Crawler for every invocation - the dedup sets must not outlive a run.
pub struct Crawler<F: Fetch> {
    fetcher: F,
    config: CrawlConfig,
    frontier: Frontier,
    papers: Vec<Paper>,
}

impl<F: Fetch> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self {
            fetcher,
            config,
            frontier: Frontier::new(),
            papers: Vec::new(),
        }
    }

    // Runs the crawl to completion and returns the collected papers
    //
    // The collection comes back in the order papers were visited
    // (priority-pop order); the report sorts it before writing.
    pub async fn crawl(mut self) -> Result<Vec<Paper>> {
        // Seed first. Its paper is recorded with the root marker depth,
        // and its related links enter the frontier at depth 1.
        let seed_url = self.config.init_url.clone();
        self.visit(&seed_url, 0, SEED_DEPTH)
            .await
            .with_context(|| format!("Failed to crawl seed page {}", seed_url))?;

        while self.papers.len() < self.config.tot_papers {
            // An empty frontier means the reachable graph is exhausted
            let Some(link) = self.frontier.poll() else {
                println!(
                    "🏁 Frontier drained after {} paper(s)",
                    self.papers.len()
                );
                break;
            };

            match self.visit(&link.url, link.depth, link.depth as i32).await {
                Ok(()) => {}
                Err(e) if self.config.skip_failures => {
                    eprintln!("  Warning: Skipping {}: {:#}", link.url, e);
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to crawl {}", link.url));
                }
            }
        }

        Ok(self.papers)
    }

    // Fetches one page, records its paper, and queues its related links
    //
    // Parameters:
    //   url: the page to visit
    //   depth: hop distance used for the expansion cutoff
    //   record_depth: depth written on the Paper (the seed uses the
    //                 root marker, everything else its link depth)
    async fn visit(&mut self, url: &str, depth: usize, record_depth: i32) -> Result<()> {
        let html = self.fetcher.fetch(url).await?;
        let page = extract::extract_page(&html, url)?;

        // Progress line: one per accepted paper
        println!(
            "📄 [{}/{}] [depth {}] {}",
            self.papers.len() + 1,
            self.config.tot_papers,
            record_depth,
            page.title
        );

        self.papers.push(Paper {
            url: url.to_string(),
            title: page.title,
            citation_count: page.citation_count,
            abstract_text: page.abstract_text,
            depth: record_depth,
        });

        // Expansion cutoff: a page AT the depth limit is still recorded
        // above, but its outbound links are not followed
        if depth < self.config.max_depth {
            for rel in page.related {
                self.frontier.offer(Link {
                    url: rel.url,
                    title: rel.title,
                    citation_count: rel.citation_count,
                    depth: depth + 1,
                });
            }
        }

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does crawl() take `mut self` (not &mut self)?
//    - A crawl runs exactly once; consuming self makes reuse impossible
//    - The papers vec moves out at the end, no clone needed
//
// 2. Why two depth parameters on visit()?
//    - The expansion check needs the hop distance (0 for the seed)
//    - The recorded depth marks the seed specially, so readers of the
//      results can tell the root apart from papers found at depth 1
//
// 3. What does {:#} do in the warning?
//    - anyhow errors carry a chain of context messages
//    - The alternate format prints the whole chain, not just the top
// -----------------------------------------------------------------------------
