// src/frontier/pool.rs
// =============================================================================
// This module implements the deduplicating priority queue of pending links.
//
// How it works:
// 1. offer() is called with every related-paper link we discover
// 2. The title is normalized (punctuation/whitespace stripped) and checked
//    against every title we've ever seen - the same paper often hides
//    behind two different tracking URLs
// 3. The URL is checked against every URL we've ever seen
// 4. Accepted links go into a max-heap keyed on citation count
// 5. poll() always hands back the most-cited pending link
//
// Dedup is permanent: once a URL or title has been offered, it stays in
// the seen-sets for the whole crawl, even if the link was rejected.
//
// Rust concepts:
// - BinaryHeap: A max-heap; pop() returns the greatest element
// - Ord/PartialOrd: Traits that define how elements compare
// - HashSet: To track seen URLs and titles (O(1) lookup)
// =============================================================================

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

// Punctuation stripped during title normalization, covering both ASCII
// and the full-width CJK forms that show up on scholar pages.
const TITLE_PUNCTUATION: &str = "+.!/_,$%^*(\"':-‐—！，。？、~@#￥…&（）";

// A pending, unvisited candidate paper.
//
// depth = how many link hops from the seed page this candidate was found.
// It is set once when the link is discovered and never changes.
#[derive(Debug, Clone)]
pub struct Link {
    pub url: String,
    pub title: String,
    pub citation_count: u64,
    pub depth: usize,
}

// Heap entry wrapping a Link with an insertion sequence number.
//
// The ordering lives here, NOT on Link itself: two links with the same
// citation count are equal in *priority* but are still different papers.
// Link identity is the URL; priority is this wrapper's concern.
#[derive(Debug)]
struct HeapEntry {
    link: Link,
    seq: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the "greatest" entry pops first.
        // Primary key: citation count, highest first.
        // Tie-break: earliest insertion first, so we reverse the sequence
        // comparison (a smaller seq must compare as greater).
        self.link
            .citation_count
            .cmp(&other.link.citation_count)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

// Normalizes a title for dedup purposes
//
// Strips all whitespace plus a fixed set of ASCII and CJK punctuation.
// The same input always produces the same output, regardless of locale.
//
// Example:
//   "Deep Learning: A Survey!" -> "DeepLearningASurvey"
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_whitespace() && !TITLE_PUNCTUATION.contains(*c))
        .collect()
}

// The crawl frontier: discovered-but-unvisited links in priority order
//
// Owned exclusively by one Crawler for the duration of one crawl.
// A fresh crawl gets a fresh Frontier - the seen-sets are never shared
// across invocations.
#[derive(Debug, Default)]
pub struct Frontier {
    seen_urls: HashSet<String>,
    seen_titles: HashSet<String>,
    heap: BinaryHeap<HeapEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Offers a candidate link to the frontier
    //
    // Returns true if the link was accepted, false if it was a duplicate.
    // Rejection is silent and expected - citation graphs are dense, so
    // most discovered links point at papers we already know about.
    //
    // Order of checks matters: the title check runs first so a paper
    // reachable through two different URLs is only queued once.
    pub fn offer(&mut self, link: Link) -> bool {
        let normalized = normalize_title(&link.title);

        if self.seen_titles.contains(&normalized) {
            return false;
        }
        if self.seen_urls.contains(&link.url) {
            return false;
        }

        self.seen_urls.insert(link.url.clone());
        self.seen_titles.insert(normalized);
        self.heap.push(HeapEntry {
            link,
            seq: self.next_seq,
        });
        self.next_seq += 1;

        true
    }

    // Removes and returns the most-cited pending link
    //
    // Returns None when the frontier is exhausted. That's not an error -
    // it just means the reachable graph ran out before the quota did.
    pub fn poll(&mut self) -> Option<Link> {
        self.heap.pop().map(|entry| entry.link)
    }

    /// Number of links waiting to be visited
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BinaryHeap and not VecDeque?
//    - VecDeque gives first-in-first-out order (plain breadth-first)
//    - BinaryHeap gives priority order: pop() always returns the greatest
//      element according to Ord
//    - We want "most-cited first", so a heap is the natural fit
//
// 2. Why a wrapper struct (HeapEntry) instead of implementing Ord on Link?
//    - "Has the same citation count" is NOT the same as "is the same paper"
//    - If Link itself said two equal-count links are equal, identity and
//      priority would get tangled together
//    - The wrapper keeps ordering private to the heap; identity stays
//      with the URL in the seen-sets
//
// 3. What is the seq field for?
//    - BinaryHeap makes no promise about the order of equal elements
//    - Adding an insertion counter to the comparison makes ties resolve
//      first-in-first-out, every run, on every platform
//
// 4. Why does offer() clone the URL?
//    - The URL needs to live in two places: the seen-set and the queued
//      Link itself
//    - Two owners means a clone; the strings are short, so this is cheap
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str, title: &str, citations: u64, depth: usize) -> Link {
        Link {
            url: url.to_string(),
            title: title.to_string(),
            citation_count: citations,
            depth,
        }
    }

    #[test]
    fn test_normalize_strips_whitespace_and_punctuation() {
        assert_eq!(normalize_title("Deep Learning: A Survey!"), "DeepLearningASurvey");
        assert_eq!(normalize_title("  spaced   out  "), "spacedout");
    }

    #[test]
    fn test_normalize_strips_cjk_punctuation() {
        assert_eq!(normalize_title("深度学习，综述。"), "深度学习综述");
        assert_eq!(normalize_title("（机器学习）！"), "机器学习");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let input = "A/B_Testing, at Scale.";
        assert_eq!(normalize_title(input), normalize_title(input));
        assert_eq!(normalize_title(input), "ABTestingatScale");
    }

    #[test]
    fn test_offer_accepts_new_link() {
        let mut frontier = Frontier::new();
        assert!(frontier.offer(link("https://a.example/1", "Paper One", 10, 1)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_same_url_queued_only_once() {
        let mut frontier = Frontier::new();
        assert!(frontier.offer(link("https://a.example/1", "Paper One", 10, 1)));
        assert!(!frontier.offer(link("https://a.example/1", "Different Title", 99, 2)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_same_title_under_different_url_rejected() {
        let mut frontier = Frontier::new();
        // Same work, two tracking URLs, titles differ only in punctuation
        assert!(frontier.offer(link("https://a.example/1", "Paper One", 10, 1)));
        assert!(!frontier.offer(link("https://a.example/2?track=9", "Paper, One!", 10, 1)));
        assert_eq!(frontier.len(), 1);

        let first = frontier.poll().unwrap();
        assert_eq!(first.url, "https://a.example/1");
        assert!(frontier.poll().is_none());
    }

    #[test]
    fn test_poll_returns_most_cited_first() {
        let mut frontier = Frontier::new();
        frontier.offer(link("https://a.example/low", "Low", 3, 1));
        frontier.offer(link("https://a.example/high", "High", 500, 1));
        frontier.offer(link("https://a.example/mid", "Mid", 42, 1));

        assert_eq!(frontier.poll().unwrap().citation_count, 500);
        assert_eq!(frontier.poll().unwrap().citation_count, 42);
        assert_eq!(frontier.poll().unwrap().citation_count, 3);
        assert!(frontier.poll().is_none());
    }

    #[test]
    fn test_poll_sequence_is_non_increasing() {
        let mut frontier = Frontier::new();
        let counts = [7u64, 100, 0, 55, 55, 3, 99];
        for (i, count) in counts.iter().enumerate() {
            frontier.offer(link(&format!("https://a.example/{}", i), &format!("t{}", i), *count, 1));
        }

        let mut last = u64::MAX;
        while let Some(popped) = frontier.poll() {
            assert!(popped.citation_count <= last);
            last = popped.citation_count;
        }
    }

    #[test]
    fn test_equal_counts_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.offer(link("https://a.example/first", "First", 10, 1));
        frontier.offer(link("https://a.example/second", "Second", 10, 1));
        frontier.offer(link("https://a.example/third", "Third", 10, 1));

        assert_eq!(frontier.poll().unwrap().url, "https://a.example/first");
        assert_eq!(frontier.poll().unwrap().url, "https://a.example/second");
        assert_eq!(frontier.poll().unwrap().url, "https://a.example/third");
    }

    #[test]
    fn test_poll_empty_returns_none() {
        let mut frontier = Frontier::new();
        assert!(frontier.poll().is_none());
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_depth_survives_the_queue() {
        let mut frontier = Frontier::new();
        frontier.offer(link("https://a.example/1", "Paper One", 10, 3));
        assert_eq!(frontier.poll().unwrap().depth, 3);
    }
}
