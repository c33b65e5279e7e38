// src/extract/mod.rs
// =============================================================================
// This module turns a fetched HTML page into structured data.
//
// Two responsibilities:
// - Read the paper shown on the page itself: title, abstract, citation count
// - Collect the outbound related-paper links with their claimed counts
//
// All knowledge of the scholar site's markup (CSS classes, the layout of
// the related-papers list, the "1.5万"-style count format) lives here.
// The crawler never looks at HTML.
//
// Rust concepts:
// - CSS selectors via the scraper crate
// - Option<T> for parts of the page that may legitimately be absent
// =============================================================================

mod page;

// Re-export the public API
pub use page::{extract_page, parse_citation_count, PageExtract, RelatedLink};
