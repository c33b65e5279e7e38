// src/report.rs
// =============================================================================
// This module writes the collected papers to the report file.
//
// Format: one four-line block per paper, separated by a blank line:
//
//   Title:  <title>
//   Abstract:  <abstract>
//   Ref_num:  <citation count>
//   URL:  <url>
//
// The collection arrives in visit order, which is ALMOST sorted - the
// seed always comes first regardless of its count, and ties can land in
// either order - so we sort by descending citation count right before
// writing.
//
// Rendering is split from the filesystem write so the format can be
// tested without touching disk.
// =============================================================================

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::crawler::Paper;

// Sorts the papers (most-cited first) and writes the report
//
// Sorting is stable, so papers with equal counts keep their visit order.
pub fn write_report(papers: &mut [Paper], path: &Path) -> Result<()> {
    papers.sort_by(|a, b| b.citation_count.cmp(&a.citation_count));

    fs::write(path, render(papers))
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

// Renders the report body as one UTF-8 string
fn render(papers: &[Paper]) -> String {
    let mut out = String::new();
    for paper in papers {
        // write! to a String cannot fail; ignore the Result
        let _ = writeln!(out, "Title:  {}", paper.title);
        let _ = writeln!(out, "Abstract:  {}", paper.abstract_text);
        let _ = writeln!(out, "Ref_num:  {}", paper.citation_count);
        let _ = writeln!(out, "URL:  {}", paper.url);
        out.push('\n');
    }
    out
}
