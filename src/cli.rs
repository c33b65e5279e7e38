// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands here - the tool does exactly one thing
// (crawl a citation graph), so every option is a flag on the top level.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// Default seed page when -i/--init-url is not given
const DEFAULT_INIT_URL: &str =
    "https://xueshu.baidu.com/usercenter/paper/show?paperid=3821a90f58762386e257eb4e6fa11f79";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "paper-crawler",
    version = "0.1.0",
    about = "Crawl an academic citation graph, most-cited papers first",
    long_about = "paper-crawler starts at a seed publication page, follows related-paper \
                  links in order of citation count, and writes the collected papers to a \
                  text report. The crawl stops once enough papers are collected or the \
                  reachable graph is exhausted within the depth limit."
)]
pub struct Cli {
    /// Maximum link depth from the seed; papers found at this depth
    /// are collected but their own related links are not followed
    #[arg(short = 'd', long, default_value_t = 5)]
    pub max_depth: usize,

    /// Target number of papers to collect (the crawl may finish with
    /// fewer if the graph runs out first)
    #[arg(short = 't', long, default_value_t = 10)]
    pub tot_papers: usize,

    /// Per-fetch wait budget in seconds (request timeout)
    #[arg(short = 'w', long, default_value_t = 2)]
    pub wait_time: u64,

    /// Seed publication page URL to start crawling from
    #[arg(short = 'i', long, default_value = DEFAULT_INIT_URL)]
    pub init_url: String,

    /// Where to write the text report
    #[arg(short = 'o', long, default_value = "result.txt")]
    pub output: PathBuf,

    /// Also print the sorted collection as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Warn and continue when a link fails to fetch or parse, instead
    /// of aborting the whole crawl
    #[arg(long)]
    pub skip_failures: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["paper-crawler"]);
        assert_eq!(cli.max_depth, 5);
        assert_eq!(cli.tot_papers, 10);
        assert_eq!(cli.wait_time, 2);
        assert_eq!(cli.init_url, DEFAULT_INIT_URL);
        assert_eq!(cli.output, PathBuf::from("result.txt"));
        assert!(!cli.json);
        assert!(!cli.skip_failures);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "paper-crawler",
            "-d", "2",
            "-t", "25",
            "-w", "5",
            "-i", "https://scholar.example/seed",
            "-o", "out.txt",
        ]);
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.tot_papers, 25);
        assert_eq!(cli.wait_time, 5);
        assert_eq!(cli.init_url, "https://scholar.example/seed");
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }
}
