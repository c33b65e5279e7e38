// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run one crawl from the seed page
// 3. Write the text report (and optionally print JSON)
// 4. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl suspends on every page fetch
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawler;       // src/crawler/ - the traversal loop
mod extract;       // src/extract/ - page parsing
mod fetch;         // src/fetch/ - HTTP fetching
mod frontier;      // src/frontier/ - dedup + priority queue
mod report;        // src/report.rs - result file writing

use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use crawler::{CrawlConfig, Crawler};
use fetch::HttpFetcher;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed (full quota or graph drained early)
//   Err = unrecovered fetch/extract/write error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Crawling citation graph from: {}", cli.init_url);
    println!("📊 Max depth: {}, target papers: {}", cli.max_depth, cli.tot_papers);

    let fetcher = HttpFetcher::new(cli.wait_time)?;
    let crawler = Crawler::new(
        fetcher,
        CrawlConfig {
            init_url: cli.init_url,
            max_depth: cli.max_depth,
            tot_papers: cli.tot_papers,
            skip_failures: cli.skip_failures,
        },
    );

    let mut papers = crawler.crawl().await?;

    // Sorts (most-cited first) before writing
    report::write_report(&mut papers, &cli.output)?;

    if cli.json {
        // Serialize the sorted collection to JSON and print
        let json_output = serde_json::to_string_pretty(&papers)?;
        println!("{}", json_output);
    }

    println!();
    println!("📊 Summary:");
    println!("   📄 Papers collected: {}", papers.len());
    println!("   💾 Report written to: {}", cli.output.display());

    Ok(0)
}
