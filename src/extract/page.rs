// src/extract/page.rs
// =============================================================================
// This module extracts paper data from a scholar page's HTML.
//
// Page anatomy (the bits we care about):
//   <div class="main-info">          - the paper shown on this page
//     <h3>                           - title (required)
//     <p class="abstract">           - abstract (often missing)
//     <p class="ref-wr-num">         - citation count text
//   <ul class="related_lists">       - related papers (may be absent)
//     <li>
//       <p class="rel_title"><a>     - link href + title
//       <div class="sc_info"><a>     - that paper's citation count text
//
// Citation counts come as either a plain integer ("12300") or a decimal
// with a ten-thousands unit ("1.5万" = 15000). Anything else counts as 0.
//
// Rust concepts:
// - scraper: Parses HTML and queries it with CSS selectors
// - url: Resolves relative hrefs against the page URL
// =============================================================================

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use url::Url;

// Everything extracted from one fetched page
#[derive(Debug, Clone)]
pub struct PageExtract {
    /// Title of the paper shown on the page
    pub title: String,
    /// Abstract text, or the "No Abstract" sentinel
    pub abstract_text: String,
    /// Citation count of the page's own paper (0 if unparseable)
    pub citation_count: u64,
    /// Outbound related-paper links found on the page
    pub related: Vec<RelatedLink>,
}

// One related-paper entry, as claimed by the page
//
// The count here is what the listing says, not ground truth - the paper's
// own page may disagree once we fetch it. It's only used for ordering.
#[derive(Debug, Clone)]
pub struct RelatedLink {
    pub url: String,
    pub title: String,
    pub citation_count: u64,
}

// Parses a citation count string into a number
//
// Rules:
//   "12300"  -> 12300        (plain integer)
//   "1.5万"  -> 15000        (decimal times ten thousand, rounded)
//   "3万"    -> 30000
//   "N/A"    -> 0            (unparseable is the lowest priority, not an error)
pub fn parse_citation_count(raw: &str) -> u64 {
    let raw = raw.trim();

    if let Some(value) = raw.strip_suffix('万') {
        return value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| (v * 10000.0).round() as u64)
            .unwrap_or(0);
    }

    raw.parse::<u64>().unwrap_or(0)
}

// Extracts the paper record and related links from a page
//
// Parameters:
//   html: the fetched page source
//   page_url: the URL the page came from (for resolving relative hrefs)
//
// A missing title means we're not looking at a paper page at all, so
// that's an error. A missing abstract or citation count is normal.
pub fn extract_page(html: &str, page_url: &str) -> Result<PageExtract> {
    let document = Html::parse_document(html);

    // Constant selectors, known valid, so unwrap() is fine here
    let main_info_sel = Selector::parse("div.main-info").unwrap();
    let title_sel = Selector::parse("h3").unwrap();
    let abstract_sel = Selector::parse("p.abstract").unwrap();
    let ref_num_sel = Selector::parse("p.ref-wr-num").unwrap();

    let main_info = document
        .select(&main_info_sel)
        .next()
        .ok_or_else(|| anyhow!("No main-info block on {}", page_url))?;

    let title = main_info
        .select(&title_sel)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("No title on {}", page_url))?;

    // Plenty of papers have no abstract; substitute the sentinel
    let abstract_text = main_info
        .select(&abstract_sel)
        .next()
        .map(element_text)
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "No Abstract".to_string());

    let citation_count = main_info
        .select(&ref_num_sel)
        .next()
        .map(|el| parse_citation_count(&element_text(el)))
        .unwrap_or(0);

    let related = extract_related_links(&document, page_url);

    Ok(PageExtract {
        title,
        abstract_text,
        citation_count,
        related,
    })
}

// Collects the related-paper links from the page, if any
//
// Entries without a usable anchor are skipped; entries without a count
// are kept with count 0 (still crawlable, just lowest priority).
fn extract_related_links(document: &Html, page_url: &str) -> Vec<RelatedLink> {
    let mut related = Vec::new();

    let item_sel = Selector::parse("ul.related_lists li").unwrap();
    let title_link_sel = Selector::parse("p.rel_title a").unwrap();
    let count_sel = Selector::parse("div.sc_info a").unwrap();

    // Without a valid base URL we can't resolve relative hrefs
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid page URL: {}", page_url);
            return related;
        }
    };

    for item in document.select(&item_sel) {
        let Some(anchor) = item.select(&title_link_sel).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        // Hrefs on the listing are usually relative; join resolves both
        // relative and absolute forms
        let url = match base.join(href) {
            Ok(url) => url.to_string(),
            Err(_) => continue,
        };

        let title = element_text(anchor);
        if title.is_empty() {
            continue;
        }

        let citation_count = item
            .select(&count_sel)
            .next()
            .map(|el| parse_citation_count(&element_text(el)))
            .unwrap_or(0);

        related.push(RelatedLink {
            url,
            title,
            citation_count,
        });
    }

    related
}

// Collects an element's text nodes into one trimmed string
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is a missing title an error but a missing abstract isn't?
//    - A page without the title block isn't a paper page (a captcha,
//      an error page, a redirect stub), so extraction has truly failed
//    - A paper without an abstract is just a paper without an abstract
//
// 2. What is let-else (let Some(x) = ... else { continue })?
//    - Binds the value if the pattern matches, otherwise runs the else
//      block, which must diverge (continue/return/break)
//    - Keeps the happy path unindented
//
// 3. Why does .text() need .collect::<String>()?
//    - An element's text can be split across several text nodes
//      (e.g. around an inline <em> tag)
//    - .text() yields them as an iterator; collect() glues them together
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a minimal scholar-style page for tests
    fn page(main_info: &str, related: &str) -> String {
        format!(
            r#"<html><body>
                <div class="main-info">{}</div>
                {}
            </body></html>"#,
            main_info, related
        )
    }

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_citation_count("12300"), 12300);
        assert_eq!(parse_citation_count("  7 "), 7);
        assert_eq!(parse_citation_count("0"), 0);
    }

    #[test]
    fn test_parse_ten_thousands_unit() {
        assert_eq!(parse_citation_count("1.5万"), 15000);
        assert_eq!(parse_citation_count("3万"), 30000);
        assert_eq!(parse_citation_count("0.04万"), 400);
    }

    #[test]
    fn test_parse_unparseable_is_zero() {
        assert_eq!(parse_citation_count("N/A"), 0);
        assert_eq!(parse_citation_count(""), 0);
        assert_eq!(parse_citation_count("abc万"), 0);
        assert_eq!(parse_citation_count("-5"), 0);
    }

    #[test]
    fn test_extract_full_page() {
        let html = page(
            r#"<h3>Attention Is All You Need</h3>
               <p class="abstract">We propose a new architecture.</p>
               <p class="ref-wr-num">9.1万</p>"#,
            r#"<ul class="related_lists">
                 <li>
                   <p class="rel_title"><a href="/paper/show?id=abc">BERT</a></p>
                   <div class="sc_info"><a>6.8万</a></div>
                 </li>
                 <li>
                   <p class="rel_title"><a href="/paper/show?id=def">GPT</a></p>
                   <div class="sc_info"><a>1234</a></div>
                 </li>
               </ul>"#,
        );

        let extract = extract_page(&html, "https://scholar.example/paper/show?id=seed").unwrap();
        assert_eq!(extract.title, "Attention Is All You Need");
        assert_eq!(extract.abstract_text, "We propose a new architecture.");
        assert_eq!(extract.citation_count, 91000);

        assert_eq!(extract.related.len(), 2);
        assert_eq!(extract.related[0].url, "https://scholar.example/paper/show?id=abc");
        assert_eq!(extract.related[0].title, "BERT");
        assert_eq!(extract.related[0].citation_count, 68000);
        assert_eq!(extract.related[1].citation_count, 1234);
    }

    #[test]
    fn test_missing_abstract_uses_sentinel() {
        let html = page(
            r#"<h3>Terse Paper</h3><p class="ref-wr-num">42</p>"#,
            "",
        );
        let extract = extract_page(&html, "https://scholar.example/p").unwrap();
        assert_eq!(extract.abstract_text, "No Abstract");
        assert_eq!(extract.citation_count, 42);
    }

    #[test]
    fn test_missing_related_list_is_empty_not_error() {
        let html = page(r#"<h3>Leaf Paper</h3>"#, "");
        let extract = extract_page(&html, "https://scholar.example/p").unwrap();
        assert!(extract.related.is_empty());
        assert_eq!(extract.citation_count, 0);
    }

    #[test]
    fn test_missing_title_is_error() {
        let html = page(r#"<p class="abstract">orphan text</p>"#, "");
        assert!(extract_page(&html, "https://scholar.example/p").is_err());
    }

    #[test]
    fn test_missing_main_info_is_error() {
        let html = "<html><body><h3>Not a paper page</h3></body></html>";
        assert!(extract_page(html, "https://scholar.example/p").is_err());
    }

    #[test]
    fn test_related_count_missing_defaults_to_zero() {
        let html = page(
            r#"<h3>Root</h3>"#,
            r#"<ul class="related_lists">
                 <li><p class="rel_title"><a href="/p/1">No Count Paper</a></p></li>
               </ul>"#,
        );
        let extract = extract_page(&html, "https://scholar.example/root").unwrap();
        assert_eq!(extract.related.len(), 1);
        assert_eq!(extract.related[0].citation_count, 0);
    }

    #[test]
    fn test_related_absolute_href_kept_as_is() {
        let html = page(
            r#"<h3>Root</h3>"#,
            r#"<ul class="related_lists">
                 <li>
                   <p class="rel_title"><a href="https://other.example/p/9">Elsewhere</a></p>
                   <div class="sc_info"><a>5</a></div>
                 </li>
               </ul>"#,
        );
        let extract = extract_page(&html, "https://scholar.example/root").unwrap();
        assert_eq!(extract.related[0].url, "https://other.example/p/9");
    }

    #[test]
    fn test_related_entry_without_anchor_skipped() {
        let html = page(
            r#"<h3>Root</h3>"#,
            r#"<ul class="related_lists">
                 <li><p class="rel_title">plain text, no link</p></li>
                 <li>
                   <p class="rel_title"><a href="/p/2">Good Entry</a></p>
                   <div class="sc_info"><a>8</a></div>
                 </li>
               </ul>"#,
        );
        let extract = extract_page(&html, "https://scholar.example/root").unwrap();
        assert_eq!(extract.related.len(), 1);
        assert_eq!(extract.related[0].title, "Good Entry");
    }
}
