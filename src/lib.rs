//! # pagesieve
//!
//! Selector-chain web scraping with scheduled capture to disk.
//!
//! A scrape is described by a [`ScrapeConfig`]: a base URL plus path
//! segments and query parameters (assembled without encoding), and an
//! ordered chain of [`Selector`] steps. The chain narrows the document's
//! element set one step at a time (`div > p` semantics, each tag level
//! individually index-addressable) and serializes whatever survives. The
//! [`schedule`] module re-runs a chain (or captures whole pages) on a
//! fixed period, appending results to disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagesieve::{dom, evaluator, Selector};
//!
//! let doc = dom::parse(
//!     r#"<div class="wrap"><p>first</p><p>second</p></div>
//!        <div class="wrap"><p>third</p><p>fourth</p></div>"#,
//! );
//!
//! // The 2nd <p> inside *each* wrap div, not the 2nd <p> globally.
//! let chain = vec![
//!     Selector::new("div").with_attribute_value("class", "wrap"),
//!     Selector::new("p").nth(1),
//! ];
//! let results = evaluator::evaluate(&doc, &chain)?;
//! assert_eq!(results, vec!["second", "fourth"]);
//! # Ok::<(), pagesieve::Error>(())
//! ```
//!
//! Fetching and scheduling build on the same pieces:
//!
//! ```rust,no_run
//! use pagesieve::{schedule, Interval, ScrapeConfig, Selector};
//!
//! let config = ScrapeConfig::new("https://example.org/")
//!     .with_selector(Selector::new("p").nth(0));
//! schedule::automate_selectors(config, "capture.log", Interval::new(0, 0, 5, 0, 0))?;
//! # Ok::<(), pagesieve::Error>(())
//! ```

mod error;
mod fetch;
mod options;
mod scraper;
mod selector;

/// DOM query facade over `dom_query`.
pub mod dom;

/// The selector-chain evaluator.
pub mod evaluator;

/// Fixed-rate selector logging and page snapshots.
pub mod schedule;

/// URL assembly and hyperlink resolution.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{fetch, DEFAULT_TIMEOUT};
pub use options::{Capture, ScrapeConfig};
pub use schedule::Interval;
pub use scraper::Scraper;
pub use selector::{MatchMode, Selector};

/// Fetch a page and evaluate a selector chain against it in one shot.
///
/// Uses the default timeout. For anything beyond a one-off (path
/// segments, query parameters, repeated runs) configure a [`Scraper`].
///
/// # Example
///
/// ```rust,no_run
/// use pagesieve::{scrape, Selector};
///
/// let results = scrape(
///     "https://example.org/",
///     &[Selector::new("p").nth(0)],
/// )?;
/// println!("{results:?}");
/// # Ok::<(), pagesieve::Error>(())
/// ```
pub fn scrape(url: &str, selectors: &[Selector]) -> Result<Vec<String>> {
    let document = fetch::fetch(url, DEFAULT_TIMEOUT)?;
    evaluator::evaluate(&document, selectors)
}
