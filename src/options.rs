//! Configuration values for scraping.
//!
//! A [`ScrapeConfig`] is a plain immutable value describing one request
//! target and its selector chain. The `with_*` methods are builder sugar
//! over constructing that value; nothing here is shared mutable state, so
//! a config can be cloned freely into scheduled runs.

use serde::{Deserialize, Serialize};

use crate::fetch::DEFAULT_TIMEOUT;
use crate::selector::Selector;
use crate::url_utils;

/// Whether extracted elements keep their enclosing tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capture {
    /// Serialize with the tag: `<p>lorem ipsum</p>`.
    #[default]
    WithTag,
    /// Serialize inner content only: `lorem ipsum`.
    InnerOnly,
}

/// Configuration for one scrape target.
///
/// All fields are public for easy configuration; the fluent methods cover
/// the common path.
///
/// # Example
///
/// ```rust
/// use pagesieve::{ScrapeConfig, Selector};
///
/// let config = ScrapeConfig::new("https://www.google.com/")
///     .with_segment("search")
///     .with_param("q", "cute+kittens")
///     .with_selector(Selector::new("div").with_attribute_value("id", "wob_loc"));
///
/// assert_eq!(config.full_url(), "https://www.google.com/search?q=cute+kittens");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Base URL, emitted verbatim at the front of the request target.
    pub base_url: String,

    /// Ordered path segments appended after the base.
    pub segments: Vec<String>,

    /// Query parameters as `(key, value)` pairs, joined in insertion order.
    pub params: Vec<(String, String)>,

    /// Selector chain applied by [`selector_results`](crate::Scraper::selector_results).
    pub selectors: Vec<Selector>,

    /// Request timeout in milliseconds.
    ///
    /// Default: `10_000`
    pub timeout_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            segments: Vec::new(),
            params: Vec::new(),
            selectors: Vec::new(),
            timeout_ms: u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(10_000),
        }
    }
}

impl ScrapeConfig {
    /// Config pointing at a base URL, with defaults for everything else.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Append one path segment.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append one query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append one selector chain step.
    #[must_use]
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The full request target this config describes.
    #[must_use]
    pub fn full_url(&self) -> String {
        url_utils::build(&self.base_url, &self.segments, &self.params)
    }
}
