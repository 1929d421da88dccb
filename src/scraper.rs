//! Page Scraper Facade
//!
//! Ties the pieces together: a [`ScrapeConfig`] names the target and the
//! selector chain, [`fetch`](crate::fetch) turns the built URL into a
//! document, and the operations here extract from it: direct tag/class/id
//! lookups, attribute harvesting, hyperlink collection and full
//! selector-chain evaluation.
//!
//! Failure policy: operations that need a page return
//! [`Error::NoDocument`] until a fetch has succeeded; lookups that simply
//! find nothing return an empty result and log a diagnostic, so callers
//! (the scheduler in particular) keep running.

use std::time::Duration;

use log::warn;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::evaluator;
use crate::fetch;
use crate::options::{Capture, ScrapeConfig};
use crate::url_utils;

/// A configured scraper and the page it has (or has not) loaded.
///
/// # Example
///
/// ```rust,no_run
/// use pagesieve::{Capture, ScrapeConfig, Scraper};
///
/// let mut scraper = Scraper::new(ScrapeConfig::new("http://example.org/"));
/// scraper.fetch()?;
/// for paragraph in scraper.tags("p", Capture::InnerOnly)? {
///     println!("{paragraph}");
/// }
/// # Ok::<(), pagesieve::Error>(())
/// ```
pub struct Scraper {
    config: ScrapeConfig,
    document: Option<Document>,
}

impl Scraper {
    /// Scraper for the given configuration, with no page loaded yet.
    #[must_use]
    pub fn new(config: ScrapeConfig) -> Self {
        Self {
            config,
            document: None,
        }
    }

    /// Shorthand for a scraper pointed at a bare base URL.
    #[must_use]
    pub fn for_url(base_url: impl Into<String>) -> Self {
        Self::new(ScrapeConfig::new(base_url))
    }

    /// The configuration this scraper runs with.
    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Fetch the configured URL and keep the parsed document.
    ///
    /// On failure the scraper is left without a document and every
    /// dependent operation reports [`Error::NoDocument`] until a later
    /// fetch succeeds.
    pub fn fetch(&mut self) -> Result<()> {
        let url = self.config.full_url();
        match fetch::fetch(&url, Duration::from_millis(self.config.timeout_ms)) {
            Ok(document) => {
                self.document = Some(document);
                Ok(())
            }
            Err(e) => {
                self.document = None;
                Err(e)
            }
        }
    }

    /// Load a document from an HTML string instead of the network.
    pub fn load_html(&mut self, html: &str) {
        self.document = Some(dom::parse(html));
    }

    /// Whether a page is currently loaded.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(Error::NoDocument)
    }

    /// The full serialized HTML of the loaded page.
    pub fn html(&self) -> Result<String> {
        Ok(self.document()?.html().to_string())
    }

    /// All elements with the given tag name.
    pub fn tags(&self, tag: &str, capture: Capture) -> Result<Vec<String>> {
        let nodes = dom::select_all(self.document()?, tag);
        if nodes.is_empty() {
            warn!("no tag `{tag}` found at {}", self.config.full_url());
        }
        Ok(render_all(&nodes, capture))
    }

    /// All elements carrying every one of the given class names
    /// (whitespace-separated, as they appear in a `class` attribute).
    pub fn by_class(&self, class_names: &str, capture: Capture) -> Result<Vec<String>> {
        let query: String = class_names
            .split_whitespace()
            .map(|name| format!(".{name}"))
            .collect();
        if query.is_empty() {
            warn!("empty class lookup at {}", self.config.full_url());
            return Ok(Vec::new());
        }
        let nodes = dom::select_all(self.document()?, &query);
        if nodes.is_empty() {
            warn!(
                "no class `{class_names}` found at {}",
                self.config.full_url()
            );
        }
        Ok(render_all(&nodes, capture))
    }

    /// The element with the given id, if any.
    pub fn by_id(&self, id: &str, capture: Capture) -> Result<Option<String>> {
        let query = format!("[id=\"{id}\"]");
        let nodes = dom::select_all(self.document()?, &query);
        match nodes.first() {
            Some(node) => Ok(Some(render(*node, capture))),
            None => {
                warn!("no element `{id}` found at {}", self.config.full_url());
                Ok(None)
            }
        }
    }

    /// Attribute value of the n-th element with the given tag.
    ///
    /// `None` when the n-th element does not exist or does not carry the
    /// attribute.
    pub fn attribute_value(&self, n: usize, tag: &str, attribute: &str) -> Result<Option<String>> {
        let nodes = dom::select_all(self.document()?, tag);
        let Some(node) = nodes.get(n) else {
            warn!(
                "no tag `{tag}` at index {n} at {}",
                self.config.full_url()
            );
            return Ok(None);
        };
        Ok(dom::attribute_value(*node, attribute))
    }

    /// Attribute values across every element with the given tag.
    ///
    /// Empty values are skipped; with `keep_duplicates` false each value
    /// appears once, in first-seen order.
    pub fn attribute_values(
        &self,
        tag: &str,
        attribute: &str,
        keep_duplicates: bool,
    ) -> Result<Vec<String>> {
        let nodes = dom::select_all(self.document()?, tag);
        let mut values: Vec<String> = Vec::new();
        for node in nodes {
            let Some(value) = dom::attribute_value(node, attribute) else {
                continue;
            };
            if value.is_empty() || (!keep_duplicates && values.contains(&value)) {
                continue;
            }
            values.push(value);
        }
        if values.is_empty() {
            warn!(
                "unable to extract attribute `{attribute}` from {}",
                self.config.full_url()
            );
        }
        Ok(values)
    }

    /// Every hyperlink on the page, absolutized against the page URL.
    ///
    /// Duplicate, empty and fragment-only references are dropped.
    pub fn hyperlinks(&self) -> Result<Vec<String>> {
        let hrefs = self.attribute_values("a", "href", false)?;
        let page_url = self.config.full_url();
        Ok(hrefs
            .iter()
            .filter_map(|href| url_utils::absolutize(href, &page_url))
            .collect())
    }

    /// Evaluate the configured selector chain against the loaded page.
    ///
    /// Every call starts from a fresh whole-document pool; nothing is
    /// cached between calls.
    pub fn selector_results(&self) -> Result<Vec<String>> {
        if self.config.selectors.is_empty() {
            warn!("no selectors configured for {}", self.config.full_url());
            return Ok(Vec::new());
        }
        evaluator::evaluate(self.document()?, &self.config.selectors)
    }
}

fn render(node: NodeRef, capture: Capture) -> String {
    match capture {
        Capture::WithTag => dom::outer_html(node).to_string(),
        Capture::InnerOnly => dom::inner_html(node).to_string(),
    }
}

fn render_all(nodes: &[NodeRef], capture: Capture) -> Vec<String> {
    nodes.iter().map(|node| render(*node, capture)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_without_document_report_no_document() {
        let scraper = Scraper::for_url("https://x.com");
        assert!(matches!(scraper.html(), Err(Error::NoDocument)));
        assert!(matches!(
            scraper.tags("p", Capture::WithTag),
            Err(Error::NoDocument)
        ));
        assert!(matches!(scraper.hyperlinks(), Err(Error::NoDocument)));
    }

    #[test]
    fn test_load_html_enables_operations() {
        let mut scraper = Scraper::for_url("https://x.com");
        assert!(!scraper.has_document());
        scraper.load_html("<p>hello</p>");
        assert!(scraper.has_document());
        let tags = scraper.tags("p", Capture::InnerOnly).unwrap();
        assert_eq!(tags, vec!["hello"]);
    }
}
