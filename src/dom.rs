//! DOM Query Facade
//!
//! Thin adapter over the `dom_query` crate. The evaluator never touches
//! node internals directly; everything it needs from the document goes
//! through the named operations here: query a set by CSS, pick the n-th
//! match, read attributes, serialize with or without the enclosing tag.
//!
//! Element sets are ordered `Vec<NodeRef>` collections. Set-wide queries
//! match each element itself or any of its descendants and deduplicate by
//! node id, so overlapping branches never yield an element twice.

use std::collections::HashSet;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Every element of the document, in document order.
///
/// This is the unfiltered pool a selector chain starts from.
#[must_use]
pub fn all_elements(doc: &Document) -> Vec<NodeRef> {
    doc.select("*").nodes().to_vec()
}

/// Every match of a CSS query in the document, in document order.
#[inline]
#[must_use]
pub fn select_all<'a>(doc: &'a Document, query: &str) -> Vec<NodeRef<'a>> {
    doc.select(query).nodes().to_vec()
}

/// Query a whole element set and flatten the matches into one set.
///
/// Each element contributes itself (when it matches) and its matching
/// descendants, in document order per branch; duplicates across
/// overlapping branches are dropped.
#[must_use]
pub fn select_within<'a>(set: &[NodeRef<'a>], query: &str) -> Vec<NodeRef<'a>> {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    for node in set {
        let sel = Selection::from(*node);
        if sel.is(query) && seen.insert(node.id) {
            matches.push(*node);
        }
        for found in sel.select(query).nodes() {
            if seen.insert(found.id) {
                matches.push(*found);
            }
        }
    }
    matches
}

/// The n-th match of `query` within a single branch element.
#[must_use]
pub fn nth_within<'a>(node: NodeRef<'a>, query: &str, n: usize) -> Option<NodeRef<'a>> {
    select_within(std::slice::from_ref(&node), query).get(n).copied()
}

/// The n-th match of `query` across the flattened set.
#[must_use]
pub fn nth_of<'a>(set: &[NodeRef<'a>], query: &str, n: usize) -> Option<NodeRef<'a>> {
    select_within(set, query).get(n).copied()
}

/// Inner HTML of an element (content without the enclosing tag).
#[inline]
#[must_use]
pub fn inner_html(node: NodeRef) -> StrTendril {
    Selection::from(node).inner_html()
}

/// Outer HTML of an element (content including the enclosing tag).
#[inline]
#[must_use]
pub fn outer_html(node: NodeRef) -> StrTendril {
    Selection::from(node).html()
}

/// An attribute's value, if the element carries it.
#[inline]
#[must_use]
pub fn attribute_value(node: NodeRef, name: &str) -> Option<String> {
    Selection::from(node).attr(name).map(|v| v.to_string())
}

/// Check if an element carries an attribute.
#[inline]
#[must_use]
pub fn has_attribute(node: NodeRef, name: &str) -> bool {
    Selection::from(node).has_attr(name)
}

/// Tag name of an element (lowercase).
#[must_use]
pub fn tag_name(node: NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_string())
}
