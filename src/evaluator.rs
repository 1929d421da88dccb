//! Selector Chain Evaluator
//!
//! Narrows an element set step by step across an ordered selector chain and
//! serializes what survives. A chain starts from the unfiltered
//! whole-document pool, so indexing has two meanings depending on where in
//! the chain it appears:
//!
//! - **Flat mode** (chain start): the pool is every element of the
//!   document, so "take the n-th match" can only mean the n-th match of the
//!   flattened pool, exactly one element.
//! - **Branch-isolated mode** (after any step has committed a query): each
//!   element of the set is an isolated branch, and "take the n-th match"
//!   means the n-th match *within each branch*, e.g. the 2nd `<p>` inside
//!   each of several `<div>` containers rather than the 2nd `<p>` globally.
//!
//! The mode is carried as an explicit state value alongside the element
//! set, never as shared mutable state, so independent evaluations cannot
//! bleed into each other and evaluating the same chain twice against the
//! same document yields identical results.

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::selector::Selector;

/// Element set plus the indexing mode it is in.
struct EvalState<'a> {
    elements: Vec<NodeRef<'a>>,
    branch_isolated: bool,
}

/// Evaluate a selector chain against a parsed document.
///
/// Returns the inner HTML of every element surviving the final step, in
/// set order. The document is never mutated.
///
/// # Example
///
/// ```rust
/// use pagesieve::{evaluator, dom, Selector};
///
/// let doc = dom::parse(
///     "<div><p>a</p><p>b</p></div><div><p>c</p><p>d</p></div>",
/// );
/// let chain = vec![Selector::new("div"), Selector::new("p").nth(1)];
/// let results = evaluator::evaluate(&doc, &chain)?;
/// assert_eq!(results, vec!["b", "d"]);
/// # Ok::<(), pagesieve::Error>(())
/// ```
pub fn evaluate(doc: &Document, selectors: &[Selector]) -> Result<Vec<String>> {
    let mut state = EvalState {
        elements: dom::all_elements(doc),
        branch_isolated: false,
    };
    for selector in selectors {
        state = narrow(state, selector)?;
    }
    Ok(state
        .elements
        .into_iter()
        .map(|node| dom::inner_html(node).to_string())
        .collect())
}

/// Apply one selector step to the current state.
///
/// Every step applies its full CSS filter; the index-absent/present split
/// and the current mode decide how matches are collected.
fn narrow<'a>(state: EvalState<'a>, selector: &Selector) -> Result<EvalState<'a>> {
    let query = selector.css_query();

    let Some(index) = selector.index() else {
        // Unindexed: flatten matches across the whole set. Committing a
        // query ends flat mode; from here on indexing is per branch.
        return Ok(EvalState {
            elements: dom::select_within(&state.elements, &query),
            branch_isolated: true,
        });
    };

    if state.branch_isolated {
        narrow_per_branch(&state.elements, selector, &query, index)
    } else {
        // First indexed step of the chain: the n-th match of the flat
        // pool, exactly one element or a hard failure.
        let picked = dom::nth_of(&state.elements, &query, index).ok_or_else(|| {
            Error::IndexOutOfRange {
                query: query.clone(),
                index,
            }
        })?;
        Ok(EvalState {
            elements: vec![picked],
            branch_isolated: true,
        })
    }
}

/// Take the index-th match of `query` inside each branch independently.
///
/// A branch without enough matches is dropped silently, unless the step
/// carries an attribute value filter: that lookup is expected to hit, and
/// a miss aborts the evaluation.
fn narrow_per_branch<'a>(
    branches: &[NodeRef<'a>],
    selector: &Selector,
    query: &str,
    index: usize,
) -> Result<EvalState<'a>> {
    let mut picked = Vec::new();
    for branch in branches {
        match dom::nth_within(*branch, query, index) {
            Some(node) => picked.push(node),
            None if selector.has_value_filter() => {
                return Err(Error::IndexOutOfRange {
                    query: query.to_string(),
                    index,
                });
            }
            None => {}
        }
    }
    Ok(EvalState {
        elements: picked,
        branch_isolated: true,
    })
}
