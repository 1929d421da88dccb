//! Selector data model.
//!
//! A [`Selector`] is one filtering step of a chain: a required tag name, an
//! optional attribute filter and an optional zero-based match index. Steps
//! render to CSS query strings and are applied in order by the
//! [`evaluator`](crate::evaluator), each step narrowing the element set
//! produced by the previous one (`div > p` semantics, one tag level at a
//! time, index-addressable per level).

use serde::{Deserialize, Serialize};

/// How an attribute value filter compares against the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// `tag[attr="value"]`: the attribute equals the value.
    #[default]
    Exact,
    /// `tag[attr$="value"]`: the attribute ends with the value.
    Suffix,
}

/// Attribute constraint of a selector step.
///
/// Modeled as a three-state enum so that a value filter without an attribute
/// name cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum AttrFilter {
    /// Match on tag name alone.
    None,
    /// The attribute must be present, any value.
    Has(String),
    /// The attribute must be present and its value must match.
    Matches {
        name: String,
        value: String,
        mode: MatchMode,
    },
}

/// One step of a selector chain.
///
/// # Example
///
/// ```rust
/// use pagesieve::Selector;
///
/// // Every <div class="wrap">, then the 2nd <p> within each of them.
/// let chain = vec![
///     Selector::new("div").with_attribute_value("class", "wrap"),
///     Selector::new("p").nth(1),
/// ];
/// assert_eq!(chain[0].css_query(), r#"div[class="wrap"]"#);
/// assert_eq!(chain[1].css_query(), "p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    tag: String,
    filter: AttrFilter,
    index: Option<usize>,
}

impl Selector {
    /// Create a selector matching every element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            filter: AttrFilter::None,
            index: None,
        }
    }

    /// Restrict matches to elements carrying the attribute, any value.
    ///
    /// Replaces any previously set attribute filter.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.filter = AttrFilter::Has(name.into());
        self
    }

    /// Restrict matches to elements whose attribute equals `value`.
    ///
    /// Replaces any previously set attribute filter.
    #[must_use]
    pub fn with_attribute_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = AttrFilter::Matches {
            name: name.into(),
            value: value.into(),
            mode: MatchMode::Exact,
        };
        self
    }

    /// Restrict matches to elements whose attribute *ends with* `value`.
    ///
    /// Replaces any previously set attribute filter.
    #[must_use]
    pub fn with_attribute_ending(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = AttrFilter::Matches {
            name: name.into(),
            value: value.into(),
            mode: MatchMode::Suffix,
        };
        self
    }

    /// Select only the n-th match (zero-based) instead of all matches.
    #[must_use]
    pub fn nth(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// The element tag name this step matches.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The zero-based match index, if this step is indexed.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether this step carries an attribute *value* filter.
    ///
    /// Indexed steps with a value filter fail hard when the index is
    /// missing within a branch; indexed steps without one skip that branch.
    #[must_use]
    pub fn has_value_filter(&self) -> bool {
        matches!(self.filter, AttrFilter::Matches { .. })
    }

    /// Render this step as a CSS query string.
    #[must_use]
    pub fn css_query(&self) -> String {
        match &self.filter {
            AttrFilter::None => self.tag.clone(),
            AttrFilter::Has(name) => format!("{}[{name}]", self.tag),
            AttrFilter::Matches { name, value, mode } => {
                let op = match mode {
                    MatchMode::Exact => "=",
                    MatchMode::Suffix => "$=",
                };
                format!("{}[{name}{op}\"{}\"]", self.tag, escape_value(value))
            }
        }
    }
}

/// Escape a value for embedding in a double-quoted CSS attribute selector.
fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
