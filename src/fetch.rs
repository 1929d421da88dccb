//! Page Fetching
//!
//! Blocking retrieval of a page into a parsed [`Document`]. Network
//! failures, timeouts, error statuses and body decoding problems all
//! surface as [`Error::Fetch`]; callers log and carry on without a
//! document rather than crashing.

use std::time::Duration;

use ureq::Agent;

use crate::dom::{self, Document};
use crate::error::{Error, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Fetch a URL and parse the response body into a document.
pub fn fetch(url: &str, timeout: Duration) -> Result<Document> {
    let config = Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    let agent: Agent = config.into();

    let response = agent
        .get(url)
        .call()
        .map_err(|e| Error::Fetch(format!("{url}: {e}")))?;
    let html = response
        .into_body()
        .read_to_string()
        .map_err(|e| Error::Fetch(format!("{url}: {e}")))?;

    Ok(dom::parse(&html))
}
