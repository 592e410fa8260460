//! Cursor-following pagination engine.
//!
//! Every paginated Bridge collection shares the same shape: a `resources`
//! array plus a `pagination.next_uri` cursor, an opaque path+query string
//! naming the next page. [`fetch_all`] follows cursors until exhaustion;
//! the per-endpoint builders decide whether to call it or issue a single
//! bounded request.

use serde::de::DeserializeOwned;

use crate::core::client::BridgeClient;
use crate::core::client::constants::{MAX_PAGES, PAGE_SIZE};
use crate::core::error::BridgeError;
use crate::core::net::{self, Query};
use crate::core::wire::PagedEnvelope;

/// One physical page of a paginated collection.
#[derive(Debug)]
pub(crate) struct Page<T> {
    pub(crate) resources: Vec<T>,
    pub(crate) next_uri: Option<String>,
}

/// Decode a paginated response body into a [`Page`].
///
/// An empty or whitespace-only `next_uri` counts as "no more pages".
pub(crate) fn decode_page<T: DeserializeOwned>(
    body: serde_json::Value,
    endpoint: &str,
) -> Result<Page<T>, BridgeError> {
    let envelope: PagedEnvelope<T> = serde_json::from_value(body)?;

    let resources = envelope
        .resources
        .ok_or_else(|| BridgeError::Data(format!("`resources` missing from {endpoint} response")))?;

    let next_uri = envelope
        .pagination
        .and_then(|p| p.next_uri)
        .filter(|uri| !uri.trim().is_empty());

    Ok(Page {
        resources,
        next_uri,
    })
}

/// Replace any caller-supplied `limit` with the pinned fetch-all page size.
fn with_page_size(query: &[(&'static str, String)]) -> Query {
    let mut merged: Query = query
        .iter()
        .filter(|(k, _)| *k != "limit")
        .cloned()
        .collect();
    merged.push(("limit", PAGE_SIZE.to_string()));
    merged
}

/// Fetch one page of `endpoint` with the page size pinned to 500.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    client: &BridgeClient,
    endpoint: &str,
    bearer: &str,
    query: &[(&'static str, String)],
) -> Result<Page<T>, BridgeError> {
    let body = net::get(client, endpoint, &with_page_size(query), Some(bearer)).await?;
    decode_page(body, endpoint)
}

/// Fetch every page of `endpoint`, concatenating resources in server order.
///
/// Continuation requests use the server cursor as the endpoint while
/// re-merging the original `query` (plus the pinned page size); keys the
/// cursor already encodes win on conflict, so caller filters the cursor does
/// not embed are never dropped. Stops when the cursor goes falsy, or fails
/// with [`BridgeError::Data`] if the server keeps producing cursors past
/// `MAX_PAGES`.
pub(crate) async fn fetch_all<T: DeserializeOwned>(
    client: &BridgeClient,
    endpoint: &str,
    bearer: &str,
    query: &[(&'static str, String)],
) -> Result<Vec<T>, BridgeError> {
    let mut out = Vec::new();
    let mut next = endpoint.to_string();

    for _hop in 0..MAX_PAGES {
        let page: Page<T> = fetch_page(client, &next, bearer, query).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            endpoint = %next,
            page_len = page.resources.len(),
            total = out.len() + page.resources.len(),
            has_next = page.next_uri.is_some(),
            "fetched page"
        );

        out.extend(page.resources);
        match page.next_uri {
            Some(uri) => next = uri,
            None => return Ok(out),
        }
    }

    Err(BridgeError::Data(format!(
        "pagination for {endpoint} did not terminate within {MAX_PAGES} pages"
    )))
}
