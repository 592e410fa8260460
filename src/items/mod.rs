//! Items: the user's linked bank connections.

mod model;

pub use model::Item;

use crate::core::client::constants::EP_ITEMS;
use crate::core::net::{self, Query};
use crate::core::{BridgeClient, BridgeError, paging};

/// A builder for listing a user's items.
#[derive(Debug)]
pub struct ListItemsBuilder {
    client: BridgeClient,
    access_token: String,
    after: Option<String>,
    limit: Option<u32>,
    fetch_all: bool,
}

impl ListItemsBuilder {
    /// Creates a new `ListItemsBuilder` for the user behind `access_token`.
    pub fn new(client: &BridgeClient, access_token: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            access_token: access_token.into(),
            after: None,
            limit: None,
            fetch_all: false,
        }
    }

    /// Cursor pointing to the start of the desired set.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Maximum number of items to return. Only honored on a single-page
    /// fetch; the fetch-all path pins its own page size.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Follow pagination cursors until the collection is exhausted.
    #[must_use]
    pub const fn fetch_all(mut self, yes: bool) -> Self {
        self.fetch_all = yes;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Fails with [`BridgeError::MissingParameter`] before any network call
    /// when the access token is empty, or with any transport/decoding error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(fetch_all = self.fetch_all)))]
    pub async fn fetch(self) -> Result<Vec<Item>, BridgeError> {
        if self.access_token.is_empty() {
            return Err(BridgeError::MissingParameter("access token"));
        }

        let mut query: Query = Vec::new();
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }

        if self.fetch_all {
            return paging::fetch_all(&self.client, EP_ITEMS, &self.access_token, &query).await;
        }

        let body = net::get(&self.client, EP_ITEMS, &query, Some(&self.access_token)).await?;
        Ok(paging::decode_page(body, EP_ITEMS)?.resources)
    }
}
