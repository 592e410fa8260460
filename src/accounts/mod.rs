//! Accounts: the financial accounts under each item.

mod model;

pub use model::Account;

use crate::core::client::constants::EP_ACCOUNTS;
use crate::core::net::{self, Query};
use crate::core::{BridgeClient, BridgeError, paging};

/// A builder for listing a user's accounts, optionally scoped to one item.
///
/// The `item_id` filter rides along on the first request and every
/// continuation request of a fetch-all loop.
#[derive(Debug)]
pub struct ListAccountsBuilder {
    client: BridgeClient,
    access_token: String,
    item_id: Option<i64>,
    after: Option<String>,
    limit: Option<u32>,
    fetch_all: bool,
}

impl ListAccountsBuilder {
    /// Creates a new `ListAccountsBuilder` for the user behind `access_token`.
    pub fn new(client: &BridgeClient, access_token: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            access_token: access_token.into(),
            item_id: None,
            after: None,
            limit: None,
            fetch_all: false,
        }
    }

    /// Only return accounts belonging to this item.
    #[must_use]
    pub const fn item_id(mut self, id: i64) -> Self {
        self.item_id = Some(id);
        self
    }

    /// Cursor pointing to the start of the desired set.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Maximum number of accounts to return. Only honored on a single-page
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
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(item_id = ?self.item_id)))]
    pub async fn fetch(self) -> Result<Vec<Account>, BridgeError> {
        if self.access_token.is_empty() {
            return Err(BridgeError::MissingParameter("access token"));
        }

        let mut query: Query = Vec::new();
        if let Some(item_id) = self.item_id {
            query.push(("item_id", item_id.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }

        if self.fetch_all {
            return paging::fetch_all(&self.client, EP_ACCOUNTS, &self.access_token, &query).await;
        }

        let body = net::get(&self.client, EP_ACCOUNTS, &query, Some(&self.access_token)).await?;
        Ok(paging::decode_page(body, EP_ACCOUNTS)?.resources)
    }
}
