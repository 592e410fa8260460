//! Transactions: the user's bank transactions, filterable by date window.

mod model;

pub use model::Transaction;

use chrono::NaiveDate;

use crate::core::client::constants::EP_TRANSACTIONS;
use crate::core::net::{self, Query};
use crate::core::{BridgeClient, BridgeError, paging};

/// A builder for listing a user's transactions.
///
/// `since`/`until` bound the date window (inclusive semantics are the remote
/// API's, not this client's) and ride along on every continuation request of
/// a fetch-all loop.
#[derive(Debug)]
pub struct ListTransactionsBuilder {
    client: BridgeClient,
    access_token: String,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    after: Option<String>,
    limit: Option<u32>,
    fetch_all: bool,
}

impl ListTransactionsBuilder {
    /// Creates a new `ListTransactionsBuilder` for the user behind `access_token`.
    pub fn new(client: &BridgeClient, access_token: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            access_token: access_token.into(),
            since: None,
            until: None,
            after: None,
            limit: None,
            fetch_all: false,
        }
    }

    /// Only return transactions on or after this date.
    #[must_use]
    pub const fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Only return transactions on or before this date.
    #[must_use]
    pub const fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Cursor pointing to the start of the desired set.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Maximum number of transactions to return. Only honored on a
    /// single-page fetch; the fetch-all path pins its own page size.
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
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(since = ?self.since, until = ?self.until)))]
    pub async fn fetch(self) -> Result<Vec<Transaction>, BridgeError> {
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
        if let Some(since) = self.since {
            query.push(("since", since.format("%Y-%m-%d").to_string()));
        }
        if let Some(until) = self.until {
            query.push(("until", until.format("%Y-%m-%d").to_string()));
        }

        if self.fetch_all {
            return paging::fetch_all(&self.client, EP_TRANSACTIONS, &self.access_token, &query)
                .await;
        }

        let body = net::get(
            &self.client,
            EP_TRANSACTIONS,
            &query,
            Some(&self.access_token),
        )
        .await?;
        Ok(paging::decode_page(body, EP_TRANSACTIONS)?.resources)
    }
}
