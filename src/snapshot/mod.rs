//! End-to-end aggregation of one user's data and its JSON export.
//!
//! The pipeline is a single sequential chain: resolve the user's uuid from
//! their email, authenticate, fetch every item, fetch every account under
//! each item, fetch the most recent transactions, then project the result
//! to a JSON document. A failure at any step aborts the whole run; nothing
//! is partially exported.

mod export;

use std::path::Path;

use futures::{StreamExt, TryStreamExt, stream};

use crate::accounts::{Account, ListAccountsBuilder};
use crate::core::{BridgeClient, BridgeError};
use crate::items::{Item, ListItemsBuilder};
use crate::transactions::{ListTransactionsBuilder, Transaction};
use crate::users::{self, AuthenticateBuilder, TokenInfo};

/// How many of the most recent transactions a snapshot carries. Fixed by
/// the export format.
const SNAPSHOT_TRANSACTIONS: u32 = 2;

/// An item joined with the accounts fetched under it.
///
/// `accounts` is always present once aggregation has run, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithAccounts {
    /// The item as the API returned it.
    pub item: Item,
    /// Every account belonging to this item.
    pub accounts: Vec<Account>,
}

/// The fully aggregated result of one snapshot run.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSnapshot {
    /// The session token the run authenticated with.
    pub token: TokenInfo,
    /// All items, in server order, each with its accounts attached.
    pub items: Vec<ItemWithAccounts>,
    /// The most recent transactions, at most the fixed snapshot bound (2).
    pub transactions: Vec<Transaction>,
}

impl UserSnapshot {
    /// The exported document: a `{value, expires_at}` token block, the full
    /// item list with projected accounts, and the projected transactions.
    ///
    /// # Errors
    ///
    /// Fails with [`BridgeError::Json`] if serialization fails.
    pub fn to_export_value(&self) -> Result<serde_json::Value, BridgeError> {
        export::format(self)
    }

    /// Writes the exported document to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails with [`BridgeError::MissingParameter`] when `path` is empty,
    /// or with [`BridgeError::Io`] when the write fails.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), BridgeError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(BridgeError::MissingParameter("path"));
        }

        let json = serde_json::to_string_pretty(&self.to_export_value()?)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// A builder for running the whole aggregation pipeline.
#[derive(Debug)]
pub struct SnapshotBuilder {
    client: BridgeClient,
    email: Option<String>,
    password: Option<String>,
    uuid: Option<String>,
    accounts_concurrency: usize,
}

impl SnapshotBuilder {
    /// Creates a new `SnapshotBuilder`.
    pub fn new(client: &BridgeClient) -> Self {
        Self {
            client: client.clone(),
            email: None,
            password: None,
            uuid: None,
            accounts_concurrency: 4,
        }
    }

    /// The target user's email address. Required.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The target user's password. Required.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Skip the email lookup and authenticate with this uuid directly.
    #[must_use]
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// How many per-item account fetches run at once. Results are
    /// reassembled in item order regardless. Default: 4.
    #[must_use]
    pub const fn accounts_concurrency(mut self, n: usize) -> Self {
        self.accounts_concurrency = n;
        self
    }

    /// Runs the pipeline and returns the aggregated snapshot.
    ///
    /// # Errors
    ///
    /// Fails with [`BridgeError::MissingParameter`] when email or password
    /// is absent, or when the email lookup finds no user and no uuid was
    /// given. Any fetch failure aborts the run and surfaces unchanged.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<UserSnapshot, BridgeError> {
        let email = self
            .email
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(BridgeError::MissingParameter("email"))?;
        let password = self
            .password
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(BridgeError::MissingParameter("password"))?;

        let uuid = match self.uuid.clone() {
            Some(uuid) => Some(uuid),
            None => users::user_id_by_email(&self.client, email).await?,
        };

        let mut auth = AuthenticateBuilder::new(&self.client)
            .email(email)
            .password(password);
        if let Some(uuid) = uuid {
            auth = auth.uuid(uuid);
        }
        let token = auth.fetch().await?;

        let items = ListItemsBuilder::new(&self.client, &token.access_token)
            .fetch_all(true)
            .fetch()
            .await?;

        // Bounded fan-out; `buffered` yields in input order and `try_collect`
        // stops at the first error.
        let items: Vec<ItemWithAccounts> = stream::iter(items.into_iter().map(|item| {
            let client = self.client.clone();
            let access_token = token.access_token.clone();
            async move {
                let accounts = ListAccountsBuilder::new(&client, access_token)
                    .item_id(item.id)
                    .fetch_all(true)
                    .fetch()
                    .await?;
                Ok::<_, BridgeError>(ItemWithAccounts { item, accounts })
            }
        }))
        .buffered(self.accounts_concurrency.max(1))
        .try_collect()
        .await?;

        let transactions = ListTransactionsBuilder::new(&self.client, &token.access_token)
            .limit(SNAPSHOT_TRANSACTIONS)
            .fetch()
            .await?;

        Ok(UserSnapshot {
            token,
            items,
            transactions,
        })
    }
}

/// Runs the pipeline and writes the exported document to `path`.
///
/// # Errors
///
/// Propagates any pipeline or export error unchanged.
pub async fn export_user_data(
    client: &BridgeClient,
    email: &str,
    password: &str,
    path: impl AsRef<Path>,
) -> Result<(), BridgeError> {
    let snapshot = SnapshotBuilder::new(client)
        .email(email)
        .password(password)
        .fetch()
        .await?;
    snapshot.write_json(path)
}
