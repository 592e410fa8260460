//! bridge-rs: ergonomic client for the Bridge financial-data API.
//!
//! Authenticates a single end user, retrieves their linked items, the
//! accounts under each item and their most recent transactions, and can
//! export the aggregated result as a JSON document.
//!
//! ```no_run
//! use bridge_rs::{BridgeClient, snapshot};
//!
//! # async fn run() -> Result<(), bridge_rs::BridgeError> {
//! let client = BridgeClient::builder()
//!     .client_id("my-client-id")
//!     .client_secret("my-client-secret")
//!     .bridge_version("2021-06-01")
//!     .build()?;
//!
//! snapshot::export_user_data(&client, "a@b.com", "password", "./bridge-api-results.json").await?;
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod core;
pub mod items;
pub mod snapshot;
pub mod transactions;
pub mod users;

pub use accounts::{Account, ListAccountsBuilder};
pub use crate::core::{Backoff, BridgeClient, BridgeClientBuilder, BridgeError, RetryConfig};
pub use items::{Item, ListItemsBuilder};
pub use snapshot::{ItemWithAccounts, SnapshotBuilder, UserSnapshot};
pub use transactions::{ListTransactionsBuilder, Transaction};
pub use users::{AuthenticateBuilder, ListUsersBuilder, TokenInfo, User, user_id_by_email};
