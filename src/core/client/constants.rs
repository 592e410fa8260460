//! Centralized constants for default endpoints and headers.

/// Identifies the crate in outgoing requests.
pub(crate) const USER_AGENT: &str = concat!("bridge-rs/", env!("CARGO_PKG_VERSION"));

/// Production Bridge API base.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.bridgeapi.io";

/// Application client id header.
pub(crate) const HEADER_CLIENT_ID: &str = "Client-Id";

/// Application client secret header.
pub(crate) const HEADER_CLIENT_SECRET: &str = "Client-Secret";

/// API version header (a `YYYY-MM-DD` version tag).
pub(crate) const HEADER_BRIDGE_VERSION: &str = "Bridge-Version";

/// User authentication endpoint (non-paginated).
pub(crate) const EP_AUTHENTICATE: &str = "/v2/authenticate";

/// Users collection endpoint.
pub(crate) const EP_USERS: &str = "/v2/users";

/// Items collection endpoint.
pub(crate) const EP_ITEMS: &str = "/v2/items";

/// Accounts collection endpoint.
pub(crate) const EP_ACCOUNTS: &str = "/v2/accounts";

/// Transactions collection endpoint.
pub(crate) const EP_TRANSACTIONS: &str = "/v2/transactions";

/// Page size pinned on every fetch-all request.
pub(crate) const PAGE_SIZE: u32 = 500;

/// Hard ceiling on cursor hops in a fetch-all loop. A server that keeps
/// returning cursors past this is looping on itself.
pub(crate) const MAX_PAGES: usize = 10_000;
