//! Public client surface + builder.
//! Internals are split into `auth` (credential headers) and `constants`
//! (default endpoints + UA); the retry policy lives in `retry`.

mod auth;
pub(crate) mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::BridgeError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Authenticated transport for the Bridge API.
///
/// Holds one `reqwest::Client`, the base URL and the three application
/// credentials (`Client-Id`, `Client-Secret`, `Bridge-Version`). Construct it
/// once and hand a reference to each fetch builder; the client is cheap to
/// clone and immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    http: Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
    bridge_version: String,
    retry: RetryConfig,
}

impl Default for BridgeClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl BridgeClient {
    /// Create a new builder.
    pub fn builder() -> BridgeClientBuilder {
        BridgeClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
    pub(crate) fn client_id(&self) -> &str {
        &self.client_id
    }
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
    pub(crate) fn bridge_version(&self) -> &str {
        &self.bridge_version
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct BridgeClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    client_id: Option<String>,
    client_secret: Option<String>,
    bridge_version: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl BridgeClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g. a sandbox or a mock server).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the application client id sent as the `Client-Id` header.
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Set the application client secret sent as the `Client-Secret` header.
    #[must_use]
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Set the API version tag sent as the `Bridge-Version` header.
    #[must_use]
    pub fn bridge_version(mut self, version: impl Into<String>) -> Self {
        self.bridge_version = Some(version.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default transport retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// Credentials are allowed to be absent here; every subsequent request
    /// fails with [`BridgeError::MissingHeaders`] until all three are set.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<BridgeClient, BridgeError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(BridgeClient {
            http,
            base_url,
            client_id: self.client_id.unwrap_or_default(),
            client_secret: self.client_secret.unwrap_or_default(),
            bridge_version: self.bridge_version.unwrap_or_default(),
            retry: self.retry.unwrap_or_default(),
        })
    }
}
