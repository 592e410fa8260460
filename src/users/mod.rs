//! Users: listing, email lookup, and authentication.

mod model;
mod wire;

pub use model::{TokenInfo, User};

use crate::core::client::constants::{EP_AUTHENTICATE, EP_USERS};
use crate::core::net::{self, Query};
use crate::core::{BridgeClient, BridgeError, paging};

/// A builder for listing the application's users.
///
/// This is a single-page fetch: `after` and `limit` are passed through
/// untouched and no cursor is followed. Callers wanting the complete set
/// must loop themselves.
#[derive(Debug)]
pub struct ListUsersBuilder {
    client: BridgeClient,
    after: Option<String>,
    limit: Option<u32>,
}

impl ListUsersBuilder {
    /// Creates a new `ListUsersBuilder`.
    pub fn new(client: &BridgeClient) -> Self {
        Self {
            client: client.clone(),
            after: None,
            limit: None,
        }
    }

    /// Cursor pointing to the start of the desired set.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Maximum number of users to return.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Executes the request and returns one page of users.
    ///
    /// # Errors
    ///
    /// Returns a `BridgeError` if the request fails or the response is
    /// missing its `resources` field.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<User>, BridgeError> {
        let mut query: Query = Vec::new();
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }

        let body = net::get(&self.client, EP_USERS, &query, None).await?;
        Ok(paging::decode_page(body, EP_USERS)?.resources)
    }
}

/// Resolves a user's uuid from their email address.
///
/// Scans the server's default first page of `/v2/users` for the first exact
/// match and returns `Ok(None)` when no record matches. Known limitation:
/// the scan does not paginate, so a user beyond the first page will not be
/// found.
///
/// # Errors
///
/// Fails with [`BridgeError::MissingParameter`] when `email` is empty, or
/// with any transport/decoding error from the underlying list request.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn user_id_by_email(
    client: &BridgeClient,
    email: &str,
) -> Result<Option<String>, BridgeError> {
    if email.is_empty() {
        return Err(BridgeError::MissingParameter("email"));
    }

    let users = ListUsersBuilder::new(client).fetch().await?;

    Ok(users
        .into_iter()
        .find(|user| user.email.as_deref() == Some(email))
        .map(|user| user.uuid))
}

/// A builder for authenticating a user and obtaining an access token.
///
/// Exactly one identifier form is sent: [`external_user_id`] wins when both
/// it and [`uuid`] are set.
///
/// [`external_user_id`]: AuthenticateBuilder::external_user_id
/// [`uuid`]: AuthenticateBuilder::uuid
#[derive(Debug)]
pub struct AuthenticateBuilder {
    client: BridgeClient,
    uuid: Option<String>,
    external_user_id: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl AuthenticateBuilder {
    /// Creates a new `AuthenticateBuilder`.
    pub fn new(client: &BridgeClient) -> Self {
        Self {
            client: client.clone(),
            uuid: None,
            external_user_id: None,
            email: None,
            password: None,
        }
    }

    /// Identify the user by their server-assigned uuid.
    #[must_use]
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Identify the user by the application's own external id.
    #[must_use]
    pub fn external_user_id(mut self, id: impl Into<String>) -> Self {
        self.external_user_id = Some(id.into());
        self
    }

    /// The user's email address. Required.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The user's password. Required.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Executes the authentication request.
    ///
    /// # Errors
    ///
    /// Fails with [`BridgeError::MissingParameter`] before any network call
    /// when neither identifier form is set, or when email or password is
    /// absent. A non-success response surfaces unchanged as
    /// [`BridgeError::Status`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<TokenInfo, BridgeError> {
        if self.external_user_id.is_none() && self.uuid.is_none() {
            return Err(BridgeError::MissingParameter(
                "externalUserId or uuid of the user",
            ));
        }
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

        let request = if let Some(external) = self.external_user_id.as_deref() {
            wire::AuthRequest {
                external_user_id: Some(external),
                user_uuid: None,
                email,
                password,
            }
        } else {
            wire::AuthRequest {
                external_user_id: None,
                user_uuid: self.uuid.as_deref(),
                email,
                password,
            }
        };

        let body = net::post_json(&self.client, EP_AUTHENTICATE, &request).await?;
        let envelope: wire::AuthEnvelope = serde_json::from_value(body)?;
        envelope.into_token()
    }
}
