use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user record as returned by `/v2/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user identifier.
    pub uuid: String,
    /// The user's email address, when one is attached to the record.
    pub email: Option<String>,
    /// Fields this client does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Access token returned by `/v2/authenticate`.
///
/// Produced once per run; no refresh logic exists, a run is assumed short
/// enough for the token to stay valid throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The bearer token value.
    pub access_token: String,
    /// When the token stops being valid.
    pub expires_at: DateTime<Utc>,
}
