use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::BridgeError;
use crate::users::model::TokenInfo;

/// Request body for `/v2/authenticate`. Exactly one identifier form is sent.
#[derive(Serialize)]
pub(crate) struct AuthRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) user_uuid: Option<&'a str>,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
}

/// `/v2/authenticate` returns the token object directly, not a paginated
/// envelope.
#[derive(Deserialize)]
pub(crate) struct AuthEnvelope {
    access_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl AuthEnvelope {
    pub(crate) fn into_token(self) -> Result<TokenInfo, BridgeError> {
        let access_token = self.access_token.ok_or_else(|| {
            BridgeError::Data("`access_token` missing from authenticate response".into())
        })?;
        let expires_at = self.expires_at.ok_or_else(|| {
            BridgeError::Data("`expires_at` missing from authenticate response".into())
        })?;
        Ok(TokenInfo {
            access_token,
            expires_at,
        })
    }
}
