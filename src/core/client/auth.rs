//! Credential header validation for Bridge endpoints.

use super::constants::{HEADER_BRIDGE_VERSION, HEADER_CLIENT_ID, HEADER_CLIENT_SECRET};
use crate::core::error::BridgeError;

impl super::BridgeClient {
    /// Verify that all three credential header values are present.
    ///
    /// Collects every absent value so the error names the complete set of
    /// missing headers, e.g. `"The following required headers are missing:
    /// Client-Id, Bridge-Version"`. Called on each get/post before any
    /// network I/O.
    pub(crate) fn ensure_credential_headers(&self) -> Result<(), BridgeError> {
        let mut missing = Vec::new();

        if self.client_id.is_empty() {
            missing.push(HEADER_CLIENT_ID.to_string());
        }
        if self.client_secret.is_empty() {
            missing.push(HEADER_CLIENT_SECRET.to_string());
        }
        if self.bridge_version.is_empty() {
            missing.push(HEADER_BRIDGE_VERSION.to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::MissingHeaders(missing))
        }
    }
}
