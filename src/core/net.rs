//! Authenticated GET/POST against the Bridge API.
//!
//! An endpoint here is either a bare path (`/v2/items`) or a server-supplied
//! continuation cursor carrying its own query string. Caller query pairs are
//! merged into the resolved URL, with keys the cursor already encodes taking
//! precedence over the caller's values.

use crate::core::client::BridgeClient;
use crate::core::client::constants::{
    HEADER_BRIDGE_VERSION, HEADER_CLIENT_ID, HEADER_CLIENT_SECRET,
};
use crate::core::error::BridgeError;
use serde::Serialize;
use std::collections::HashSet;
use url::Url;

/// Query pairs carried alongside a request. Absent optional parameters are
/// simply never pushed, so they cannot leak into the URL.
pub(crate) type Query = Vec<(&'static str, String)>;

fn resolve_url(base: &Url, endpoint: &str, query: &[(&'static str, String)]) -> Result<Url, BridgeError> {
    let mut url = base.join(endpoint)?;

    // Keys already present in a cursor endpoint win over the caller's copy.
    let embedded: HashSet<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query {
            if !embedded.contains(*k) {
                pairs.append_pair(k, v);
            }
        }
    }

    Ok(url)
}

async fn finish(resp: reqwest::Response) -> Result<serde_json::Value, BridgeError> {
    if !resp.status().is_success() {
        return Err(BridgeError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(BridgeError::Json)
}

/// GET `endpoint` with the credential headers and an optional bearer token.
pub(crate) async fn get(
    client: &BridgeClient,
    endpoint: &str,
    query: &[(&'static str, String)],
    bearer: Option<&str>,
) -> Result<serde_json::Value, BridgeError> {
    client.ensure_credential_headers()?;

    let url = resolve_url(client.base_url(), endpoint, query)?;
    let mut req = client
        .http()
        .get(url)
        .header(HEADER_CLIENT_ID, client.client_id())
        .header(HEADER_CLIENT_SECRET, client.client_secret())
        .header(HEADER_BRIDGE_VERSION, client.bridge_version());
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }

    let resp = client.send_with_retry(req, None).await?;
    finish(resp).await
}

/// POST a JSON body to `endpoint` with the credential headers.
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &BridgeClient,
    endpoint: &str,
    body: &B,
) -> Result<serde_json::Value, BridgeError> {
    client.ensure_credential_headers()?;

    let url = resolve_url(client.base_url(), endpoint, &[])?;
    let req = client
        .http()
        .post(url)
        .header(HEADER_CLIENT_ID, client.client_id())
        .header(HEADER_CLIENT_SECRET, client.client_secret())
        .header(HEADER_BRIDGE_VERSION, client.bridge_version())
        .json(body);

    let resp = client.send_with_retry(req, None).await?;
    finish(resp).await
}
