use std::time::Duration;

use httpmock::Method::GET;
use serde_json::json;
use url::Url;

use bridge_rs::{Backoff, BridgeClient, BridgeError, ListUsersBuilder, RetryConfig};

use crate::common::{BRIDGE_VERSION, CLIENT_ID, CLIENT_SECRET, client_for, paged_body, setup_server};

#[tokio::test]
async fn credential_headers_are_attached_to_every_request() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/users")
            .header("Client-Id", CLIENT_ID)
            .header("Client-Secret", CLIENT_SECRET)
            .header("Bridge-Version", BRIDGE_VERSION);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(json!([]), None));
    });

    let client = client_for(&server);
    ListUsersBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn missing_credentials_fail_before_any_network_io() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(json!([]), None));
    });

    // Client id and version absent, secret present.
    let client = BridgeClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .client_secret(CLIENT_SECRET)
        .build()
        .unwrap();

    let err = ListUsersBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert_hits(0);
    assert_eq!(
        err.to_string(),
        "The following required headers are missing: Client-Id, Bridge-Version"
    );
}

#[tokio::test]
async fn non_success_status_surfaces_unchanged() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(403)
            .header("content-type", "application/json")
            .json_body(json!({ "type": "forbidden" }));
    });

    // 403 is not in the retry set, so the request is sent exactly once.
    let client = client_for(&server);
    let err = ListUsersBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert_hits(1);
    match err {
        BridgeError::Status { status, .. } => assert_eq!(status, 403),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_retries_on_persistent_5xx() {
    let server = setup_server();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(503).body("Service Unavailable");
    });

    let max_retries = 2;
    let client = BridgeClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .bridge_version(BRIDGE_VERSION)
        .retry_config(RetryConfig {
            max_retries,
            backoff: Backoff::Fixed(Duration::from_millis(1)),
            ..RetryConfig::default()
        })
        .build()
        .unwrap();

    let err = ListUsersBuilder::new(&client).fetch().await.unwrap_err();

    fail_mock.assert_hits((1 + max_retries) as usize);
    match err {
        BridgeError::Status { status, .. } => assert_eq!(status, 503),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn retries_can_be_disabled() {
    let server = setup_server();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(503).body("Service Unavailable");
    });

    let client = BridgeClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .bridge_version(BRIDGE_VERSION)
        .retry_config(RetryConfig {
            enabled: false,
            ..RetryConfig::default()
        })
        .build()
        .unwrap();

    let _ = ListUsersBuilder::new(&client).fetch().await.unwrap_err();
    fail_mock.assert_hits(1);
}
