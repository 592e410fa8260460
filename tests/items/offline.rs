use httpmock::Method::GET;
use serde_json::json;

use bridge_rs::{BridgeError, ListItemsBuilder};

use crate::common::{client_for, paged_body, setup_server};

#[tokio::test]
async fn single_page_fetch_passes_caller_parameters_through() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/items")
            .query_param("after", "cursor-a")
            .query_param("limit", "25")
            .header("authorization", "Bearer tok-123");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(
                json!([{ "id": 1, "status": 0, "bank_id": 7 }]),
                Some("/v2/items?after=ignored"),
            ));
    });

    let client = client_for(&server);
    let items = ListItemsBuilder::new(&client, "tok-123")
        .after("cursor-a")
        .limit(25)
        .fetch()
        .await
        .unwrap();

    // Single-page mode returns the page's resources and never follows the cursor.
    mock.assert_hits(1);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].extra["bank_id"], 7);
}

#[tokio::test]
async fn missing_access_token_fails_before_any_network_call() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/items");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(json!([]), None));
    });

    let client = client_for(&server);
    let err = ListItemsBuilder::new(&client, "").fetch().await.unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, BridgeError::MissingParameter("access token")));
}
