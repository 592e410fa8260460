use httpmock::Method::{GET, POST};
use serde_json::json;

use bridge_rs::{AuthenticateBuilder, BridgeError, ListUsersBuilder, user_id_by_email};

use crate::common::{client_for, paged_body, setup_server};

#[tokio::test]
async fn authenticate_sends_uuid_form() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/authenticate").json_body(json!({
            "user_uuid": "u1",
            "email": "a@b.com",
            "password": "hunter2",
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "access_token": "tok-123",
                "expires_at": "2024-04-21T19:59:28.068Z",
            }));
    });

    let client = client_for(&server);
    let token = AuthenticateBuilder::new(&client)
        .uuid("u1")
        .email("a@b.com")
        .password("hunter2")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(token.access_token, "tok-123");
}

#[tokio::test]
async fn external_user_id_wins_over_uuid() {
    let server = setup_server();

    // The body must carry external_user_id and no user_uuid.
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/authenticate").json_body(json!({
            "external_user_id": "ext-9",
            "email": "a@b.com",
            "password": "hunter2",
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "access_token": "tok-456",
                "expires_at": "2024-04-21T19:59:28.068Z",
            }));
    });

    let client = client_for(&server);
    let token = AuthenticateBuilder::new(&client)
        .uuid("u1")
        .external_user_id("ext-9")
        .email("a@b.com")
        .password("hunter2")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(token.access_token, "tok-456");
}

#[tokio::test]
async fn authenticate_validates_parameters_before_any_network_call() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/authenticate");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({}));
    });

    let client = client_for(&server);

    // No identifier at all.
    let err = AuthenticateBuilder::new(&client)
        .email("a@b.com")
        .password("hunter2")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::MissingParameter(_)));

    // Missing email.
    let err = AuthenticateBuilder::new(&client)
        .uuid("u1")
        .password("hunter2")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::MissingParameter("email")));

    // Missing password.
    let err = AuthenticateBuilder::new(&client)
        .uuid("u1")
        .email("a@b.com")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::MissingParameter("password")));

    mock.assert_hits(0);
}

#[tokio::test]
async fn authenticate_surfaces_non_success_status_unchanged() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/authenticate");
        then.status(401)
            .header("content-type", "application/json")
            .json_body(json!({ "type": "invalid_credentials" }));
    });

    let client = client_for(&server);
    let err = AuthenticateBuilder::new(&client)
        .uuid("u1")
        .email("a@b.com")
        .password("wrong")
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        BridgeError::Status { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_users_passes_caller_pagination_through() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/users")
            .query_param("after", "cursor-a")
            .query_param("limit", "10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(
                json!([{ "uuid": "u1", "email": "a@b.com" }]),
                None,
            ));
    });

    let client = client_for(&server);
    let users = ListUsersBuilder::new(&client)
        .after("cursor-a")
        .limit(10)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].uuid, "u1");
}

#[tokio::test]
async fn single_page_fetch_is_idempotent() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(
                json!([{ "uuid": "u1", "email": "a@b.com" }, { "uuid": "u2" }]),
                None,
            ));
    });

    let client = client_for(&server);
    let first = ListUsersBuilder::new(&client).fetch().await.unwrap();
    let second = ListUsersBuilder::new(&client).fetch().await.unwrap();

    mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn user_id_by_email_finds_first_exact_match() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(
                json!([
                    { "uuid": "u1", "email": "other@b.com" },
                    { "uuid": "u2", "email": "a@b.com" },
                    { "uuid": "u3", "email": "a@b.com" },
                ]),
                None,
            ));
    });

    let client = client_for(&server);
    let uuid = user_id_by_email(&client, "a@b.com").await.unwrap();

    mock.assert();
    assert_eq!(uuid.as_deref(), Some("u2"));
}

#[tokio::test]
async fn user_id_by_email_returns_none_when_absent() {
    let server = setup_server();

    let empty = server.mock(|when, then| {
        when.method(GET).path("/v2/users");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(paged_body(json!([{ "uuid": "u1", "email": "x@y.z" }]), None));
    });

    let client = client_for(&server);
    assert!(user_id_by_email(&client, "a@b.com").await.unwrap().is_none());
    empty.assert();
}

#[tokio::test]
async fn user_id_by_email_requires_an_email() {
    let server = setup_server();
    let client = client_for(&server);

    let err = user_id_by_email(&client, "").await.unwrap_err();
    assert!(matches!(err, BridgeError::MissingParameter("email")));
}
