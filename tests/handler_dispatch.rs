mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_read_existing_user() {
    let server = common::test_server(vec![common::user("u1", "taro", 20)]);

    let response = server.get("/v1/user/read").add_query_param("id", "u1").await;

    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"Id":"u1","Name":"taro","Age":20}"#);
}

#[tokio::test]
async fn test_read_is_repeatable() {
    let server = common::test_server(vec![common::user("u1", "taro", 20)]);

    let first = server.get("/v1/user/read").add_query_param("id", "u1").await;
    let second = server.get("/v1/user/read").add_query_param("id", "u1").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_method_is_not_part_of_route() {
    let server = common::test_server(vec![common::user("u1", "taro", 20)]);

    let response = server
        .post("/v1/user/read")
        .add_query_param("id", "u1")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["Name"], "taro");
}

#[tokio::test]
async fn test_create_duplicate_name_is_rejected() {
    let server = common::test_server(vec![common::user("u1", "taro", 20)]);

    let response = server
        .post("/v1/user/create")
        .json(&json!({"Name": "taro", "Age": 20}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"IsSuccess":false,"Message":"duplicate name"}"#
    );
}

#[tokio::test]
async fn test_create_with_invalid_json_is_bad_request() {
    let server = common::test_server(vec![]);

    let response = server.post("/v1/user/create").text("not-json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["IsSuccess"], false);

    // the use-case never ran, so nothing was stored
    let users = server.get("/v1/user/read").add_query_param("id", "u1").await;
    users.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_action_is_not_found() {
    let server = common::test_server(vec![]);

    let response = server.get("/v1/user/unknownaction").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["Message"],
        "unknown action: unknownaction"
    );
}

#[tokio::test]
async fn test_unknown_resource_is_not_found() {
    let server = common::test_server(vec![]);

    let response = server.get("/v1/author/read").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["IsSuccess"], false);
}

#[tokio::test]
async fn test_unmatched_path_uses_json_fallback() {
    let server = common::test_server(vec![]);

    for path in ["/v1/user", "/v1/user/read/extra", "/other"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["IsSuccess"], false, "{path}");
    }
}

#[tokio::test]
async fn test_user_lifecycle() {
    let server = common::test_server(vec![]);

    let created = server
        .post("/v1/user/create")
        .json(&json!({"Name": "hanako", "Age": 31}))
        .await;
    created.assert_status_ok();
    let created = created.json::<Value>();
    let id = created["Id"].as_str().unwrap().to_string();
    assert!(id.starts_with("u_"));
    assert_eq!(created["Age"], 31);

    let updated = server
        .post("/v1/user/update")
        .json(&json!({"Id": id, "Age": 32}))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["Age"], 32);
    assert_eq!(updated.json::<Value>()["Name"], "hanako");

    let deleted = server
        .delete("/v1/user/delete")
        .add_query_param("id", &id)
        .await;
    deleted.assert_status_ok();
    assert_eq!(
        deleted.json::<Value>(),
        json!({"IsSuccess": true, "Message": format!("user {id} deleted")})
    );

    let gone = server.get("/v1/user/read").add_query_param("id", &id).await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(gone.json::<Value>()["Message"], "user not found");
}

#[tokio::test]
async fn test_update_to_taken_name_is_rejected() {
    let server = common::test_server(vec![
        common::user("u1", "taro", 20),
        common::user("u2", "jiro", 18),
    ]);

    let response = server
        .post("/v1/user/update")
        .json(&json!({"Id": "u2", "Name": "taro"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["Message"], "duplicate name");
}

#[tokio::test]
async fn test_validation_failure_is_rejected() {
    let server = common::test_server(vec![]);

    let response = server
        .post("/v1/user/create")
        .json(&json!({"Name": "old", "Age": 200}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["IsSuccess"], false);
    assert!(
        json["Message"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("age")
    );
}

#[tokio::test]
async fn test_missing_query_id_is_bad_request() {
    let server = common::test_server(vec![]);

    let response = server.get("/v1/user/read").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_body_is_bad_request() {
    let server = common::server_for(common::memory_state(vec![], 32));

    let response = server
        .post("/v1/user/create")
        .json(&json!({"Name": "x".repeat(64), "Age": 20}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_book_lifecycle() {
    let server = common::test_server(vec![]);

    let created = server
        .post("/v1/book/create")
        .json(&json!({"Title": "Kokoro", "Author": "Natsume Soseki", "Description": "novel"}))
        .await;
    created.assert_status_ok();
    let id = created.json::<Value>()["Id"].as_str().unwrap().to_string();

    let cleared = server
        .post("/v1/book/update")
        .json(&json!({"Id": id, "Description": null}))
        .await;
    cleared.assert_status_ok();
    let cleared = cleared.json::<Value>();
    assert_eq!(cleared["Description"], Value::Null);
    assert_eq!(cleared["Title"], "Kokoro");

    let read = server.get("/v1/book/read").add_query_param("id", &id).await;
    read.assert_status_ok();
    assert_eq!(read.json::<Value>()["Author"], "Natsume Soseki");

    let deleted = server
        .post("/v1/book/delete")
        .add_query_param("id", &id)
        .await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>()["IsSuccess"], true);

    let again = server
        .post("/v1/book/delete")
        .add_query_param("id", &id)
        .await;
    again.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_default_headers_are_set() {
    let server = common::test_server(vec![common::user("u1", "taro", 20)]);

    let ok = server.get("/v1/user/read").add_query_param("id", "u1").await;
    let missing = server.get("/v1/user/unknownaction").await;

    for response in [ok, missing] {
        assert_eq!(response.header("content-type"), "application/json");
        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert_eq!(response.header("cache-control"), "no-store");
        assert_eq!(
            response.header("access-control-allow-origin"),
            "https://app.example"
        );
    }
}

#[tokio::test]
async fn test_undecodable_action_is_not_found() {
    let server = common::test_server(vec![]);

    let response = server.get("/v1/user/%FF").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.json::<Value>()["IsSuccess"], false);
}

#[tokio::test]
async fn test_update_with_overlong_description_is_rejected() {
    let server = common::test_server(vec![]);

    let created = server
        .post("/v1/book/create")
        .json(&json!({"Title": "Kokoro", "Author": "Natsume Soseki"}))
        .await;
    created.assert_status_ok();
    let id = created.json::<Value>()["Id"].as_str().unwrap().to_string();

    let response = server
        .post("/v1/book/update")
        .json(&json!({"Id": id, "Description": "x".repeat(3000)}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["IsSuccess"], false);

    let read = server.get("/v1/book/read").add_query_param("id", &id).await;
    assert_eq!(read.json::<Value>()["Description"], Value::Null);
}
